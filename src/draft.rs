//! Form draft: the live, editable values behind the form

use chrono::{NaiveDate, NaiveTime};

use crate::models::{Record, RecordDetail, RecordKind, split_entries};

/// Editable form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Date,
    Time,
    Place,
    Responsible,
    Volunteers,
    Notes,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Date => "Fecha",
            Field::Time => "Hora",
            Field::Place => "Lugar",
            Field::Responsible => "Responsables (uno por línea)",
            Field::Volunteers => "Voluntarios (uno por línea)",
            Field::Notes => "Novedades",
        }
    }

    pub fn is_multiline(self) -> bool {
        matches!(self, Field::Responsible | Field::Volunteers | Field::Notes)
    }

    pub fn is_required(self, mode: RecordKind) -> bool {
        match self {
            Field::Date | Field::Time | Field::Place | Field::Responsible => true,
            Field::Volunteers => mode == RecordKind::Dispatch,
            Field::Notes => false,
        }
    }

    /// Whether a picker-style field can hold this character
    pub fn accepts(self, c: char, current: &str) -> bool {
        match self {
            Field::Date => current.chars().count() < 10 && (c.is_ascii_digit() || c == '-'),
            Field::Time => current.chars().count() < 5 && (c.is_ascii_digit() || c == ':'),
            _ => true,
        }
    }

    /// Whether a value is complete enough to submit.
    ///
    /// Pickers only ever hand over a whole `YYYY-MM-DD` date or `HH:MM` time;
    /// other fields just need a character.
    pub fn is_filled(self, value: &str) -> bool {
        match self {
            // chrono accepts unpadded numbers, a picker never produces them
            Field::Date => {
                value.len() == 10 && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
            }
            Field::Time => value.len() == 5 && NaiveTime::parse_from_str(value, "%H:%M").is_ok(),
            _ => !value.is_empty(),
        }
    }

    /// Fields shown for a mode, in display order
    pub fn visible(mode: RecordKind) -> [Field; 5] {
        let last = match mode {
            RecordKind::Dispatch => Field::Volunteers,
            RecordKind::Return => Field::Notes,
        };
        [
            Field::Date,
            Field::Time,
            Field::Place,
            Field::Responsible,
            last,
        ]
    }
}

/// Raw input values plus the selected record kind
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub mode: RecordKind,
    pub date: String,
    pub time: String,
    pub place: String,
    pub responsible_text: String,
    pub volunteer_text: String,
    pub notes_text: String,
}

impl FormDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Date => &self.date,
            Field::Time => &self.time,
            Field::Place => &self.place,
            Field::Responsible => &self.responsible_text,
            Field::Volunteers => &self.volunteer_text,
            Field::Notes => &self.notes_text,
        }
    }

    pub fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Date => &mut self.date,
            Field::Time => &mut self.time,
            Field::Place => &mut self.place,
            Field::Responsible => &mut self.responsible_text,
            Field::Volunteers => &mut self.volunteer_text,
            Field::Notes => &mut self.notes_text,
        }
    }

    /// Replaces a field's value
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.value_mut(field) = value.into();
    }

    /// Changing the mode keeps every entered value.
    pub fn set_mode(&mut self, mode: RecordKind) {
        self.mode = mode;
    }

    /// First required field of the current mode that is empty or incomplete
    pub fn first_missing(&self) -> Option<Field> {
        Field::visible(self.mode)
            .into_iter()
            .find(|f| f.is_required(self.mode) && !f.is_filled(self.value(*f)))
    }

    /// Builds the record the current values describe
    pub fn to_record(&self) -> Record {
        let detail = match self.mode {
            RecordKind::Dispatch => RecordDetail::Dispatch {
                volunteers: split_entries(&self.volunteer_text),
            },
            RecordKind::Return => RecordDetail::Return {
                notes: self.notes_text.clone(),
            },
        };
        Record {
            date: self.date.clone(),
            time: self.time.clone(),
            place: self.place.clone(),
            responsible_parties: split_entries(&self.responsible_text),
            detail,
        }
    }

    /// Clears all text, leaving the mode as it was
    pub fn clear_text(&mut self) {
        *self = Self {
            mode: self.mode,
            ..Self::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled(mode: RecordKind) -> FormDraft {
        FormDraft {
            mode,
            date: "2024-05-01".to_string(),
            time: "08:00".to_string(),
            place: "Base Norte".to_string(),
            responsible_text: "Ana".to_string(),
            volunteer_text: "Luis\nMaria".to_string(),
            notes_text: "Todo bien".to_string(),
        }
    }

    #[test]
    fn test_new_draft_is_empty_dispatch() {
        let draft = FormDraft::new();
        assert_eq!(draft.mode, RecordKind::Dispatch);
        for field in Field::visible(RecordKind::Dispatch) {
            assert_eq!(draft.value(field), "");
        }
        assert_eq!(draft.notes_text, "");
    }

    #[test]
    fn test_dispatch_record_has_volunteers_and_no_notes() {
        let record = filled(RecordKind::Dispatch).to_record();
        assert_eq!(
            record,
            Record {
                date: "2024-05-01".to_string(),
                time: "08:00".to_string(),
                place: "Base Norte".to_string(),
                responsible_parties: vec!["Ana".to_string()],
                detail: RecordDetail::Dispatch {
                    volunteers: vec!["Luis".to_string(), "Maria".to_string()],
                },
            }
        );
        assert_eq!(record.notes(), None);
    }

    #[test]
    fn test_return_record_keeps_empty_notes() {
        let mut draft = filled(RecordKind::Return);
        draft.notes_text.clear();
        let record = draft.to_record();
        assert_eq!(record.kind(), RecordKind::Return);
        assert_eq!(record.notes(), Some(""));
        assert_eq!(record.volunteers(), None);
    }

    #[test]
    fn test_mode_switch_keeps_values() {
        let mut draft = filled(RecordKind::Dispatch);
        draft.set_mode(RecordKind::Return);
        draft.set_mode(RecordKind::Dispatch);
        assert_eq!(draft, filled(RecordKind::Dispatch));
    }

    #[test]
    fn test_clear_text_keeps_mode() {
        let mut draft = filled(RecordKind::Return);
        draft.clear_text();
        assert_eq!(
            draft,
            FormDraft {
                mode: RecordKind::Return,
                ..FormDraft::default()
            }
        );
    }

    #[test]
    fn test_required_fields_depend_on_mode() {
        let mut draft = filled(RecordKind::Dispatch);
        assert_eq!(draft.first_missing(), None);

        draft.set(Field::Volunteers, "");
        assert_eq!(draft.first_missing(), Some(Field::Volunteers));

        // Volunteers are hidden and optional on a return; notes are never required.
        draft.set_mode(RecordKind::Return);
        draft.set(Field::Notes, "");
        assert_eq!(draft.first_missing(), None);

        draft.set(Field::Place, "");
        draft.set(Field::Date, "");
        assert_eq!(draft.first_missing(), Some(Field::Date));
    }

    #[test]
    fn test_partial_date_or_time_is_missing() {
        let mut draft = filled(RecordKind::Dispatch);
        draft.set(Field::Date, "2024-05");
        assert_eq!(draft.first_missing(), Some(Field::Date));

        draft.set(Field::Date, "2024-05-01");
        draft.set(Field::Time, "8");
        assert_eq!(draft.first_missing(), Some(Field::Time));

        draft.set(Field::Time, "08:0");
        assert_eq!(draft.first_missing(), Some(Field::Time));

        draft.set(Field::Time, "23:59");
        assert_eq!(draft.first_missing(), None);
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut draft = filled(RecordKind::Dispatch);
        draft.set(Field::Responsible, "  \n");
        assert_eq!(draft.first_missing(), None);
        assert_eq!(draft.to_record().responsible_parties, vec!["  ", ""]);
    }

    #[test]
    fn test_picker_fields_reject_foreign_chars() {
        assert!(Field::Date.accepts('2', "2024-05-"));
        assert!(Field::Date.accepts('-', "2024"));
        assert!(!Field::Date.accepts('a', ""));
        assert!(!Field::Date.accepts('1', "2024-05-01"));

        assert!(Field::Time.accepts(':', "08"));
        assert!(!Field::Time.accepts('-', "08"));
        assert!(!Field::Time.accepts('0', "08:00"));

        assert!(Field::Place.accepts('é', "Base"));
    }
}
