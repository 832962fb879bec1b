//! State updates (Update/Dispatch)

use chrono::Local;
use tracing::{debug, info};

use super::actions::Action;
use super::state::{App, Focus};
use super::view::record_list_lines;
use crate::draft::Field;
use crate::models::RecordKind;

impl App {
    /// Applies one action; returns true when the app should exit
    pub fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::FocusNext => self.move_focus(1),
            Action::FocusPrev => self.move_focus(-1),

            Action::SelectMode(mode) => self.select_mode(mode),
            Action::Activate => match self.focus {
                Focus::ModeButton(mode) => self.select_mode(mode),
                Focus::SubmitButton => self.submit(),
                Focus::Field(_) => {}
            },
            Action::Submit => self.submit(),

            Action::Input(c) => self.input_char(c),
            Action::Newline => {
                if let Some(field) = self.focused_field().filter(|f| f.is_multiline()) {
                    self.draft.value_mut(field).push('\n');
                }
            }
            Action::DeleteChar => {
                if let Some(field) = self.focused_field() {
                    self.draft.value_mut(field).pop();
                }
            }
            Action::FillNow => self.fill_now(),

            Action::ScrollRecordsUp => self.list_scroll = self.list_scroll.saturating_sub(5),
            Action::ScrollRecordsDown => self.scroll_records_down(),
        }
        false
    }

    // ============ focus ============

    fn move_focus(&mut self, step: isize) {
        let order = self.focus_order();
        let len = order.len() as isize;
        let current = order.iter().position(|f| *f == self.focus).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(len) as usize;
        self.focus = order[next];
    }

    // ============ record list ============

    /// Scrolls down, stopping with the last line at the top of the pane
    fn scroll_records_down(&mut self) {
        let total = record_list_lines(self.store.records()).len();
        let max = u16::try_from(total.saturating_sub(1)).unwrap_or(u16::MAX);
        self.list_scroll = self.list_scroll.saturating_add(5).min(max);
    }

    // ============ mode toggle ============

    /// Switches the record kind; entered values are kept
    pub fn select_mode(&mut self, mode: RecordKind) {
        if self.draft.mode != mode {
            debug!(?mode, "mode switched");
        }
        self.draft.set_mode(mode);

        // the mode-specific slot swaps between volunteers and notes
        self.focus = match (self.focus, mode) {
            (Focus::Field(Field::Notes), RecordKind::Dispatch) => Focus::Field(Field::Volunteers),
            (Focus::Field(Field::Volunteers), RecordKind::Return) => Focus::Field(Field::Notes),
            (focus, _) => focus,
        };
    }

    // ============ field editing ============

    fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            let value = self.draft.value_mut(field);
            if field.accepts(c, value) {
                value.push(c);
            }
        }
    }

    /// Fills the focused date or time field with the current moment
    fn fill_now(&mut self) {
        let now = Local::now();
        match self.focused_field() {
            Some(Field::Date) => self.draft.set(Field::Date, now.format("%Y-%m-%d").to_string()),
            Some(Field::Time) => self.draft.set(Field::Time, now.format("%H:%M").to_string()),
            _ => {}
        }
    }

    // ============ submission ============

    /// Appends a record built from the draft, then clears the draft's text.
    ///
    /// An empty or incomplete required field blocks the submission: nothing is recorded and
    /// focus jumps to that field.
    pub fn submit(&mut self) {
        if let Some(missing) = self.draft.first_missing() {
            debug!(field = ?missing, "submission blocked by incomplete required field");
            self.focus = Focus::Field(missing);
            self.message = Some(format!("Completa este campo: {}", missing.label()));
            return;
        }

        let record = self.draft.to_record();
        let kind = record.kind();
        let total = self.store.append(record);
        info!(?kind, total, "record saved");

        self.draft.clear_text();
        self.focus = Focus::Field(Field::Date);
        self.message = Some(format!("Registro de {} guardado", kind.label()));
    }
}
