//! App state (Model)
//!
//! Form draft, record store and focus

use crate::draft::{Field, FormDraft};
use crate::models::{RecordKind, RecordStore};

/// Application state
pub struct App {
    pub draft: FormDraft,
    pub store: RecordStore,
    pub focus: Focus,
    pub message: Option<String>,
    pub list_scroll: u16,
}

/// Focusable controls, mirroring the form's tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    ModeButton(RecordKind),
    Field(Field),
    SubmitButton,
}

impl App {
    /// Empty draft in dispatch mode and an empty store
    pub fn new() -> Self {
        Self {
            draft: FormDraft::new(),
            store: RecordStore::new(),
            focus: Focus::Field(Field::Date),
            message: None,
            list_scroll: 0,
        }
    }

    /// Tab order for the current mode
    pub fn focus_order(&self) -> Vec<Focus> {
        let mut order = vec![
            Focus::ModeButton(RecordKind::Dispatch),
            Focus::ModeButton(RecordKind::Return),
        ];
        order.extend(Field::visible(self.draft.mode).map(Focus::Field));
        order.push(Focus::SubmitButton);
        order
    }

    /// The field being typed into, if focus is on one
    pub fn focused_field(&self) -> Option<Field> {
        match self.focus {
            Focus::Field(field) => Some(field),
            _ => None,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
