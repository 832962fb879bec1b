//! Action enum (Intent)
//!
//! Key presses turned into semantic actions

use crate::models::RecordKind;

/// User actions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    FocusNext,
    FocusPrev,

    SelectMode(RecordKind),
    Activate, // Enter / Space on a button
    Submit,

    // field editing
    Input(char),
    Newline,
    DeleteChar,
    FillNow, // Ctrl+T on date/time

    ScrollRecordsUp,
    ScrollRecordsDown,
}
