//! UI module
//!
//! MVI (Model-View-Intent) layout:
//! - Model (state.rs): the App struct holding draft, records and focus
//! - View (view/): pure functions from state to widgets
//! - Intent (actions.rs): key presses turned into semantic actions

pub mod actions;
pub mod input;
pub mod logic;
pub mod state;
pub mod view;

// Re-export for convenience
pub use input::handle_key_event;
pub use state::App;
pub use view::render;
