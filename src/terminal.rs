use std::io::{self, Write};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};

/// Raw mode plus the alternate screen, undone on drop.
///
/// The guard exists as soon as raw mode is on, so a failure further into
/// setup still leaves the terminal usable.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // nothing useful to do with errors while unwinding
        let _ = disable_raw_mode();
        let _ = leave_screen(&mut io::stdout());
    }
}

/// Leaves the alternate screen and shows the cursor again
fn leave_screen(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)
}
