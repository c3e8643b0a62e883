//! Raw mode RAII guard.

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use std::io;

use crate::exits;

/// Raw mode on the alternate screen with the cursor hidden. Everything is
/// restored when the guard drops.
pub struct RawModeGuard {
    was_enabled: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;
        exits::set_screen_active(true);
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen, Hide) {
            exits::set_screen_active(false);
            let _ = disable_raw_mode();
            return Err(e);
        }
        Ok(Self { was_enabled: true })
    }

    /// Manually restore the terminal (also happens on drop).
    pub fn disable(&mut self) {
        if self.was_enabled {
            let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
            let _ = disable_raw_mode();
            exits::set_screen_active(false);
            self.was_enabled = false;
        }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        self.disable();
    }
}
