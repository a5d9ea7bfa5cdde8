//! Terminal management
//!
//! Handles terminal setup, teardown, and restoration. The terminal is
//! restored when the guard drops and from the panic hook, so a crash never
//! leaves the shell in raw mode.

use std::io::{self, Stdout};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

/// Terminal type alias
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Owns the terminal while raw mode is on
pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    /// Enable raw mode and enter the alternate screen
    pub fn setup() -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn terminal_mut(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            tracing::warn!(error = %e, "failed to restore terminal");
        }
        let _ = self.terminal.show_cursor();
    }
}

/// Leave the alternate screen and disable raw mode
fn restore() -> io::Result<()> {
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Install panic hook to restore terminal on panic
///
/// Panics inside event bus handlers are caught by the bus, so the terminal
/// stays up for them.
pub fn install_panic_hook() {
    install_panic_hook_with(|| {
        let _ = restore();
    });
}

/// Install a panic hook that runs `restore` before the previous hook
///
/// Handler panics the bus isolates skip both; the bus logs them instead.
pub fn install_panic_hook_with<F>(restore: F)
where
    F: Fn() + Send + Sync + 'static,
{
    let original_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        if libwardview::bus::in_handler() {
            return;
        }
        restore();
        original_hook(panic_info);
    }));
}
