//! Terminal lifecycle
//!
//! Raw mode, the alternate screen and mouse capture are held by
//! [`TerminalGuard`] and released when it drops, on every exit path. The
//! panic hook in `main` calls [`restore_terminal`] directly.

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub struct TerminalGuard {
    terminal: Tui,
}

impl TerminalGuard {
    /// Take over the terminal
    pub fn enter() -> Result<Self> {
        enable_raw_mode()?;
        match Self::setup() {
            Ok(terminal) => {
                tracing::debug!("Terminal acquired");
                Ok(Self { terminal })
            }
            Err(e) => {
                restore_terminal();
                Err(e)
            }
        }
    }

    fn setup() -> Result<Tui> {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.hide_cursor()?;
        terminal.clear()?;
        Ok(terminal)
    }

    pub fn terminal(&mut self) -> &mut Tui {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
        if let Err(e) = self.terminal.show_cursor() {
            tracing::warn!("Failed to show cursor: {}", e);
        }
        tracing::debug!("Terminal released");
    }
}

/// Restore terminal state - safe to call more than once
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
}
