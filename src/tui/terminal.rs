//! Raw mode and alternate screen handling for the interactive table.
//!
//! [`TerminalSession`] puts the terminal into TUI mode on creation and
//! restores it when dropped, so an early return or `?` never leaves the
//! shell in raw mode. [`install_panic_hook`] covers panics.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout, Write};
use std::panic;

/// Enter the alternate screen on `writer`.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)
}

/// Leave the alternate screen and show the cursor. Errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Install a panic hook that restores the terminal before the panic
/// message is printed.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        leave_tui_mode(&mut io::stdout());
        original_hook(panic_info);
    }));
}

/// A terminal in TUI mode. Restored on [`restore`](Self::restore) or drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl TerminalSession {
    pub fn new() -> io::Result<TerminalSession> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = enter_tui_mode(&mut stdout) {
            leave_tui_mode(&mut stdout);
            return Err(err);
        }

        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(terminal) => terminal,
            Err(err) => {
                leave_tui_mode(&mut io::stdout());
                return Err(err);
            }
        };
        log::debug!("terminal entered tui mode");
        Ok(TerminalSession {
            terminal,
            restored: false,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Leave TUI mode. Safe to call more than once.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        leave_tui_mode(self.terminal.backend_mut());
        self.restored = true;
        log::debug!("terminal restored");
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        self.restore();
    }
}
