//! Terminal setup and RAII restoration for the Waitline TUI.
//!
//! [`Tui`] wraps a ratatui terminal, entering raw mode and the alternate
//! screen on creation and restoring the original state on drop, on explicit
//! [`Tui::restore`], or on panic via [`install_panic_hook`]. The [`Drop`]
//! implementation ignores restoration errors to stay safe during unwinding.
//!
//! # Example
//!
//! ```ignore
//! use waitline_widget::tui::{install_panic_hook, Tui};
//!
//! install_panic_hook(); // before creating the TUI
//! let mut tui = Tui::new()?;
//! tui.draw(|frame| { /* render widgets */ })?;
//! // terminal restored when `tui` goes out of scope
//! ```

use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// Installs a panic hook that restores the terminal before the panic message
/// is printed.
///
/// Call once at startup, before the first [`Tui`] is created; otherwise a
/// panic raised while the alternate screen is active would leave the shell
/// unusable and hide the message. Restoration is best-effort: the terminal
/// may already be in a broken state, so errors are ignored.
pub fn install_panic_hook() {
    let previous_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        previous_hook(panic_info);
    }));
}

/// RAII wrapper around the ratatui terminal.
///
/// Raw mode and the alternate screen are active for the lifetime of the
/// value; cleanup runs exactly once, whether through [`Tui::restore`] or
/// [`Drop`].
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    restored: bool,
}

impl Tui {
    /// Initializes the terminal: raw mode, alternate screen, hidden cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if any initialization step fails; partial setup is
    /// rolled back before returning.
    pub fn new() -> io::Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        if let Err(e) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(e);
        }

        let backend = CrosstermBackend::new(stdout);
        let terminal = match Terminal::new(backend) {
            Ok(t) => t,
            Err(e) => {
                let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
                let _ = disable_raw_mode();
                return Err(e);
            }
        };

        Ok(Self {
            terminal,
            restored: false,
        })
    }

    /// Draws a frame using the provided closure.
    ///
    /// # Errors
    ///
    /// Returns an error if rendering fails.
    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut ratatui::Frame),
    {
        self.terminal.draw(f)?;
        Ok(())
    }

    /// Explicitly restores the terminal to its original state.
    ///
    /// After this call the value must not be used for drawing; [`Drop`]
    /// skips cleanup once it has run.
    ///
    /// # Errors
    ///
    /// Unlike [`Drop`], restoration errors are propagated.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        execute!(io::stdout(), Show, LeaveAlternateScreen)?;
        disable_raw_mode()?;
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if self.restored {
            return;
        }
        // Errors are ignored: a double panic during unwinding would abort.
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
