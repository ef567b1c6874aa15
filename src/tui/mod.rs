//! Terminal interface: state machine, input mapping, views, and the event loop

mod input;
mod state;
pub mod view;

pub use input::Input;
pub use state::{App, DEFAULT_TAG, Editor, Flow, INDENT, Screen, Viewport};

use crate::store::NoteRepository;
use anyhow::{Context, Result};
use crossterm::cursor::{Hide, Show};
use crossterm::event;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use log::{debug, warn};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use std::io::Stdout;
use std::panic;
use std::sync::Once;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Takes over the terminal and processes input until the app quits.
///
/// The terminal is restored when the loop returns, fails, or panics. A loop
/// error takes precedence over a failure to restore.
pub fn run<R: NoteRepository>(app: &mut App<R>) -> Result<()> {
    install_panic_hook();
    let guard = TerminalGuard::acquire()?;

    let outcome = Terminal::new(CrosstermBackend::new(std::io::stdout()))
        .context("creating terminal backend")
        .and_then(|mut terminal| event_loop(&mut terminal, app));

    settle(outcome, guard.release())
}

/// One event at a time: draw, read, apply.
fn event_loop<R: NoteRepository>(terminal: &mut Term, app: &mut App<R>) -> Result<()> {
    let size = terminal.size().context("reading terminal size")?;
    app.handle(Input::Resize {
        width: size.width,
        height: size.height,
    });

    loop {
        terminal
            .draw(|frame| view::draw(frame, app))
            .context("rendering frame")?;

        let event = event::read().context("reading terminal event")?;
        let Some(input) = Input::from_event(&event) else {
            continue;
        };

        if app.handle(input) == Flow::Quit {
            debug!("quit requested");
            return Ok(());
        }
    }
}

/// Combines the loop outcome with the restore outcome.
fn settle(outcome: Result<()>, restored: Result<()>) -> Result<()> {
    match (outcome, restored) {
        (Err(err), Err(restore_err)) => {
            warn!("failed to restore terminal: {restore_err:#}");
            Err(err)
        }
        (outcome, restored) => outcome.and(restored),
    }
}

// ===========================================
// Terminal Modes
// ===========================================

/// Holds raw mode and the alternate screen; dropping it restores both.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn acquire() -> Result<Self> {
        enable_raw_mode().context("enabling raw mode")?;
        // From here on a failed step still drops the guard and leaves raw mode.
        let guard = Self { active: true };
        execute!(std::io::stdout(), EnterAlternateScreen, Hide)
            .context("switching to alternate screen")?;
        Ok(guard)
    }

    fn release(mut self) -> Result<()> {
        self.active = false;
        leave_terminal()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active
            && let Err(err) = leave_terminal()
        {
            warn!("failed to restore terminal: {err:#}");
        }
    }
}

/// Leaves raw mode and the alternate screen, attempting both even if one fails.
fn leave_terminal() -> Result<()> {
    let raw = disable_raw_mode().context("disabling raw mode");
    let screen = execute!(std::io::stdout(), LeaveAlternateScreen, Show)
        .context("restoring screen state");
    raw.and(screen)
}

/// Restores the terminal before the panic message is printed, so it is not
/// lost on the alternate screen.
fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = leave_terminal();
            previous(info);
        }));
    });
}
