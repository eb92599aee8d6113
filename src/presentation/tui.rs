//! Terminal Lifecycle
//!
//! Raw mode and alternate screen setup/teardown, plus a panic hook that
//! restores the terminal before the panic message prints.

use crate::error::{TuiError, TuiResult};
use crossterm::{
    cursor,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{stdout, Stdout};

/// Terminal type used throughout the app
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen, returning a ready terminal.
pub fn init() -> TuiResult<Tui> {
    enable_raw_mode().map_err(|e| TuiError::InitFailed(e.to_string()))?;

    let mut out = stdout();
    out.execute(EnterAlternateScreen)
        .map_err(|e| TuiError::InitFailed(e.to_string()))?;
    out.execute(cursor::Hide)
        .map_err(|e| TuiError::InitFailed(e.to_string()))?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout()))
        .map_err(|e| TuiError::InitFailed(e.to_string()))?;
    Ok(terminal)
}

/// Leave the alternate screen and disable raw mode.
pub fn restore() -> TuiResult<()> {
    let mut out = stdout();
    out.execute(cursor::Show)
        .map_err(|e| TuiError::RestoreFailed(e.to_string()))?;
    out.execute(LeaveAlternateScreen)
        .map_err(|e| TuiError::RestoreFailed(e.to_string()))?;
    disable_raw_mode().map_err(|e| TuiError::RestoreFailed(e.to_string()))?;
    Ok(())
}

/// Install a panic hook that restores the terminal first, so panics stay
/// readable instead of landing on the alternate screen.
pub fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore();
        original(info);
    }));
}
