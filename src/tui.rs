use std::io::{self, Stdout};
use std::panic;

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

pub fn init() -> io::Result<Tui> {
    undo_on_error(
        || {
            execute!(io::stdout(), EnterAlternateScreen)?;
            enable_raw_mode()?;
            Terminal::new(CrosstermBackend::new(io::stdout()))
        },
        || {
            let _ = restore();
        },
    )
}

/// Run `setup`; if it fails part way, run `cleanup` before handing back the error.
fn undo_on_error<T>(
    setup: impl FnOnce() -> io::Result<T>,
    cleanup: impl FnOnce(),
) -> io::Result<T> {
    setup().inspect_err(|_| cleanup())
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)?;
    Ok(())
}

/// Leave the alternate screen before the panic message is printed.
pub fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore();
        original_hook(panic_info);
    }));
}
