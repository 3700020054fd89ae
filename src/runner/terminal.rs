use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use thiserror::Error;

/// Errors returned by terminal initialization/restore helpers.
#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("terminal I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter the alternate screen with raw mode enabled and return a terminal.
pub fn init_terminal() -> Result<Tui, TerminalError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

/// Leave the alternate screen, disable raw mode and show the cursor.
pub fn restore_terminal(mut terminal: Tui) -> Result<(), TerminalError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Best-effort restore used from the panic hook, where no `Terminal` is at hand.
pub fn restore_raw_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}

/// Chain a panic hook that puts the terminal back before the default
/// hook prints the panic message.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_raw_terminal();
        previous(info);
    }));
}
