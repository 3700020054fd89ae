use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::Duration;
use tracing::info;

use crate::app::settings::SettingsStore;
use crate::app::App;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, install_panic_hook, restore_terminal};
use crate::ui;

/// Run the interactive UI until the user quits.
pub fn run_app(settings_store: SettingsStore) -> anyhow::Result<()> {
    install_panic_hook();
    let mut terminal = init_terminal()?;
    let mut app = App::new(settings_store);

    let result = event_loop(&mut terminal, &mut app);

    // Restore terminal state before reporting any loop error.
    restore_terminal(terminal)?;
    info!("exiting");
    result
}

/// Draw/poll/dispatch until a handler asks to quit.
pub fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, &*app))?;

        let page_size = ui::table_viewport_rows(terminal.size()?.height);

        if poll(Duration::from_millis(100))? {
            match read_event()? {
                InputEvent::Key(key) => {
                    if handlers::handle_key(app, key, page_size)? {
                        break;
                    }
                }
                InputEvent::Resize(_, _) => { /* redraw on next loop */ }
                InputEvent::Other => {}
            }
        }
    }
    Ok(())
}
