//! Terminal input: a thin layer over crossterm events so the runner and
//! handlers do not depend on crossterm's event types directly.

use crossterm::event::{self, Event, KeyEventKind};
use std::io;
use std::time::Duration;

pub mod keyboard;

pub use keyboard::{is_ctrl_c, is_printable_key, KeyCode, KeyEvent, KeyModifiers};

/// Events the runner reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            // Release/repeat events are reported on some platforms; only
            // presses drive state changes.
            Event::Key(k) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

/// Read the next event; call after `poll` returned `true`.
pub fn read_event() -> io::Result<InputEvent> {
    event::read().map(InputEvent::from)
}
