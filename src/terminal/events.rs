use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::input::{InputEvent, Key};

/// Terminal events the front end reacts to
#[derive(Debug, Clone, PartialEq)]
pub enum TerminalEvent {
    Input(InputEvent),
    Resize(u16, u16),
    None,
}

/// Check for available events with a timeout
pub fn poll(timeout: Duration) -> Result<bool, Box<dyn std::error::Error>> {
    Ok(event::poll(timeout)?)
}

/// Read the next event; blocks if none is pending
pub fn read() -> Result<TerminalEvent, Box<dyn std::error::Error>> {
    Ok(match event::read()? {
        Event::Key(key_event) => {
            translate_key(key_event).map_or(TerminalEvent::None, TerminalEvent::Input)
        }
        Event::Resize(cols, rows) => TerminalEvent::Resize(cols, rows),
        _ => TerminalEvent::None,
    })
}

/// Normalize a crossterm key event. Releases are dropped.
pub fn translate_key(key_event: KeyEvent) -> Option<InputEvent> {
    if key_event.kind == KeyEventKind::Release {
        return None;
    }

    let modifiers = key_event.modifiers;
    let shift = modifiers.contains(KeyModifiers::SHIFT);
    let alt = modifiers.contains(KeyModifiers::ALT);
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);

    let key = match key_event.code {
        KeyCode::Char(c) => {
            if ctrl && !alt {
                Key::Ctrl(c.to_ascii_lowercase())
            } else if alt && !ctrl {
                Key::Alt(c.to_ascii_lowercase())
            } else {
                Key::Char(c)
            }
        }
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Tab | KeyCode::BackTab => Key::Tab,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Esc,
        _ => Key::Null,
    };

    Some(InputEvent {
        key,
        shift,
        alt,
        ctrl,
    })
}
