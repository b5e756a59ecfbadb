//! Key event handling: maps crossterm events to actions, focus-aware.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{App, Focus};
use crate::event::Action;

/// Handles a crossterm event and returns an optional Action.
pub fn handle_event(app: &App, event: Event) -> Option<Action> {
    if let Event::Key(key) = event {
        if key.kind == KeyEventKind::Press {
            return handle_key_press(key, app);
        }
    }
    None
}

/// Handles key press events.
fn handle_key_press(key_event: KeyEvent, app: &App) -> Option<Action> {
    // Ctrl-C quits from anywhere.
    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c')
    {
        return Some(Action::Quit);
    }

    match app.focus {
        Focus::Input => handle_input_keys(key_event),
        Focus::Results => handle_results_keys(key_event),
    }
}

/// Keys while the address bar is focused. Printable characters edit the
/// query, so commands live on non-printable keys only.
fn handle_input_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Esc => Some(Action::Quit),
        KeyCode::Enter => Some(Action::SubmitLookup),
        KeyCode::Backspace => Some(Action::InputBackspace),
        KeyCode::Char('u') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Action::ClearInput)
        }
        KeyCode::Tab | KeyCode::Down => Some(Action::FocusResults),
        KeyCode::Char(c) => Some(Action::InputChar(c)),
        _ => None,
    }
}

/// Keys while the results list is focused.
fn handle_results_keys(key_event: KeyEvent) -> Option<Action> {
    match key_event.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Tab | KeyCode::Char('/') => Some(Action::FocusInput),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::SelectPrev),
        KeyCode::Enter | KeyCode::Char('o') => Some(Action::OpenSelected),
        KeyCode::Char('y') => Some(Action::CopySelectedId),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================
