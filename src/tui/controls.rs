//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;
use crate::estimator::DwellingSize;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Char('1') => app.set_dwelling(DwellingSize::OneRoom),
        KeyCode::Char('2') => app.set_dwelling(DwellingSize::TwoRoom),
        KeyCode::Char('3') => app.set_dwelling(DwellingSize::ThreeRoom),
        KeyCode::Char('h') => app.toggle_habitation(),
        KeyCode::Char('a') => app.toggle_ac(),
        KeyCode::Char('f') => app.toggle_fridge(),
        KeyCode::Char('w') => app.toggle_washer(),
        KeyCode::Char('+' | '=') | KeyCode::Right => app.days_up(),
        KeyCode::Char('-') | KeyCode::Left => app.days_down(),
        KeyCode::Char('p') => app.next_preset(),
        _ => {}
    }
}
