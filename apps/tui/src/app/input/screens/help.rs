use crate::app::actions::Action;
use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent};

/// `Some` when the key belongs to the help popup. While the popup is open it
/// swallows every key, returning `Some(None)` for the ones it ignores.
pub fn handle_help_toggle(app: &App, key: KeyEvent) -> Option<Option<Action>> {
    if key.code == KeyCode::F(1) {
        return Some(Some(Action::ToggleHelp));
    }

    if app.show_help {
        if key.code == KeyCode::Esc {
            return Some(Some(Action::ToggleHelp));
        }
        return Some(None);
    }

    None
}
