pub(crate) mod helpers;
pub mod screens;

use crate::app::state::App;
use crossterm::event::KeyEvent;

/// Turns one key press into at most one action and applies it.
pub fn handle_input(app: &mut App, key: KeyEvent) {
    if let Some(action) = screens::route_input(app, key) {
        app.dispatch(action);
    }
}
