use crate::app::actions::Action;
use crate::app::state::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

mod dialog;
mod form;
mod help;
mod table;

/// Picks the handler for the key: help popup first, then any open dialog
/// (dialogs are modal), then whichever pane has focus.
pub fn route_input(app: &App, key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if let Some(action) = help::handle_help_toggle(app, key) {
        return action;
    }

    if let Some(dialog) = &app.dialog {
        return dialog::handle_dialog_input(dialog, key);
    }

    match app.focus {
        Focus::Form if app.is_drafting() => form::handle_form_input(app, key),
        Focus::Form | Focus::Table => table::handle_table_input(app, key),
    }
}
