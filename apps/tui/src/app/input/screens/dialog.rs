use crate::app::actions::Action;
use crate::app::state::Dialog;
use crate::roster::Confirmation;
use crossterm::event::{KeyCode, KeyEvent};

pub fn handle_dialog_input(dialog: &Dialog, key: KeyEvent) -> Option<Action> {
    match dialog {
        Dialog::Notice(_) => match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => Some(Action::DismissNotice),
            _ => None,
        },
        Dialog::ConfirmDelete { yes_selected, .. } => match key.code {
            KeyCode::Char('y' | 'Y') => Some(Action::ResolveDelete(Confirmation::Confirmed)),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                Some(Action::ResolveDelete(Confirmation::Declined))
            }
            KeyCode::Left | KeyCode::Right | KeyCode::Tab => Some(Action::ToggleDeleteChoice),
            KeyCode::Enter => Some(Action::ResolveDelete(if *yes_selected {
                Confirmation::Confirmed
            } else {
                Confirmation::Declined
            })),
            _ => None,
        },
    }
}
