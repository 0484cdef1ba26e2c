use crate::app::actions::Action;
use crate::app::input::helpers::{next_gender, prev_gender};
use crate::app::state::{App, FormFocus};
use crate::roster::DraftField;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys for the open form. Text edits are reported as the field's complete
/// new value, the same shape a change callback would carry.
pub fn handle_form_input(app: &App, key: KeyEvent) -> Option<Action> {
    let draft = app.store.draft()?;
    let focus = app.form_focus;

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('s') => Some(Action::Save),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Esc => Some(Action::Cancel),
        KeyCode::Tab => Some(Action::FocusTable),
        KeyCode::Up | KeyCode::BackTab => Some(Action::FocusForm(focus.prev())),
        KeyCode::Down => Some(Action::FocusForm(focus.next())),
        KeyCode::Enter => match focus {
            FormFocus::Save => Some(Action::Save),
            FormFocus::Cancel => Some(Action::Cancel),
            FormFocus::Field(_) => Some(Action::FocusForm(focus.next())),
        },
        KeyCode::Left | KeyCode::Right => match focus {
            FormFocus::Field(DraftField::Gender) => {
                let gender = if key.code == KeyCode::Right {
                    next_gender(draft.gender)
                } else {
                    prev_gender(draft.gender)
                };
                Some(Action::UpdateDraft(
                    DraftField::Gender,
                    gender.as_str().to_string(),
                ))
            }
            FormFocus::Save => Some(Action::FocusForm(FormFocus::Cancel)),
            FormFocus::Cancel => Some(Action::FocusForm(FormFocus::Save)),
            FormFocus::Field(_) => None,
        },
        KeyCode::Char(c) => {
            let FormFocus::Field(field) = focus else {
                return None;
            };
            let mut value = draft.text(field)?.to_string();
            value.push(c);
            Some(Action::UpdateDraft(field, value))
        }
        KeyCode::Backspace => {
            let FormFocus::Field(field) = focus else {
                return None;
            };
            let mut value = draft.text(field)?.to_string();
            value.pop()?;
            Some(Action::UpdateDraft(field, value))
        }
        _ => None,
    }
}
