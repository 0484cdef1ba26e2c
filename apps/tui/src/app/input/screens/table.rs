use crate::app::actions::Action;
use crate::app::input::helpers::step_down;
use crate::app::state::App;
use crossterm::event::{KeyCode, KeyEvent};

const PAGE_ROWS: usize = 5;

pub fn handle_table_input(app: &App, key: KeyEvent) -> Option<Action> {
    let total_rows = app.store.len();
    let selected = app.selected_index;

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('a') => Some(Action::StartAdd),
        KeyCode::Char('e') | KeyCode::Enter => app.selected_user_id().map(Action::StartEdit),
        KeyCode::Char('d') | KeyCode::Delete => app.selected_user_id().map(Action::RequestDelete),
        KeyCode::Tab | KeyCode::BackTab if app.is_drafting() => {
            Some(Action::FocusForm(app.form_focus))
        }
        KeyCode::Up => Some(Action::Select(selected.saturating_sub(1))),
        KeyCode::Down => Some(Action::Select(step_down(selected, 1, total_rows))),
        KeyCode::PageUp => Some(Action::Select(selected.saturating_sub(PAGE_ROWS))),
        KeyCode::PageDown => Some(Action::Select(step_down(selected, PAGE_ROWS, total_rows))),
        KeyCode::Home => Some(Action::Select(0)),
        KeyCode::End => Some(Action::Select(total_rows.saturating_sub(1))),
        _ => None,
    }
}
