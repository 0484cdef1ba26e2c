use crate::app::state::{App, Focus};
use crate::roster::Mode;
use crate::ui::widgets::hints::key_hints;
use crate::ui::widgets::user_form::{UserForm, FORM_HEIGHT};
use crate::ui::widgets::user_table::UserTable;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_roster(app: &App, f: &mut Frame<'_>) {
    let form_height = if app.is_drafting() { FORM_HEIGHT } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),           // Title and Add User
            Constraint::Length(form_height), // Form, only while drafting
            Constraint::Min(5),              // Table
            Constraint::Length(1),           // Status message
            Constraint::Length(3),           // Shortcuts
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_header(app, f, chunks[0]);

    if let Some(draft) = app.store.draft() {
        let title = match app.mode() {
            Mode::Editing(_) => "Edit User",
            Mode::Adding | Mode::Idle => "Add User",
        };
        let focus = (app.focus == Focus::Form).then_some(app.form_focus);
        let form = UserForm::new(draft, title).focus(focus);

        if app.dialog.is_none() && !app.show_help {
            if let Some(position) = form.cursor_position(chunks[1]) {
                f.set_cursor_position(position);
            }
        }
        f.render_widget(form, chunks[1]);
    }

    let table = UserTable::new(app.store.users())
        .selected(app.selected_index)
        .drafting(app.is_drafting())
        .focused(app.focus == Focus::Table || !app.is_drafting());
    f.render_widget(table, chunks[2]);

    let status = Paragraph::new(app.status_message.as_str())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[3]);

    render_shortcuts(app, f, chunks[4]);
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let add_style = if app.is_drafting() {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::DIM)
    } else {
        Style::default()
            .fg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .title("== User Management ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let header = Paragraph::new(TextLine::from(Span::styled("[+ Add User]", add_style)))
        .block(block)
        .alignment(Alignment::Right);
    f.render_widget(header, area);
}

fn render_shortcuts(app: &App, f: &mut Frame<'_>, area: Rect) {
    let hints = if app.focus == Focus::Form && app.is_drafting() {
        key_hints(&[
            ("Enter", "Next / Press button"),
            ("Ctrl+S", "Save"),
            ("Esc", "Cancel"),
            ("Tab", "Table"),
            ("F1", "Help"),
        ])
    } else if app.is_drafting() {
        key_hints(&[
            ("↑/↓", "Navigate"),
            ("d", "Delete"),
            ("Tab", "Back to form"),
            ("F1", "Help"),
        ])
    } else {
        key_hints(&[
            ("↑/↓", "Navigate"),
            ("a", "Add User"),
            ("e/Enter", "Edit"),
            ("d/Del", "Delete"),
            ("F1", "Help"),
            ("q", "Quit"),
        ])
    };

    let help_paragraph = Paragraph::new(hints)
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(help_paragraph, area);
}
