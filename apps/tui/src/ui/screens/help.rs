use crate::ui::widgets::popup::centered_rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const SHORTCUTS: [(&str, &str); 14] = [
    ("  a", "Add a user"),
    ("  e / Enter", "Edit the selected user"),
    ("  d / Delete", "Delete the selected user (asks first)"),
    ("  ↑/↓ PgUp/PgDn Home/End", "Move through the table"),
    ("  Tab", "Switch between form and table"),
    ("  ↑/↓ (form)", "Move between fields and buttons"),
    ("  ←/→ (form)", "Change gender"),
    ("  Enter (form)", "Next field, or press Save/Cancel"),
    ("  Ctrl+S", "Save the form"),
    ("  Esc", "Cancel the form / close dialog"),
    ("  y / n", "Answer the delete prompt"),
    ("  F1", "Toggle this help screen"),
    ("  q", "Quit (from the table)"),
    ("  Ctrl+C", "Quit from anywhere"),
];

pub fn render_help(f: &mut Frame<'_>) {
    let area = centered_rect(70, 80, f.area());

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut help_text = vec![
        TextLine::from(Span::styled(
            "User Manager",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from("Add, edit and delete users. Changes live only as long as the program runs."),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Keyboard Shortcuts:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    help_text.extend(SHORTCUTS.iter().map(|(key, description)| {
        TextLine::from(vec![
            Span::styled(*key, key_style),
            Span::raw(format!(" - {description}")),
        ])
    }));

    help_text.push(TextLine::from(""));
    help_text.push(TextLine::from(Span::styled(
        "Press Esc to close this help screen",
        Style::default().fg(Color::Yellow),
    )));

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(Text::from(help_text))
            .block(help_block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
