use crate::app::state::{Dialog, Notice, NoticeKind};
use crate::ui::widgets::hints::key_hints;
use crate::ui::widgets::popup::fixed_rect;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 50;
const DIALOG_HEIGHT: u16 = 8;

pub fn render_dialog(dialog: &Dialog, f: &mut Frame<'_>) {
    match dialog {
        Dialog::Notice(notice) => render_notice(notice, f),
        Dialog::ConfirmDelete {
            name, yes_selected, ..
        } => render_confirm_delete(name, *yes_selected, f),
    }
}

const fn notice_color(kind: NoticeKind) -> Color {
    match kind {
        NoticeKind::Success => Color::Green,
        NoticeKind::Warning => Color::Yellow,
        NoticeKind::Error => Color::Red,
    }
}

fn render_notice(notice: &Notice, f: &mut Frame<'_>) {
    let area = fixed_rect(DIALOG_WIDTH, DIALOG_HEIGHT, f.area());
    let color = notice_color(notice.kind);

    let block = Block::default()
        .title(notice.title)
        .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let text = Text::from(vec![
        TextLine::from(""),
        TextLine::from(notice.text),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "[ OK ]",
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        key_hints(&[("Enter", "Close")]),
    ]);

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_confirm_delete(name: &str, yes_selected: bool, f: &mut Frame<'_>) {
    let area = fixed_rect(DIALOG_WIDTH, DIALOG_HEIGHT, f.area());

    let block = Block::default()
        .title("Are you sure?")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let button = |label: &'static str, selected: bool, color: Color| {
        let style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        Span::styled(label, style)
    };

    let text = Text::from(vec![
        TextLine::from(""),
        TextLine::from("Do you want to delete this user?"),
        TextLine::from(Span::styled(
            name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(vec![
            button("[ Yes, delete it! ]", yes_selected, Color::Red),
            Span::raw("  "),
            button("[ Cancel ]", !yes_selected, Color::Blue),
        ]),
        key_hints(&[("y", "Yes"), ("n/Esc", "No")]),
    ]);

    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::UserId;
    use crate::ui::buffer_text;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(dialog: &Dialog) -> Result<String, Box<dyn std::error::Error>> {
        let mut terminal = Terminal::new(TestBackend::new(80, 20))?;
        terminal.draw(|f| render_dialog(dialog, f))?;
        Ok(buffer_text(terminal.backend().buffer()))
    }

    #[test]
    fn notice_shows_title_and_text() -> Result<(), Box<dyn std::error::Error>> {
        let dialog = Dialog::Notice(Notice::new(
            NoticeKind::Warning,
            "Missing Fields",
            "Please fill in all fields",
        ));
        let text = draw(&dialog)?;

        assert!(text.contains("Missing Fields"));
        assert!(text.contains("Please fill in all fields"));
        assert!(text.contains("[ OK ]"));
        Ok(())
    }

    #[test]
    fn confirmation_names_the_user() -> Result<(), Box<dyn std::error::Error>> {
        let dialog = Dialog::ConfirmDelete {
            id: UserId::new(1),
            name: "Dara".to_string(),
            yes_selected: false,
        };
        let text = draw(&dialog)?;

        assert!(text.contains("Are you sure?"));
        assert!(text.contains("Dara"));
        assert!(text.contains("Yes, delete it!"));
        assert!(text.contains("[ Cancel ]"));
        Ok(())
    }
}
