use crate::app::state::FormFocus;
use crate::roster::{Draft, DraftField};
use crate::ui::widgets::hints::key_hints;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

/// Rows the form needs: border, labels, values, hints, border
pub const FORM_HEIGHT: u16 = 5;

/// Renders one draft. Holds no state of its own; `focus` is `None` when
/// the form is shown but the table has the keyboard.
#[derive(Debug, Clone, Copy)]
pub struct UserForm<'a> {
    draft: &'a Draft,
    title: &'static str,
    focus: Option<FormFocus>,
}

impl<'a> UserForm<'a> {
    pub const fn new(draft: &'a Draft, title: &'static str) -> Self {
        Self {
            draft,
            title,
            focus: None,
        }
    }

    pub const fn focus(mut self, focus: Option<FormFocus>) -> Self {
        self.focus = focus;
        self
    }

    /// Terminal cursor position for the focused text field, if any.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let Some(FormFocus::Field(field)) = self.focus else {
            return None;
        };
        let text = self.draft.text(field)?;
        let column = field_column(columns(Self::block(self.title, true).inner(area)), field);
        if column.width == 0 {
            return None;
        }

        let shown = visible_tail(text, column.width.saturating_sub(1));
        let offset = u16::try_from(shown.chars().count()).unwrap_or(u16::MAX);
        Some(Position::new(column.x + offset, column.y + 1))
    }

    fn block(title: &'static str, focused: bool) -> Block<'static> {
        let color = if focused { Color::Yellow } else { Color::Cyan };
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
    }

    fn render_field(&self, field: DraftField, area: Rect, buf: &mut Buffer) {
        let is_focused = self.focus == Some(FormFocus::Field(field));
        let label_style = if is_focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let value_style = if is_focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::White)
        };

        let value = match self.draft.text(field) {
            Some("") => Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray)),
            Some(text) => Span::styled(
                visible_tail(text, area.width.saturating_sub(1)).to_string(),
                value_style,
            ),
            None if is_focused => Span::styled(
                format!("< {} >", self.draft.gender.label()),
                value_style.add_modifier(Modifier::BOLD),
            ),
            None => Span::styled(self.draft.gender.label(), value_style),
        };

        let lines = vec![
            TextLine::from(Span::styled(field.label(), label_style)),
            TextLine::from(value),
        ];
        Paragraph::new(lines).render(area, buf);
    }

    fn render_buttons(&self, area: Rect, buf: &mut Buffer) {
        let button = |label: &'static str, focus: FormFocus, color: Color| {
            let style = if self.focus == Some(focus) {
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };
            Span::styled(label, style)
        };

        let lines = vec![
            TextLine::from(""),
            TextLine::from(vec![
                button("[ Save ]", FormFocus::Save, Color::Green),
                Span::raw("  "),
                button("[ Cancel ]", FormFocus::Cancel, Color::Gray),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Right)
            .render(area, buf);
    }
}

impl Widget for UserForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Self::block(self.title, self.focus.is_some());
        let inner = block.inner(area);
        block.render(area, buf);

        let areas = columns(inner);
        for field in DraftField::ALL {
            self.render_field(field, field_column(areas, field), buf);
        }
        self.render_buttons(areas[4], buf);

        if self.focus.is_some() && inner.height > 2 {
            let hint_area = Rect {
                y: inner.y + 2,
                height: 1,
                ..inner
            };
            Paragraph::new(key_hints(&[
                ("↑/↓", "Field"),
                ("←/→", "Gender"),
                ("Ctrl+S", "Save"),
                ("Esc", "Cancel"),
                ("Tab", "Table"),
            ]))
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center)
            .render(hint_area, buf);
        }
    }
}

fn columns(inner: Rect) -> [Rect; 5] {
    Layout::horizontal([
        Constraint::Fill(2),
        Constraint::Length(12),
        Constraint::Length(9),
        Constraint::Fill(3),
        Constraint::Length(20),
    ])
    .spacing(1)
    .areas(inner)
}

const fn field_column(areas: [Rect; 5], field: DraftField) -> Rect {
    match field {
        DraftField::Name => areas[0],
        DraftField::Gender => areas[1],
        DraftField::Age => areas[2],
        DraftField::Address => areas[3],
    }
}

/// The last `width` characters of `text`, so the end being typed stays visible.
fn visible_tail(text: &str, width: u16) -> &str {
    let count = text.chars().count();
    let width = usize::from(width);
    if count <= width {
        return text;
    }

    text.char_indices()
        .nth(count - width)
        .map_or("", |(start, _)| &text[start..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Gender;
    use crate::ui::buffer_text;

    fn render(form: UserForm<'_>) -> (Buffer, String) {
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, FORM_HEIGHT));
        form.render(buf.area, &mut buf);
        let text = buffer_text(&buf);
        (buf, text)
    }

    #[test]
    fn blank_draft_shows_placeholders_and_buttons() {
        let draft = Draft::default();
        let (_, text) = render(UserForm::new(&draft, "Add User"));

        assert!(text.contains("Add User"));
        assert!(text.contains("Enter name"));
        assert!(text.contains("Enter age"));
        assert!(text.contains("Enter address"));
        assert!(text.contains("Male"));
        assert!(text.contains("[ Save ]"));
        assert!(text.contains("[ Cancel ]"));
    }

    #[test]
    fn focused_form_shows_values_and_hints() {
        let draft = Draft {
            name: "Sam".to_string(),
            gender: Gender::Other,
            age: "30".to_string(),
            address: "Town".to_string(),
        };
        let (_, text) = render(
            UserForm::new(&draft, "Edit User").focus(Some(FormFocus::Field(DraftField::Gender))),
        );

        assert!(text.contains("Sam"));
        assert!(text.contains("< Other >"));
        assert!(text.contains("30"));
        assert!(text.contains("Town"));
        assert!(text.contains("Ctrl+S"));
    }

    #[test]
    fn cursor_sits_after_focused_text() {
        let draft = Draft {
            name: "Sam".to_string(),
            ..Draft::default()
        };
        let area = Rect::new(0, 0, 100, FORM_HEIGHT);
        let form = UserForm::new(&draft, "Add User");

        assert_eq!(form.cursor_position(area), None);
        assert_eq!(
            form.focus(Some(FormFocus::Save)).cursor_position(area),
            None
        );

        let position = form
            .focus(Some(FormFocus::Field(DraftField::Name)))
            .cursor_position(area);
        assert_eq!(position, Some(Position::new(1 + 3, 2)));
    }

    #[test]
    fn focused_empty_field_keeps_placeholder_and_cursor_at_start() {
        let draft = Draft::default();
        let area = Rect::new(0, 0, 100, FORM_HEIGHT);
        let form = UserForm::new(&draft, "Add User").focus(Some(FormFocus::Field(DraftField::Name)));
        let (buf, text) = render(form);

        assert!(text.contains("Enter name"));
        assert_eq!(buf[(1, 2)].symbol(), "E");
        assert_eq!(buf[(1, 2)].fg, Color::DarkGray);
        assert_eq!(form.cursor_position(area), Some(Position::new(1, 2)));
    }

    #[test]
    fn long_text_keeps_its_tail_visible() {
        assert_eq!(visible_tail("abcdef", 3), "def");
        assert_eq!(visible_tail("abc", 3), "abc");
        assert_eq!(visible_tail("héllo", 2), "lo");
        assert_eq!(visible_tail("abc", 0), "");
    }
}
