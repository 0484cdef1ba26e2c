use crate::domain::User;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Widget};

pub const EMPTY_PLACEHOLDER: &str = "No users found. Press \"a\" to add the first user.";

/// Read-only view of the user list. Row numbers are display positions,
/// not ids.
#[derive(Debug, Clone, Copy)]
pub struct UserTable<'a> {
    users: &'a [User],
    selected: usize,
    drafting: bool,
    focused: bool,
}

impl<'a> UserTable<'a> {
    pub const fn new(users: &'a [User]) -> Self {
        Self {
            users,
            selected: 0,
            drafting: false,
            focused: true,
        }
    }

    pub const fn selected(mut self, selected: usize) -> Self {
        self.selected = selected;
        self
    }

    /// Renders Edit as disabled while an add or edit is open.
    pub const fn drafting(mut self, drafting: bool) -> Self {
        self.drafting = drafting;
        self
    }

    pub const fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn actions_cell(&self) -> Cell<'static> {
        let edit_style = if self.drafting {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::Yellow)
        };

        Cell::from(TextLine::from(vec![
            Span::styled("[Edit]", edit_style),
            Span::raw(" "),
            Span::styled("[Delete]", Style::default().fg(Color::Red)),
        ]))
    }

    fn row_style(&self, is_selected: bool) -> Style {
        match (is_selected, self.focused) {
            (true, true) => Style::default()
                .bg(Color::Rgb(0, 0, 238))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().bg(Color::DarkGray).fg(Color::White),
            (false, _) => Style::default(),
        }
    }
}

impl Widget for UserTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused {
            Color::Yellow
        } else {
            Color::Gray
        };
        let block = Block::default()
            .title("Users")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let [table_area, footer_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

        let header = Row::new(vec!["#", "Name", "Gender", "Age", "Address", "Actions"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let widths = [
            Constraint::Length(4),
            Constraint::Fill(2),
            Constraint::Length(8),
            Constraint::Length(5),
            Constraint::Fill(3),
            Constraint::Length(15),
        ];

        let total_rows = self.users.len();
        let max_visible_rows = usize::from(table_area.height.saturating_sub(1));
        let offset = scroll_offset(total_rows, max_visible_rows, self.selected);

        let rows: Vec<Row<'_>> = self
            .users
            .iter()
            .enumerate()
            .skip(offset)
            .take(max_visible_rows)
            .map(|(index, user)| {
                Row::new(vec![
                    Cell::from((index + 1).to_string()),
                    Cell::from(user.name.as_str()),
                    Cell::from(user.gender.label()),
                    Cell::from(user.age.to_string()),
                    Cell::from(user.address.as_str()),
                    self.actions_cell(),
                ])
                .style(self.row_style(index == self.selected))
            })
            .collect();

        Table::new(rows, widths)
            .header(header)
            .column_spacing(1)
            .render(table_area, buf);

        if total_rows == 0 && table_area.height > 1 {
            let placeholder_area = Rect {
                y: table_area.y + 1,
                height: 1,
                ..table_area
            };
            Paragraph::new(EMPTY_PLACEHOLDER)
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center)
                .render(placeholder_area, buf);
        }

        Paragraph::new(format!("Total Users: {total_rows}"))
            .style(Style::default().fg(Color::Gray))
            .render(footer_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Gender, UserId};
    use crate::ui::buffer_text;

    fn user(id: u64, name: &str) -> User {
        User {
            id: UserId::new(id),
            name: name.to_string(),
            gender: Gender::Female,
            age: 33,
            address: "Riverside".to_string(),
        }
    }

    fn render(table: UserTable<'_>, width: u16, height: u16) -> String {
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        table.render(buf.area, &mut buf);
        buffer_text(&buf)
    }

    #[test]
    fn empty_table_shows_placeholder_and_zero_total() {
        let text = render(UserTable::new(&[]), 90, 8);
        assert!(text.contains(EMPTY_PLACEHOLDER));
        assert!(text.contains("Total Users: 0"));
        assert!(text.contains("Address"));
    }

    #[test]
    fn rows_use_display_position_not_id() {
        let users = [user(1000, "Ana"), user(2000, "Bo")];
        let text = render(UserTable::new(&users), 90, 8);

        let lines: Vec<&str> = text.lines().collect();
        let ana = lines.iter().find(|line| line.contains("Ana")).copied();
        let bo = lines.iter().find(|line| line.contains("Bo ")).copied();
        assert!(ana.is_some_and(|line| line.trim_start_matches('│').trim_start().starts_with('1')));
        assert!(bo.is_some_and(|line| line.trim_start_matches('│').trim_start().starts_with('2')));
        assert!(!text.contains("1000"));
        assert!(text.contains("Female"));
        assert!(text.contains("Total Users: 2"));
    }

    #[test]
    fn edit_is_dimmed_while_drafting() {
        let users = [user(1, "Ana")];
        let mut buf = Buffer::empty(Rect::new(0, 0, 90, 6));
        UserTable::new(&users).drafting(true).render(buf.area, &mut buf);

        let text = buffer_text(&buf);
        let row = text.lines().position(|line| line.contains("[Edit]"));
        let column = row.and_then(|row| {
            text.lines()
                .nth(row)
                .and_then(|line| line.chars().position(|c| c == '['))
        });
        let (Some(row), Some(column)) = (row, column) else {
            panic!("edit action not rendered");
        };
        let cell = &buf[(u16::try_from(column).unwrap_or(0), u16::try_from(row).unwrap_or(0))];
        assert_eq!(cell.fg, Color::DarkGray);
    }

    #[test]
    fn selection_scrolls_into_view() {
        let users: Vec<User> = (1..=20).map(|n| user(n, &format!("user{n:02}"))).collect();
        let text = render(UserTable::new(&users).selected(19), 90, 8);
        assert!(text.contains("user20"));
        assert!(!text.contains("user01"));
    }
}
