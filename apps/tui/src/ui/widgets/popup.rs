use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1]);

    horizontal_layout[1]
}

/// A `width` x `height` box centred in `area`, shrunk to fit small terminals.
pub fn fixed_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_rect_is_centred() {
        let rect = fixed_rect(20, 6, Rect::new(0, 0, 100, 30));
        assert_eq!(rect, Rect::new(40, 12, 20, 6));
    }

    #[test]
    fn fixed_rect_shrinks_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        assert_eq!(fixed_rect(50, 20, area), area);
    }

    #[test]
    fn centered_rect_stays_inside_area() {
        let area = Rect::new(0, 0, 80, 40);
        let rect = centered_rect(60, 50, area);
        assert!(rect.width <= 48 && rect.height <= 20);
        assert!(rect.x >= area.x && rect.right() <= area.right());
    }
}
