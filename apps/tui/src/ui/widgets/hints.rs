use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};

/// `key: description` pairs in the footer style used on every screen.
pub fn key_hints(pairs: &[(&'static str, &'static str)]) -> TextLine<'static> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut spans = Vec::with_capacity(pairs.len() * 2);
    for (i, (key, description)) in pairs.iter().enumerate() {
        spans.push(Span::styled(*key, key_style));
        let separator = if i + 1 == pairs.len() { "" } else { "   " };
        spans.push(Span::raw(format!(": {description}{separator}")));
    }

    TextLine::from(spans)
}
