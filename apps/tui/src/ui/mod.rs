// UI module for user_manager-tui
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::App;
use ratatui::Frame;

/// Draws the roster screen, then whichever overlay is open on top of it.
pub fn ui(app: &App, f: &mut Frame<'_>) {
    screens::roster::render_roster(app, f);

    if let Some(dialog) = &app.dialog {
        screens::dialog::render_dialog(dialog, f);
    }

    if app.show_help {
        screens::help::render_help(f);
    }
}

/// Buffer contents as one line of text per row.
#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
