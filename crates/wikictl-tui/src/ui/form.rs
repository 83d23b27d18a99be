//! Input field widgets

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::{App, Focus};
use crate::config;

/// Render the three input fields
pub fn render(frame: &mut Frame, app: &App, username: Rect, password: Rect, wiki: Rect) {
    render_field(frame, username, " Username ", &app.ui.username, app.focus == Focus::Username);

    // Credentials are masked on screen
    let masked = "•".repeat(app.ui.password.chars().count());
    render_field(frame, password, " Password ", &masked, app.focus == Focus::Password);

    let focused = app.focus == Focus::Wiki;
    let paragraph = Paragraph::new(app.ui.wiki.as_str())
        .block(field_block(" Wiki text (markdown) ", focused))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, wiki);
}

fn render_field(frame: &mut Frame, area: Rect, title: &str, value: &str, focused: bool) {
    let paragraph = Paragraph::new(value).block(field_block(title, focused));
    frame.render_widget(paragraph, area);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let border_style = if focused {
        config::focused_border_style()
    } else {
        config::unfocused_border_style()
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style)
}
