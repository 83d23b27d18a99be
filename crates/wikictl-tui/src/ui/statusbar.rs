//! Status bar widget

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let keybindings = "[Tab] Next field  [Enter] Activate  [Esc] Quit";

    let status_line = Line::from(vec![
        Span::styled(
            format!("▸ {}", app.server_url),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw("  │  "),
        Span::styled(keybindings, Style::default().fg(Color::DarkGray)),
    ]);

    let paragraph = Paragraph::new(status_line);
    frame.render_widget(paragraph, area);
}
