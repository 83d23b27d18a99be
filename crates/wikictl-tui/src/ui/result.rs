//! Result display: shared text region plus the copy affordance

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use wikictl_core::Control;

use crate::app::{App, Focus};
use crate::config;

/// Render the result display. Hidden until first populated.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if !app.ui.link_visible {
        return;
    }

    let (text_area, copy_area) = if app.ui.copy_visible {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(13)])
            .split(area);
        (columns[0], Some(columns[1]))
    } else {
        (area, None)
    };

    let paragraph = Paragraph::new(app.ui.result.as_str()).block(
        Block::default()
            .title(" Result ")
            .borders(Borders::ALL)
            .border_style(config::unfocused_border_style()),
    );
    frame.render_widget(paragraph, text_area);

    if let Some(copy_area) = copy_area {
        let focused = app.focus == Focus::Copy;
        let border_style = if focused {
            config::focused_border_style()
        } else {
            config::unfocused_border_style()
        };
        let button = Paragraph::new(app.ui.label(Control::CopyButton))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(border_style));
        frame.render_widget(button, copy_area);
    }
}
