//! Action control row

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

use wikictl_core::{ControlState, WikiAction};

use crate::app::{App, Focus};
use crate::config;

/// Render the three action controls
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Percentage(34),
            Constraint::Percentage(33),
        ])
        .split(area);

    let focus_map = [
        (WikiAction::Create, Focus::Create),
        (WikiAction::Update, Focus::Update),
        (WikiAction::Delete, Focus::Delete),
    ];

    for (i, (action, focus)) in focus_map.into_iter().enumerate() {
        render_control(frame, app, columns[i], action, app.focus == focus);
    }
}

fn render_control(frame: &mut Frame, app: &App, area: Rect, action: WikiAction, focused: bool) {
    let control = action.control();
    let state = app.action_state(action);

    let label = match state {
        ControlState::InFlight => {
            format!("{} {}", config::spinner(app.tick), app.ui.label(control))
        }
        _ => app.ui.label(control).to_string(),
    };

    let label_style = if !app.ui.is_enabled(control) {
        config::disabled_control_style()
    } else if state == ControlState::Succeeded {
        config::success_style()
    } else {
        config::control_style()
    };

    let border_style = if focused {
        config::focused_border_style()
    } else {
        config::unfocused_border_style()
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(label, label_style)))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    frame.render_widget(paragraph, area);
}
