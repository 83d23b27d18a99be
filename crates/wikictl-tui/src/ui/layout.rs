//! Layout calculations for the TUI

use ratatui::prelude::*;

/// Layout areas for the UI
pub struct LayoutAreas {
    pub username: Rect,
    pub password: Rect,
    pub wiki: Rect,
    pub controls: Rect,
    pub result: Rect,
    pub log: Rect,
    pub statusbar: Rect,
}

/// Calculate layout areas based on terminal size
pub fn calculate_layout(area: Rect) -> LayoutAreas {
    // Main vertical split: content + status bar
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content_area = vertical[0];
    let statusbar = vertical[1];

    // Content: form column (left) + activity log (right)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65), // Form, controls, result
            Constraint::Percentage(35), // Activity log
        ])
        .split(content_area);

    let log = horizontal[1];

    // Left column: fields, control row, result display
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Username
            Constraint::Length(3), // Password
            Constraint::Min(5),    // Wiki text
            Constraint::Length(3), // Action controls
            Constraint::Length(3), // Result display
        ])
        .split(horizontal[0]);

    LayoutAreas {
        username: left[0],
        password: left[1],
        wiki: left[2],
        controls: left[3],
        result: left[4],
        log,
        statusbar,
    }
}
