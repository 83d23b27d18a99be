//! TUI styling

use ratatui::style::{Color, Modifier, Style};

use crate::app::LogLevel;

/// Spinner frame for in-flight controls
pub fn spinner(tick: u64) -> &'static str {
    match tick % 4 {
        0 => "◐",
        1 => "◓",
        2 => "◑",
        _ => "◒",
    }
}

/// Color for an activity log level
pub fn level_color(level: LogLevel) -> Color {
    match level {
        LogLevel::Info => Color::White,
        LogLevel::Success => Color::Green,
        LogLevel::Warning => Color::Yellow,
        LogLevel::Error => Color::Red,
    }
}

/// Border style for the focused element
pub fn focused_border_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Border style for unfocused elements
pub fn unfocused_border_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Label style for an enabled control
pub fn control_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Label style for a disabled (in-flight) control
pub fn disabled_control_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for transient success labels
pub fn success_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}
