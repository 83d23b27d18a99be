//! UI rendering modules

mod controls;
mod form;
mod layout;
mod log;
mod result;
mod statusbar;

use ratatui::prelude::*;

use crate::app::App;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &App) {
    let areas = layout::calculate_layout(frame.area());

    form::render(frame, app, areas.username, areas.password, areas.wiki);
    controls::render(frame, app, areas.controls);
    result::render(frame, app, areas.result);
    log::render(frame, app, areas.log);
    statusbar::render(frame, app, areas.statusbar);
}
