//! UI module for rendering the TUI
//!
//! A stateless renderer: every frame is drawn from the current `App` snapshot.

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (content_area, status_area) = layout::create_layout(frame.area());

    forms::draw_contact_form(frame, content_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Dialogs render last so they sit on top
    if let Some(dialog) = app.state.current_dialog() {
        components::render_notice(frame, dialog);
    }
}
