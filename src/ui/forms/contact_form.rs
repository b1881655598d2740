//! Contact form rendering

use super::field_renderer::{draw_field, FieldView};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Label on the submit button
pub fn send_label(is_submitting: bool) -> &'static str {
    if is_submitting {
        "Validating..."
    } else {
        "Send Message"
    }
}

/// Draw the contact form: four fields and the send button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.form.state();

    let border_color = if form.is_invalid() {
        Color::Red
    } else {
        Color::Cyan
    };
    let block = Block::default()
        .title(" Contact Us ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Name
            Constraint::Length(3),             // Email
            Constraint::Length(3),             // Subject
            Constraint::Min(7),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Send
        ])
        .margin(1)
        .split(area);

    for field in FieldName::ALL {
        draw_field(
            frame,
            chunks[field.index()],
            FieldView {
                label: field.label(),
                value: form.values.get(field),
                error: form.error_for(field),
                is_active: app.state.focused_field() == Some(field),
                is_multiline: field.is_multiline(),
            },
        );
    }

    render_button(
        frame,
        chunks[FieldName::ALL.len()],
        send_label(form.is_submitting),
        app.state.is_send_focused(),
        !form.is_submitting,
    );
}
