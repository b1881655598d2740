//! Success and error notice dialogs

use super::base::{render_dialog, DialogConfig};
use crate::state::Dialog;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

fn dismiss_hint<'a>() -> Vec<Span<'a>> {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ]
}

/// Render a queued dialog overlay centered on the screen
pub fn render_notice(frame: &mut Frame, dialog: &Dialog) {
    let (title, color, message) = match dialog {
        Dialog::Success(message) => ("Sent", Color::Green, message.as_str()),
        Dialog::Error(message) => ("Error", Color::Red, message.as_str()),
    };

    render_dialog(
        frame,
        DialogConfig {
            title,
            color,
            message,
            hint: dismiss_hint(),
            max_width: 60,
        },
    );
}
