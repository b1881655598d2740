//! Layout components (content area, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Submit shortcut display (Ctrl+S on all platforms)
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear-form shortcut display
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Widest the form gets before it is centered
const MAX_FORM_WIDTH: u16 = 80;

/// Split the screen into (content, status bar)
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = chunks[0];
    let width = content.width.min(MAX_FORM_WIDTH);
    let centered = Rect {
        x: content.x + (content.width - width) / 2,
        width,
        ..content
    };

    (centered, chunks[1])
}

/// Key hints for the status bar
fn hints(app: &App) -> String {
    if app.state.has_dialog() {
        " Enter/Esc: dismiss".to_string()
    } else {
        format!(" Tab: next field  {SUBMIT_SHORTCUT}: send  {RESET_SHORTCUT}: clear  Esc: quit")
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let indicator = if app.is_submitting() {
        Span::styled(" ● ", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(" ○ ", Style::default().fg(Color::Green))
    };
    spans.push(indicator);
    spans.push(Span::styled(hints(app), Style::default().fg(Color::Gray)));

    if let Some(error) = &app.form.state().form_error {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(error, Style::default().fg(Color::Red)));
    }

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
