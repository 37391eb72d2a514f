//! Bottom status bar — key hints and the last status message.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        " [Tab]focus [h/l]adjust [g]raph [t]able [n]otes [?]help [q]uit",
        theme::muted(),
    ));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match msg.level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
            StatusLevel::Error => theme::negative(),
        };
        spans.push(Span::styled(
            format!("[{}] ", msg.at.format("%H:%M:%S")),
            theme::muted(),
        ));
        spans.push(Span::styled(msg.text.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
