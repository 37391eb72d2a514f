//! Summary strip — first year, last year, and row count of the filtered data.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let filtered = app.filtered();

    let (first, last) = match (filtered.first(), filtered.last()) {
        (Some(first), Some(last)) => (first.year.to_string(), last.year.to_string()),
        _ => ("-".into(), "-".into()),
    };

    let line = Line::from(vec![
        Span::styled("First year ", theme::muted()),
        Span::styled(first, theme::accent_bold()),
        Span::styled("   Last year ", theme::muted()),
        Span::styled(last, theme::accent_bold()),
        Span::styled("   Rows ", theme::muted()),
        Span::styled(filtered.len().to_string(), theme::accent_bold()),
    ]);

    f.render_widget(Paragraph::new(vec![line, Line::from("")]), area);
}
