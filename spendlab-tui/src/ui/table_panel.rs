//! Data table — the filtered rows, scrollable with j/k.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::thousands;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let filtered = app.filtered();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        format!("{:<10} {:>12} {:>8}", "Year", "Spending", "CPI"),
        theme::accent_bold(),
    )));

    if filtered.is_empty() {
        lines.push(Line::from(Span::styled("No rows in range.", theme::muted())));
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    let visible_height = area.height.saturating_sub(1) as usize;
    let start = app.table_scroll.min(filtered.len().saturating_sub(1));
    let end = (start + visible_height).min(filtered.len());

    for (i, record) in filtered.iter().enumerate().take(end).skip(start) {
        let style = if i == start && start > 0 {
            theme::muted().add_modifier(Modifier::BOLD)
        } else {
            theme::muted()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10} ", record.label), style),
            Span::styled(format!("{:>12} ", thousands(record.spending)), theme::accent()),
            Span::styled(format!("{:>8.1}", record.cpi), theme::neutral()),
        ]));
    }

    if end < filtered.len() {
        lines.push(Line::from(Span::styled(
            format!("  … {} more (j/k to scroll)", filtered.len() - end),
            theme::muted(),
        )));
    }

    f.render_widget(Paragraph::new(lines), area);
}
