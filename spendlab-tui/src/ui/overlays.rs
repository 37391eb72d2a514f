//! Overlay widgets — welcome, interpretation notes, help.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

/// First-run welcome overlay.
pub fn render_welcome(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 45, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" CPI × Household Spending ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "An interactive look at consumer prices and household spending.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Getting started:", theme::accent_bold())),
        Line::from(""),
        Line::from(Span::styled(
            "  1. Tab between the sidebar controls",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  2. Narrow the year range with h/l",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  3. Press g to switch between the time series and the scatter",
            theme::muted(),
        )),
        Line::from(Span::styled(
            "  4. Press n for notes on reading the chart",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled("Press any key to dismiss...", theme::neutral())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Interpretation notes — what the chart tends to show.
pub fn render_notes(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Reading the chart [Esc]close ")
        .title_style(theme::accent_bold());

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "As the consumer price index rises, household spending tends to \
             rise with it: the same basket of goods and services simply costs \
             more yen.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "The relationship is not proportional in every year. Households \
             economize, incomes shift, and one-off shocks (2020 stands out) \
             pull spending away from the trend line.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Prices are one important driver of household spending, but they \
             act together with other factors rather than alone. Compare the \
             scatter's R² across different year ranges to see how much of the \
             variation prices explain.",
            theme::muted(),
        )),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}

/// Help overlay — keyboard reference.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(60, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help [Esc]close ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Focus");
    key(&mut lines, "Tab / Shift+Tab", "Cycle sidebar controls");
    key(&mut lines, "1-4", "Jump to control by number");
    lines.push(Line::from(""));

    section(&mut lines, "Controls");
    key(&mut lines, "h / l", "Adjust the focused year bound, or toggle");
    key(&mut lines, "Home / End", "Snap the focused year to the data edge");
    key(&mut lines, "Space / Enter", "Toggle chart type or table");
    lines.push(Line::from(""));

    section(&mut lines, "Report");
    key(&mut lines, "g", "Switch line chart / scatter");
    key(&mut lines, "t", "Show or hide the data table");
    key(&mut lines, "j / k", "Scroll the data table");
    key(&mut lines, "n", "Interpretation notes");
    lines.push(Line::from(""));

    section(&mut lines, "General");
    key(&mut lines, "?", "This help");
    key(&mut lines, "q", "Quit");

    f.render_widget(Paragraph::new(lines), inner);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>16}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
