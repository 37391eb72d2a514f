//! Sidebar — year-range sliders, chart-type radio, table checkbox.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use spendlab_core::ChartKind;

use crate::app::{AppState, Control};
use crate::theme;

const SLIDER_WIDTH: usize = 22;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let (min, max) = app.data_bounds();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "[Tab]focus [h/l]adjust [?]help",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    // Year range sliders
    slider_row(
        &mut lines,
        Control::StartYear,
        app,
        app.year_lo,
        min,
        max,
    );
    slider_row(&mut lines, Control::EndYear, app, app.year_hi, min, max);
    lines.push(Line::from(""));

    // Chart type radio
    let focus = app.focused == Control::ChartKind;
    let style = row_style(focus);
    lines.push(Line::from(Span::styled(
        format!("{}:", Control::ChartKind.label()),
        style,
    )));
    for kind in [ChartKind::Line, ChartKind::Scatter] {
        let mark = if app.chart_kind == kind { "(o)" } else { "( )" };
        let kind_style = if app.chart_kind == kind && !focus {
            theme::accent()
        } else {
            style
        };
        lines.push(Line::from(Span::styled(
            format!("  {mark} {}", kind.label()),
            kind_style,
        )));
    }
    lines.push(Line::from(""));

    // Table checkbox
    let focus = app.focused == Control::ShowTable;
    let check = if app.show_table { "[x]" } else { "[ ]" };
    lines.push(Line::from(Span::styled(
        format!("{check} Show data table"),
        row_style(focus),
    )));
    lines.push(Line::from(""));

    // Data source footnote
    lines.push(Line::from(Span::styled(
        format!("Data: {} ({} rows)", app.data_label, app.dataset.len()),
        theme::muted(),
    )));

    f.render_widget(Paragraph::new(lines), area);
}

fn slider_row(
    lines: &mut Vec<Line>,
    control: Control,
    app: &AppState,
    value: i32,
    min: i32,
    max: i32,
) {
    let focus = app.focused == control;
    let style = row_style(focus);

    let span = (max - min).max(1) as f64;
    let frac = (value - min) as f64 / span;
    let filled = (frac * SLIDER_WIDTH as f64).round() as usize;
    let empty = SLIDER_WIDTH.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

    lines.push(Line::from(vec![
        Span::styled(format!("{:>10}: ", control.label()), style),
        Span::styled(value.to_string(), if focus { style } else { theme::accent() }),
    ]));
    lines.push(Line::from(vec![
        Span::raw("  "),
        Span::styled(bar, if focus { theme::accent() } else { theme::muted() }),
    ]));
}

fn row_style(focused: bool) -> ratatui::style::Style {
    if focused {
        theme::accent().add_modifier(Modifier::REVERSED)
    } else {
        theme::muted()
    }
}
