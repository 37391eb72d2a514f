//! Chart area — dual-axis time series or scatter with regression line.
//!
//! ratatui's `Chart` has a single y-axis, so line mode rescales the
//! spending series into the CPI bounds and labels the axis with paired
//! values (`CPI / ¥spending`). Both scales are padded 5% so the extreme
//! points stay off the frame edge.

use ratatui::layout::Rect;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use spendlab_core::{ChartKind, YearRecord};

use crate::app::AppState;
use crate::theme;
use crate::ui::thousands;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let filtered = app.filtered();
    if filtered.len() < 2 {
        render_empty(f, area);
        return;
    }

    match app.chart_kind {
        ChartKind::Line => render_line(f, area, &filtered),
        ChartKind::Scatter => render_scatter(f, area, app, &filtered),
    }
}

fn render_empty(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            "Not enough rows in the selected range to draw a chart.",
            theme::muted(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Widen the year range with h/l on the Start/End year sliders.",
            theme::muted(),
        )),
    ];
    f.render_widget(Paragraph::new(lines), area);
}

fn render_line(f: &mut Frame, area: Rect, filtered: &[&YearRecord]) {
    let cpi: Vec<f64> = filtered.iter().map(|r| r.cpi).collect();
    let spending: Vec<f64> = filtered.iter().map(|r| r.spending).collect();

    let (cpi_lo, cpi_hi) = padded_bounds(&cpi);
    let (spend_lo, spend_hi) = padded_bounds(&spending);

    let cpi_points: Vec<(f64, f64)> = filtered
        .iter()
        .map(|r| (r.year as f64, r.cpi))
        .collect();
    // Spending mapped onto the CPI axis; the labels carry its real scale.
    let spending_points: Vec<(f64, f64)> = filtered
        .iter()
        .map(|r| {
            (
                r.year as f64,
                rescale(r.spending, spend_lo, spend_hi, cpi_lo, cpi_hi),
            )
        })
        .collect();

    let datasets = vec![
        Dataset::default()
            .name("CPI")
            .marker(symbols::Marker::Braille)
            .style(theme::series_cpi())
            .graph_type(GraphType::Line)
            .data(&cpi_points),
        Dataset::default()
            .name("Spending")
            .marker(symbols::Marker::Braille)
            .style(theme::series_spending())
            .graph_type(GraphType::Line)
            .data(&spending_points),
    ];

    let x_lo = filtered.first().unwrap().year;
    let x_hi = filtered.last().unwrap().year;
    let x_mid = (x_lo + x_hi) / 2;

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled("Year", theme::muted()))
                .style(theme::muted())
                .bounds([x_lo as f64, x_hi as f64])
                .labels(vec![
                    Span::styled(x_lo.to_string(), theme::muted()),
                    Span::styled(x_mid.to_string(), theme::muted()),
                    Span::styled(x_hi.to_string(), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("CPI / ¥Spending", theme::muted()))
                .style(theme::muted())
                .bounds([cpi_lo, cpi_hi])
                .labels(vec![
                    pair_label(cpi_lo, spend_lo),
                    pair_label((cpi_lo + cpi_hi) / 2.0, (spend_lo + spend_hi) / 2.0),
                    pair_label(cpi_hi, spend_hi),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_scatter(f: &mut Frame, area: Rect, app: &AppState, filtered: &[&YearRecord]) {
    let cpi: Vec<f64> = filtered.iter().map(|r| r.cpi).collect();
    let spending: Vec<f64> = filtered.iter().map(|r| r.spending).collect();

    let (x_lo, x_hi) = padded_bounds(&cpi);
    let (y_lo, y_hi) = padded_bounds(&spending);

    let points: Vec<(f64, f64)> = filtered.iter().map(|r| (r.cpi, r.spending)).collect();

    // Regression line sampled at the observed CPI values, left to right.
    let regression = app.regression();
    let mut line_points: Vec<(f64, f64)> = Vec::new();
    if let Some(summary) = &regression {
        let mut xs = cpi.clone();
        xs.sort_by(|a, b| a.total_cmp(b));
        line_points = xs.iter().map(|&x| (x, summary.fit.predict(x))).collect();
    }

    let mut datasets = vec![Dataset::default()
        .name("Data")
        .marker(symbols::Marker::Dot)
        .style(theme::series_cpi())
        .graph_type(GraphType::Scatter)
        .data(&points)];

    if !line_points.is_empty() {
        datasets.push(
            Dataset::default()
                .name("Regression")
                .marker(symbols::Marker::Braille)
                .style(theme::warning())
                .graph_type(GraphType::Line)
                .data(&line_points),
        );
    }

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled("CPI", theme::muted()))
                .style(theme::muted())
                .bounds([x_lo, x_hi])
                .labels(vec![
                    Span::styled(format!("{x_lo:.1}"), theme::muted()),
                    Span::styled(format!("{:.1}", (x_lo + x_hi) / 2.0), theme::muted()),
                    Span::styled(format!("{x_hi:.1}"), theme::muted()),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("¥Spending", theme::muted()))
                .style(theme::muted())
                .bounds([y_lo, y_hi])
                .labels(vec![
                    Span::styled(format!("¥{}", thousands(y_lo)), theme::muted()),
                    Span::styled(format!("¥{}", thousands((y_lo + y_hi) / 2.0)), theme::muted()),
                    Span::styled(format!("¥{}", thousands(y_hi)), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

fn pair_label(cpi: f64, spending: f64) -> Span<'static> {
    Span::styled(format!("{cpi:.1} / ¥{}", thousands(spending)), theme::muted())
}

/// Min/max of a series, padded 5% on each side. A flat series gets a
/// unit of artificial headroom so the axis keeps nonzero height.
fn padded_bounds(values: &[f64]) -> (f64, f64) {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let padding = if (max - min).abs() < 1e-12 {
        1.0
    } else {
        (max - min) * 0.05
    };
    (min - padding, max + padding)
}

/// Map `value` from one axis range onto another, linearly.
fn rescale(value: f64, from_lo: f64, from_hi: f64, to_lo: f64, to_hi: f64) -> f64 {
    let span = from_hi - from_lo;
    if span.abs() < 1e-12 {
        return (to_lo + to_hi) / 2.0;
    }
    to_lo + (value - from_lo) / span * (to_hi - to_lo)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_bounds_widen_the_range() {
        let (lo, hi) = padded_bounds(&[100.0, 200.0]);
        assert_eq!(lo, 95.0);
        assert_eq!(hi, 205.0);
    }

    #[test]
    fn padded_bounds_handle_flat_series() {
        let (lo, hi) = padded_bounds(&[42.0, 42.0]);
        assert_eq!(lo, 41.0);
        assert_eq!(hi, 43.0);
    }

    #[test]
    fn rescale_maps_endpoints_and_midpoint() {
        assert_eq!(rescale(0.0, 0.0, 10.0, 100.0, 200.0), 100.0);
        assert_eq!(rescale(10.0, 0.0, 10.0, 100.0, 200.0), 200.0);
        assert_eq!(rescale(5.0, 0.0, 10.0, 100.0, 200.0), 150.0);
    }

    #[test]
    fn rescale_collapses_flat_input_to_midline() {
        assert_eq!(rescale(7.0, 7.0, 7.0, 0.0, 10.0), 5.0);
    }
}
