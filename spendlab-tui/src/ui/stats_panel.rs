//! Read-out line under the chart — axis caption in line mode, the
//! regression statistics in scatter mode.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use spendlab_core::ChartKind;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let lines = match app.chart_kind {
        ChartKind::Line => vec![Line::from(Span::styled(
            "Left scale: CPI  /  Right scale: household spending (yen per month)",
            theme::muted(),
        ))],
        ChartKind::Scatter => scatter_stats(app),
    };

    f.render_widget(Paragraph::new(lines), area);
}

fn scatter_stats(app: &AppState) -> Vec<Line<'static>> {
    let Some(summary) = app.regression() else {
        return vec![Line::from(Span::styled(
            "r = n/a   R² = n/a   (need at least 2 rows with CPI variance)",
            theme::warning(),
        ))];
    };

    let r_style = theme::correlation_style(summary.r.abs());
    vec![
        Line::from(vec![
            Span::styled(format!("r = {:.3}", summary.r), r_style),
            Span::styled("   ", theme::muted()),
            Span::styled(format!("R² = {:.3}", summary.r_squared), r_style),
            Span::styled(format!("   n = {}", summary.n), theme::muted()),
        ]),
        Line::from(Span::styled(
            format!(
                "spending = {:.2} × CPI + {:.2}",
                summary.fit.slope, summary.fit.intercept
            ),
            theme::neutral(),
        )),
    ]
}
