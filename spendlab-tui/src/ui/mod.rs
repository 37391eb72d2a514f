//! Top-level UI layout — controls sidebar, report column, status bar.

pub mod chart_panel;
pub mod controls_panel;
pub mod overlays;
pub mod stats_panel;
pub mod status_bar;
pub mod summary_panel;
pub mod table_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;

use crate::app::{AppState, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    let main_area = chunks[0];
    let status_area = chunks[1];

    // Sidebar + report column.
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(40)])
        .split(main_area);

    draw_sidebar(f, columns[0], app);
    draw_report(f, columns[1], app);

    status_bar::render(f, status_area, app);

    // Overlays on top.
    match app.overlay {
        Overlay::Welcome => overlays::render_welcome(f, main_area),
        Overlay::Notes => overlays::render_notes(f, main_area),
        Overlay::Help => overlays::render_help(f, main_area),
        Overlay::None => {}
    }
}

fn draw_sidebar(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Display Settings ")
        .title_style(theme::panel_title(true));

    let inner = block.inner(area);
    f.render_widget(block, area);
    controls_panel::render(f, inner, app);
}

fn draw_report(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(false))
        .title(format!(" CPI × Household Spending — {} ", app.data_label))
        .title_style(theme::panel_title(false));

    let inner = block.inner(area);
    f.render_widget(block, area);

    // Summary strip, chart, stats line, optional table.
    let table_height = if app.show_table {
        // header + rows, capped so the chart keeps room
        (app.filtered().len() as u16 + 2).min(inner.height / 2)
    } else {
        0
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(8),
            Constraint::Length(2),
            Constraint::Length(table_height),
        ])
        .split(inner);

    summary_panel::render(f, rows[0], app);
    chart_panel::render(f, rows[1], app);
    stats_panel::render(f, rows[2], app);
    if app.show_table {
        table_panel::render(f, rows[3], app);
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Format a yen figure with thousands separators: 277926 → "277,926".
pub(crate) fn thousands(value: f64) -> String {
    let negative = value < 0.0;
    let mut n = value.abs().round() as u64;
    let mut parts = Vec::new();
    loop {
        if n < 1000 {
            parts.push(n.to_string());
            break;
        }
        parts.push(format!("{:03}", n % 1000));
        n /= 1000;
    }
    parts.reverse();
    let joined = parts.join(",");
    if negative {
        format!("-{joined}")
    } else {
        joined
    }
}
