//! Application state — single-owner, main-thread only.
//!
//! Everything the report shows derives from this struct each frame: the
//! filtered rows, the chart series, and the regression block are all
//! recomputed from `dataset` + the current controls on render.

use std::path::PathBuf;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use spendlab_core::{ChartKind, Dataset, RegressionSummary, YearRecord};

/// Which sidebar control has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Control {
    StartYear,
    EndYear,
    ChartKind,
    ShowTable,
}

impl Control {
    pub fn index(self) -> usize {
        match self {
            Control::StartYear => 0,
            Control::EndYear => 1,
            Control::ChartKind => 2,
            Control::ShowTable => 3,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Control::StartYear),
            1 => Some(Control::EndYear),
            2 => Some(Control::ChartKind),
            3 => Some(Control::ShowTable),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Control::StartYear => "Start year",
            Control::EndYear => "End year",
            Control::ChartKind => "Chart",
            Control::ShowTable => "Data table",
        }
    }

    pub fn next(self) -> Control {
        Control::from_index((self.index() + 1) % 4).unwrap()
    }

    pub fn prev(self) -> Control {
        Control::from_index((self.index() + 3) % 4).unwrap()
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// A timestamped status-bar message.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub at: NaiveDateTime,
    pub text: String,
    pub level: StatusLevel,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Welcome,
    Notes,
    Help,
}

/// Top-level application state.
pub struct AppState {
    pub dataset: Dataset,
    /// Where the data came from, for the title bar ("spending.csv", "built-in sample").
    pub data_label: String,

    // Controls
    pub year_lo: i32,
    pub year_hi: i32,
    pub chart_kind: ChartKind,
    pub show_table: bool,
    pub focused: Control,
    pub table_scroll: usize,

    // Cross-cutting
    pub running: bool,
    pub overlay: Overlay,
    pub status_message: Option<StatusMessage>,

    // Paths
    #[allow(dead_code)]
    pub state_path: PathBuf,
}

impl AppState {
    pub fn new(dataset: Dataset, data_label: String, state_path: PathBuf) -> Self {
        let year_lo = dataset.min_year().unwrap_or(0);
        let year_hi = dataset.max_year().unwrap_or(0);
        Self {
            dataset,
            data_label,
            year_lo,
            year_hi,
            chart_kind: ChartKind::Line,
            show_table: false,
            focused: Control::StartYear,
            table_scroll: 0,
            running: true,
            overlay: Overlay::None,
            status_message: None,
            state_path,
        }
    }

    /// Data bounds the sliders move within.
    pub fn data_bounds(&self) -> (i32, i32) {
        (
            self.dataset.min_year().unwrap_or(0),
            self.dataset.max_year().unwrap_or(0),
        )
    }

    /// The rows the chart, table, and statistics all describe.
    pub fn filtered(&self) -> Vec<&YearRecord> {
        self.dataset.filter_years(self.year_lo, self.year_hi)
    }

    /// Regression over the filtered subset (scatter-mode statistics).
    pub fn regression(&self) -> Option<RegressionSummary> {
        let filtered = self.filtered();
        let cpi: Vec<f64> = filtered.iter().map(|r| r.cpi).collect();
        let spending: Vec<f64> = filtered.iter().map(|r| r.spending).collect();
        RegressionSummary::compute(&cpi, &spending)
    }

    /// Move the lower bound. It never crosses the upper bound.
    pub fn adjust_year_lo(&mut self, delta: i32) {
        let (min, _) = self.data_bounds();
        self.year_lo = (self.year_lo + delta).clamp(min, self.year_hi);
        self.table_scroll = 0;
    }

    /// Move the upper bound. It never crosses the lower bound.
    pub fn adjust_year_hi(&mut self, delta: i32) {
        let (_, max) = self.data_bounds();
        self.year_hi = (self.year_hi + delta).clamp(self.year_lo, max);
        self.table_scroll = 0;
    }

    /// Snap the focused year bound to the data edge.
    pub fn snap_focused_year(&mut self, to_start: bool) {
        let (min, max) = self.data_bounds();
        match self.focused {
            Control::StartYear => {
                self.year_lo = if to_start { min } else { self.year_hi };
            }
            Control::EndYear => {
                self.year_hi = if to_start { self.year_lo } else { max };
            }
            _ => return,
        }
        self.table_scroll = 0;
    }

    /// Clamp both bounds into the data range, preserving lo ≤ hi.
    pub fn clamp_years(&mut self) {
        let (min, max) = self.data_bounds();
        self.year_lo = self.year_lo.clamp(min, max);
        self.year_hi = self.year_hi.clamp(min, max);
        if self.year_lo > self.year_hi {
            std::mem::swap(&mut self.year_lo, &mut self.year_hi);
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.push_message(msg.into(), StatusLevel::Info);
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.push_message(msg.into(), StatusLevel::Warning);
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.push_message(msg.into(), StatusLevel::Error);
    }

    fn push_message(&mut self, text: String, level: StatusLevel) {
        self.status_message = Some(StatusMessage {
            at: chrono::Local::now().naive_local(),
            text,
            level,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendlab_core::sample::sample_dataset;

    fn app() -> AppState {
        AppState::new(sample_dataset(), "sample".into(), PathBuf::from("."))
    }

    #[test]
    fn control_cycle() {
        assert_eq!(Control::StartYear.next(), Control::EndYear);
        assert_eq!(Control::ShowTable.next(), Control::StartYear);
        assert_eq!(Control::StartYear.prev(), Control::ShowTable);
        for i in 0..4 {
            assert_eq!(Control::from_index(i).unwrap().index(), i);
        }
        assert!(Control::from_index(4).is_none());
    }

    #[test]
    fn new_app_spans_the_whole_dataset() {
        let app = app();
        assert_eq!(app.year_lo, 2013);
        assert_eq!(app.year_hi, 2024);
        assert_eq!(app.filtered().len(), app.dataset.len());
    }

    #[test]
    fn bounds_push_but_never_cross() {
        let mut app = app();
        app.year_lo = 2020;
        app.year_hi = 2020;

        app.adjust_year_lo(5);
        assert_eq!(app.year_lo, 2020); // clamped at year_hi

        app.adjust_year_hi(-5);
        assert_eq!(app.year_hi, 2020); // clamped at year_lo

        app.adjust_year_lo(-100);
        assert_eq!(app.year_lo, 2013); // clamped at data min

        app.adjust_year_hi(100);
        assert_eq!(app.year_hi, 2024); // clamped at data max
    }

    #[test]
    fn snap_goes_to_data_edges() {
        let mut app = app();
        app.year_lo = 2018;
        app.year_hi = 2021;

        app.focused = Control::StartYear;
        app.snap_focused_year(true);
        assert_eq!(app.year_lo, 2013);

        app.focused = Control::EndYear;
        app.snap_focused_year(false);
        assert_eq!(app.year_hi, 2024);
    }

    #[test]
    fn clamp_repairs_persisted_state() {
        let mut app = app();
        app.year_lo = 1999;
        app.year_hi = 2099;
        app.clamp_years();
        assert_eq!((app.year_lo, app.year_hi), (2013, 2024));

        app.year_lo = 2022;
        app.year_hi = 2018;
        app.clamp_years();
        assert!(app.year_lo <= app.year_hi);
    }

    #[test]
    fn regression_follows_the_filter() {
        let mut app = app();
        let full = app.regression().unwrap();
        assert_eq!(full.n, 12);

        app.year_lo = 2020;
        let recent = app.regression().unwrap();
        assert_eq!(recent.n, 5);

        app.year_hi = 2020;
        assert!(app.regression().is_none()); // single point
    }

    #[test]
    fn status_levels() {
        let mut app = app();
        app.set_warning("careful");
        let msg = app.status_message.as_ref().unwrap();
        assert_eq!(msg.level, StatusLevel::Warning);
        assert_eq!(msg.text, "careful");
    }
}
