//! UI state persistence — JSON save/load across restarts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use spendlab_core::ChartKind;

use crate::app::{AppState, Control, Overlay};

/// Serializable subset of app state that persists across restarts.
#[derive(Debug, Serialize, Deserialize)]
pub struct PersistedState {
    pub year_lo: Option<i32>,
    pub year_hi: Option<i32>,
    pub chart_kind: ChartKind,
    pub show_table: bool,
    pub focused: Control,
    pub welcome_dismissed: bool,
}

impl Default for PersistedState {
    fn default() -> Self {
        Self {
            year_lo: None,
            year_hi: None,
            chart_kind: ChartKind::Line,
            show_table: false,
            focused: Control::StartYear,
            welcome_dismissed: false,
        }
    }
}

/// Load persisted state from disk. Returns defaults if missing or corrupt.
pub fn load(path: &Path) -> PersistedState {
    match std::fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => PersistedState::default(),
    }
}

/// Save persisted state to disk. Creates parent directories if needed.
pub fn save(path: &Path, state: &PersistedState) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(state)?;
    std::fs::write(path, json)?;
    Ok(())
}

/// Extract persisted state from AppState.
pub fn extract(app: &AppState) -> PersistedState {
    PersistedState {
        year_lo: Some(app.year_lo),
        year_hi: Some(app.year_hi),
        chart_kind: app.chart_kind,
        show_table: app.show_table,
        focused: app.focused,
        welcome_dismissed: app.overlay != Overlay::Welcome,
    }
}

/// Apply persisted state to AppState. Saved year bounds may refer to a
/// dataset that has since changed shape, so they are clamped after apply.
pub fn apply(app: &mut AppState, state: PersistedState) {
    if let Some(lo) = state.year_lo {
        app.year_lo = lo;
    }
    if let Some(hi) = state.year_hi {
        app.year_hi = hi;
    }
    app.clamp_years();
    app.chart_kind = state.chart_kind;
    app.show_table = state.show_table;
    app.focused = state.focused;
    if !state.welcome_dismissed {
        app.overlay = Overlay::Welcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spendlab_core::sample::sample_dataset;
    use std::path::PathBuf;

    #[test]
    fn roundtrip() {
        let dir = std::env::temp_dir().join("spendlab_persist_test");
        let path = dir.join("state.json");

        let state = PersistedState {
            year_lo: Some(2016),
            year_hi: Some(2022),
            chart_kind: ChartKind::Scatter,
            show_table: true,
            focused: Control::EndYear,
            welcome_dismissed: true,
        };

        save(&path, &state).unwrap();
        let loaded = load(&path);

        assert_eq!(loaded.year_lo, Some(2016));
        assert_eq!(loaded.chart_kind, ChartKind::Scatter);
        assert!(loaded.show_table);
        assert!(loaded.welcome_dismissed);

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_file_returns_defaults() {
        let loaded = load(Path::new("/nonexistent/path/state.json"));
        assert_eq!(loaded.year_lo, None);
        assert!(!loaded.welcome_dismissed);
    }

    #[test]
    fn corrupt_file_returns_defaults() {
        let dir = std::env::temp_dir().join("spendlab_persist_corrupt");
        let path = dir.join("state.json");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "not valid json {{{").unwrap();

        let loaded = load(&path);
        assert_eq!(loaded.chart_kind, ChartKind::Line);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn apply_clamps_stale_year_bounds() {
        let mut app = AppState::new(sample_dataset(), "sample".into(), PathBuf::from("."));
        let state = PersistedState {
            year_lo: Some(1990),
            year_hi: Some(2090),
            welcome_dismissed: true,
            ..PersistedState::default()
        };
        apply(&mut app, state);
        assert_eq!((app.year_lo, app.year_hi), (2013, 2024));
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn first_run_shows_welcome() {
        let mut app = AppState::new(sample_dataset(), "sample".into(), PathBuf::from("."));
        apply(&mut app, PersistedState::default());
        assert_eq!(app.overlay, Overlay::Welcome);
    }
}
