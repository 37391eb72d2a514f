//! TOML application config.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Which chart the report renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Dual-axis time series: CPI and spending by year.
    #[default]
    Line,
    /// CPI vs spending scatter with the regression line.
    Scatter,
}

impl ChartKind {
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Scatter => "Scatter",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            ChartKind::Line => ChartKind::Scatter,
            ChartKind::Scatter => ChartKind::Line,
        }
    }
}

/// Application defaults, loaded from a TOML file when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Path to the data CSV. Relative paths resolve against the CWD.
    pub data_path: Option<PathBuf>,
    /// Chart shown on startup.
    pub chart: ChartKind,
    /// Whether the data table starts visible.
    pub show_table: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load from `path` if it exists, otherwise defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }
}
