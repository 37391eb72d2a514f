//! SpendLab Core — dataset model, ingestion, and regression statistics.
//!
//! This crate contains everything below the presentation layer:
//! - Fiscal-year records of CPI and household spending
//! - CSV ingestion with header mapping (Japanese or English columns)
//! - Inclusive year-range filtering
//! - Least-squares regression, Pearson correlation, and R²
//! - Built-in sample series and the TOML application config

pub mod config;
pub mod dataset;
pub mod ingest;
pub mod sample;
pub mod stats;

pub use config::{AppConfig, ChartKind};
pub use dataset::{Dataset, YearRecord};
pub use ingest::DataError;
pub use stats::{LinearFit, RegressionSummary};
