//! Regression statistics — pure functions over paired samples.
//!
//! Every function is slice in, scalar out: no dataset types, no I/O.
//! Degenerate inputs (too few points, zero variance) return 0.0 or None
//! as documented per function.

use serde::{Deserialize, Serialize};

/// Least-squares line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// The scatter-mode statistics block: fit, correlation, and R².
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionSummary {
    pub fit: LinearFit,
    pub r: f64,
    pub r_squared: f64,
    pub n: usize,
}

impl RegressionSummary {
    /// Compute fit + r + r² for paired samples.
    ///
    /// r² is r·r, matching the correlation/polyfit pairing of the original
    /// report (identical to 1 − SSR/SST for a simple linear fit).
    /// Returns None when a line cannot be fit (see [`linear_fit`]).
    pub fn compute(x: &[f64], y: &[f64]) -> Option<Self> {
        let fit = linear_fit(x, y)?;
        let r = pearson_r(x, y);
        Some(Self {
            fit,
            r,
            r_squared: r * r,
            n: x.len(),
        })
    }
}

/// Arithmetic mean. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n − 1). Returns 0.0 below 2 points.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

/// Least-squares fit of `y = slope * x + intercept`.
///
/// Returns None when the slices differ in length, hold fewer than 2
/// points, or x carries no variance (vertical data has no line).
pub fn linear_fit(x: &[f64], y: &[f64]) -> Option<LinearFit> {
    if x.len() != y.len() || x.len() < 2 {
        return None;
    }
    let mx = mean(x);
    let my = mean(y);

    let sxx: f64 = x.iter().map(|v| (v - mx).powi(2)).sum();
    if sxx < 1e-12 {
        return None;
    }
    let sxy: f64 = x.iter().zip(y.iter()).map(|(a, b)| (a - mx) * (b - my)).sum();

    let slope = sxy / sxx;
    Some(LinearFit {
        slope,
        intercept: my - slope * mx,
    })
}

/// Pearson correlation coefficient.
///
/// Returns 0.0 when the slices differ in length, hold fewer than 2
/// points, or either side carries no variance; otherwise in [-1, 1].
pub fn pearson_r(x: &[f64], y: &[f64]) -> f64 {
    if x.len() != y.len() || x.len() < 2 {
        return 0.0;
    }
    let mx = mean(x);
    let my = mean(y);

    let sxx: f64 = x.iter().map(|v| (v - mx).powi(2)).sum();
    let syy: f64 = y.iter().map(|v| (v - my).powi(2)).sum();
    if sxx < 1e-12 || syy < 1e-12 {
        return 0.0;
    }
    let sxy: f64 = x.iter().zip(y.iter()).map(|(a, b)| (a - mx) * (b - my)).sum();

    (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
}
