//! Built-in sample series for running without a data file.
//!
//! Twelve fiscal years of e-Stat-shaped figures: CPI on a 2020 = 100 base
//! and average monthly consumption expenditure for two-or-more-person
//! households, in yen. Deterministic constants so screenshots and tests
//! are reproducible.

use crate::dataset::{Dataset, YearRecord};

const SAMPLE_ROWS: [(i32, f64, f64); 12] = [
    // (year, spending, cpi)
    (2013, 290_454.0, 95.8),
    (2014, 291_194.0, 98.5),
    (2015, 287_373.0, 98.5),
    (2016, 282_188.0, 98.2),
    (2017, 283_027.0, 98.7),
    (2018, 287_315.0, 99.5),
    (2019, 293_379.0, 100.1),
    (2020, 277_926.0, 100.0),
    (2021, 279_024.0, 99.8),
    (2022, 290_865.0, 102.3),
    (2023, 293_997.0, 105.6),
    (2024, 297_531.0, 108.5),
];

/// The built-in fiscal-year series.
pub fn sample_dataset() -> Dataset {
    Dataset::new(
        SAMPLE_ROWS
            .iter()
            .map(|&(year, spending, cpi)| YearRecord {
                label: format!("{year}年度"),
                year,
                spending,
                cpi,
            })
            .collect(),
    )
}
