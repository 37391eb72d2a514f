//! Fiscal-year records and the year-range filter.

use serde::{Deserialize, Serialize};

/// One fiscal-year observation: CPI index and monthly household spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// Original row label, e.g. `2018年度` or `2018`.
    pub label: String,
    /// Parsed numeric year.
    pub year: i32,
    /// Monthly household consumption expenditure in yen.
    pub spending: f64,
    /// Consumer price index (2020 = 100 style).
    pub cpi: f64,
}

/// The loaded series, ordered by year ascending.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<YearRecord>,
}

impl Dataset {
    /// Build a dataset from records, sorting by year.
    ///
    /// Duplicate-year rejection happens at ingest; records handed in here
    /// are assumed to have distinct years.
    pub fn new(mut records: Vec<YearRecord>) -> Self {
        records.sort_by_key(|r| r.year);
        Self { records }
    }

    pub fn records(&self) -> &[YearRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest year in the series, or None when empty.
    pub fn min_year(&self) -> Option<i32> {
        self.records.first().map(|r| r.year)
    }

    /// Latest year in the series, or None when empty.
    pub fn max_year(&self) -> Option<i32> {
        self.records.last().map(|r| r.year)
    }

    /// Inclusive year-range filter. An inverted range yields nothing.
    pub fn filter_years(&self, lo: i32, hi: i32) -> Vec<&YearRecord> {
        self.records
            .iter()
            .filter(|r| r.year >= lo && r.year <= hi)
            .collect()
    }
}

/// Parse a row label like `2018年度` or `2018` into its numeric year.
///
/// Takes the leading digit run after trimming whitespace; anything after
/// it (the fiscal-year suffix) is ignored. Returns None when the label
/// does not start with a digit.
pub fn parse_year_label(label: &str) -> Option<i32> {
    let trimmed = label.trim();
    let digits: String = trimmed.chars().take_while(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, spending: f64, cpi: f64) -> YearRecord {
        YearRecord {
            label: format!("{year}年度"),
            year,
            spending,
            cpi,
        }
    }

    #[test]
    fn parse_year_labels() {
        assert_eq!(parse_year_label("2018年度"), Some(2018));
        assert_eq!(parse_year_label("2018"), Some(2018));
        assert_eq!(parse_year_label("  2020年度 "), Some(2020));
        assert_eq!(parse_year_label("年度"), None);
        assert_eq!(parse_year_label(""), None);
    }

    #[test]
    fn new_sorts_by_year() {
        let ds = Dataset::new(vec![
            record(2020, 280_000.0, 100.0),
            record(2018, 287_000.0, 99.5),
            record(2019, 293_000.0, 100.0),
        ]);
        let years: Vec<i32> = ds.records().iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2018, 2019, 2020]);
        assert_eq!(ds.min_year(), Some(2018));
        assert_eq!(ds.max_year(), Some(2020));
    }

    #[test]
    fn filter_is_inclusive() {
        let ds = Dataset::new((2015..=2020).map(|y| record(y, 0.0, 0.0)).collect());
        let hit = ds.filter_years(2016, 2018);
        assert_eq!(hit.len(), 3);
        assert_eq!(hit.first().unwrap().year, 2016);
        assert_eq!(hit.last().unwrap().year, 2018);

        // Single endpoint
        assert_eq!(ds.filter_years(2020, 2020).len(), 1);
    }

    #[test]
    fn inverted_or_disjoint_range_is_empty() {
        let ds = Dataset::new((2015..=2020).map(|y| record(y, 0.0, 0.0)).collect());
        assert!(ds.filter_years(2018, 2016).is_empty());
        assert!(ds.filter_years(1990, 1999).is_empty());
    }

    #[test]
    fn empty_dataset_bounds() {
        let ds = Dataset::default();
        assert!(ds.is_empty());
        assert_eq!(ds.min_year(), None);
        assert_eq!(ds.max_year(), None);
        assert!(ds.filter_years(2000, 2030).is_empty());
    }
}
