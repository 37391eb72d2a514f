//! CSV ingestion with header-driven column mapping.
//!
//! The spreadsheet this tool was built around labels its columns in
//! Japanese (`年度`, `消費支出`, `指数`); exports of the same data often
//! carry English headers. Both are accepted, in any column order.

use std::collections::HashSet;
use std::path::Path;

use crate::dataset::{parse_year_label, Dataset, YearRecord};

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column: {0}")]
    MissingColumn(&'static str),

    #[error("row {row}: {message}")]
    Parse { row: usize, message: String },

    #[error("duplicate year: {0}")]
    DuplicateYear(i32),

    #[error("no data rows")]
    Empty,
}

/// Load a dataset from a CSV file.
pub fn load_csv(path: &Path) -> Result<Dataset, DataError> {
    let file = std::fs::File::open(path).map_err(|source| DataError::Io {
        path: path.display().to_string(),
        source,
    })?;
    read_csv(file)
}

/// Load a dataset from any CSV reader. Split out so tests can feed strings.
pub fn read_csv<R: std::io::Read>(reader: R) -> Result<Dataset, DataError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    let year_col = find_column(&headers, &["年度", "year"])
        .ok_or(DataError::MissingColumn("年度 / year"))?;
    let spending_col = find_column(&headers, &["消費支出", "spending"])
        .ok_or(DataError::MissingColumn("消費支出 / spending"))?;
    let cpi_col =
        find_column(&headers, &["指数", "cpi"]).ok_or(DataError::MissingColumn("指数 / cpi"))?;

    let mut records = Vec::new();
    let mut seen_years = HashSet::new();

    for (i, row) in rdr.records().enumerate() {
        let row = row?;
        let data_row = i + 1; // 1-based, excluding the header

        let label = row.get(year_col).unwrap_or("").trim().to_string();
        let year = parse_year_label(&label).ok_or_else(|| DataError::Parse {
            row: data_row,
            message: format!("unparseable year label '{label}'"),
        })?;

        if !seen_years.insert(year) {
            return Err(DataError::DuplicateYear(year));
        }

        let spending = parse_number(row.get(spending_col).unwrap_or("")).ok_or_else(|| {
            DataError::Parse {
                row: data_row,
                message: "non-numeric spending value".into(),
            }
        })?;
        let cpi =
            parse_number(row.get(cpi_col).unwrap_or("")).ok_or_else(|| DataError::Parse {
                row: data_row,
                message: "non-numeric CPI value".into(),
            })?;

        records.push(YearRecord {
            label,
            year,
            spending,
            cpi,
        });
    }

    if records.is_empty() {
        return Err(DataError::Empty);
    }
    Ok(Dataset::new(records))
}

fn find_column(headers: &csv::StringRecord, names: &[&str]) -> Option<usize> {
    headers
        .iter()
        .position(|h| names.iter().any(|n| h.trim().eq_ignore_ascii_case(n)))
}

/// Parse a numeric cell, tolerating thousands separators (`295,000`).
fn parse_number(cell: &str) -> Option<f64> {
    let cleaned: String = cell.trim().chars().filter(|&c| c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn japanese_headers() {
        let csv = "年度,消費支出,指数\n2018年度,287315,99.5\n2019年度,293379,100.0\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].year, 2018);
        assert_eq!(ds.records()[0].label, "2018年度");
        assert_eq!(ds.records()[1].spending, 293_379.0);
    }

    #[test]
    fn english_headers_any_order() {
        let csv = "cpi,year,spending\n99.5,2018,287315\n100.0,2019,293379\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records()[0].cpi, 99.5);
    }

    #[test]
    fn thousands_separators_in_cells() {
        let csv = "year,spending,cpi\n2020,\"277,926\",100.0\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(ds.records()[0].spending, 277_926.0);
    }

    #[test]
    fn rows_sorted_regardless_of_file_order() {
        let csv = "year,spending,cpi\n2020,1,1\n2018,2,2\n2019,3,3\n";
        let ds = read_csv(csv.as_bytes()).unwrap();
        let years: Vec<i32> = ds.records().iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2018, 2019, 2020]);
    }

    #[test]
    fn missing_column_rejected() {
        let csv = "year,spending\n2018,287315\n";
        match read_csv(csv.as_bytes()) {
            Err(DataError::MissingColumn(col)) => assert!(col.contains("cpi")),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn bad_year_label_reports_row() {
        let csv = "year,spending,cpi\n2018,287315,99.5\nnot-a-year,1,1\n";
        match read_csv(csv.as_bytes()) {
            Err(DataError::Parse { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_cell_rejected() {
        let csv = "year,spending,cpi\n2018,lots,99.5\n";
        assert!(matches!(
            read_csv(csv.as_bytes()),
            Err(DataError::Parse { row: 1, .. })
        ));
    }

    #[test]
    fn duplicate_year_rejected() {
        let csv = "year,spending,cpi\n2018,1,1\n2018年度,2,2\n";
        assert!(matches!(
            read_csv(csv.as_bytes()),
            Err(DataError::DuplicateYear(2018))
        ));
    }

    #[test]
    fn empty_file_rejected() {
        let csv = "year,spending,cpi\n";
        assert!(matches!(read_csv(csv.as_bytes()), Err(DataError::Empty)));
    }

    #[test]
    fn load_csv_reports_missing_file() {
        let err = load_csv(Path::new("/nonexistent/spending.csv")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn load_csv_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spending.csv");
        std::fs::write(&path, "年度,消費支出,指数\n2021年度,279024,99.8\n").unwrap();
        let ds = load_csv(&path).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.records()[0].year, 2021);
    }
}
