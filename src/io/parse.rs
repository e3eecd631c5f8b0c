//! Production time-series ingest.
//!
//! This module turns raw delimited text into a clean, time-ordered
//! `ParsedProduction` that is safe to fit.
//!
//! Design goals:
//! - **Lenient rows, strict outcome**: malformed lines are silently discarded,
//!   but zero surviving records is an error.
//! - **Deterministic behavior**: identical text always yields identical output
//!   ordering and values.
//! - **Separation of concerns**: no fitting logic here.
//!
//! Accepted line shape: `<date>[,|\t|space]<rate>`, with optional header lines
//! whose first token starts with `date`, `month` or `time` (case-insensitive).

use std::fs;
use std::path::Path;

use chrono::{Datelike, NaiveDate};

use crate::domain::{ParsedProduction, ProductionRecord};
use crate::error::AppError;

/// Parse raw delimited text into a production series.
///
/// Fails with `AppError::Parse` only when no valid record survives.
pub fn parse_production(text: &str) -> Result<ParsedProduction, AppError> {
    let mut records = Vec::new();

    for line in text.lines() {
        let mut fields = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|s| !s.is_empty());

        let Some(first) = fields.next() else {
            continue;
        };
        if is_header_token(first) {
            continue;
        }
        let Some(second) = fields.next() else {
            continue;
        };

        let Some(date) = parse_record_date(first) else {
            continue;
        };
        let Ok(rate) = second.parse::<f64>() else {
            continue;
        };
        if !rate.is_finite() || rate < 0.0 {
            continue;
        }

        records.push(ProductionRecord { date, rate });
    }

    if records.is_empty() {
        return Err(AppError::Parse(
            "No valid production records found. Expected lines of `<date>,<rate>`.".to_string(),
        ));
    }

    // Stable sort keeps duplicate-date records in input order.
    records.sort_by_key(|r| r.date);

    let origin = records[0].date;
    let time: Vec<f64> = records
        .iter()
        .map(|r| months_between(origin, r.date) as f64)
        .collect();
    let rates: Vec<f64> = records.iter().map(|r| r.rate).collect();

    Ok(ParsedProduction {
        records,
        time,
        rates,
    })
}

/// Read a file and parse it as a production series.
pub fn load_production(path: &Path) -> Result<ParsedProduction, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::Io(format!("Failed to read '{}': {e}", path.display())))?;
    parse_production(&text)
}

fn is_header_token(token: &str) -> bool {
    let t = token.to_ascii_lowercase();
    t.starts_with("date") || t.starts_with("month") || t.starts_with("time")
}

/// Parse a record date, trying formats in a fixed order:
/// `YYYY-MM[-DD]`, `MM/DD/YYYY`, `YYYY/MM[/DD]`.
///
/// The day-of-month never affects the month arithmetic, so month-only forms
/// are normalized to the first of the month.
fn parse_record_date(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-1"), "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%m/%d/%Y") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y/%m/%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}/1"), "%Y/%m/%d") {
        return Some(d);
    }
    None
}

/// Whole calendar months from `origin` to `date` (day-of-month ignored).
fn months_between(origin: NaiveDate, date: NaiveDate) -> i32 {
    (date.year() - origin.year()) * 12 + (date.month() as i32 - origin.month() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_month_lines() {
        let parsed = parse_production("2020-01,1000\n2020-02,950\n2020-03,900").unwrap();
        assert_eq!(parsed.time, vec![0.0, 1.0, 2.0]);
        assert_eq!(parsed.rates, vec![1000.0, 950.0, 900.0]);
    }

    #[test]
    fn out_of_order_input_is_sorted() {
        let parsed = parse_production("2020-03,900\n2020-01,1000\n2020-02,950").unwrap();
        assert_eq!(parsed.time, vec![0.0, 1.0, 2.0]);
        assert_eq!(parsed.rates, vec![1000.0, 950.0, 900.0]);
    }

    #[test]
    fn header_lines_are_skipped() {
        let parsed = parse_production("Date,Rate\n2020-01,1000\n2020-02,950").unwrap();
        assert_eq!(parsed.len(), 2);

        let parsed = parse_production("MONTH\tOIL\n2020-01\t1000\n2020-02\t950").unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn accepts_all_documented_date_formats() {
        let text = "2020-01-15,100\n02/15/2020,90\n2020/03,80\n2020/04/15,70";
        let parsed = parse_production(text).unwrap();
        assert_eq!(parsed.time, vec![0.0, 1.0, 2.0, 3.0]);
        assert_eq!(parsed.rates, vec![100.0, 90.0, 80.0, 70.0]);
    }

    #[test]
    fn tab_and_whitespace_delimiters_work() {
        let parsed = parse_production("2020-01\t1000\n2020-02   950").unwrap();
        assert_eq!(parsed.rates, vec![1000.0, 950.0]);
    }

    #[test]
    fn day_of_month_is_ignored_in_time_offsets() {
        let parsed = parse_production("2020-01-31,100\n2020-02-01,90").unwrap();
        assert_eq!(parsed.time, vec![0.0, 1.0]);
    }

    #[test]
    fn bad_rows_are_discarded_not_fatal() {
        let text = "garbage line\n2020-01,1000\nnot-a-date,5\n2020-02,abc\n2020-03,-4\n2020-04,900";
        let parsed = parse_production(text).unwrap();
        assert_eq!(parsed.rates, vec![1000.0, 900.0]);
    }

    #[test]
    fn zero_rates_are_kept() {
        let parsed = parse_production("2020-01,1000\n2020-02,0").unwrap();
        assert_eq!(parsed.rates, vec![1000.0, 0.0]);
    }

    #[test]
    fn duplicate_months_are_kept() {
        let parsed = parse_production("2020-01,1000\n2020-01-20,980\n2020-02,950").unwrap();
        assert_eq!(parsed.time, vec![0.0, 0.0, 1.0]);
        assert_eq!(parsed.len(), 3);
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        let err = parse_production("").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn garbage_input_is_a_parse_error() {
        let err = parse_production("hello world\nfoo,bar\n1,2,3").unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
    }

    #[test]
    fn year_boundaries_count_whole_months() {
        let parsed = parse_production("2019-11,100\n2020-02,90").unwrap();
        assert_eq!(parsed.time, vec![0.0, 3.0]);
    }

    #[test]
    fn last_month_is_the_forecast_seed() {
        let parsed = parse_production("2020-01,100\n2020-06,90").unwrap();
        assert_eq!(parsed.last_month(), 5);
    }
}
