// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for date parsing and canonical timestamp formatting.

use chrono::{NaiveDate, NaiveDateTime};

/// Canonical `YYYY-MM-DDTHH:MM:SS` form used in seeds and `start_date_local`.
const CANONICAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Malformed or oversized date input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid '{field}' parameter '{value}': expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("Date range spans {days} days; at most {max} are allowed")]
    RangeTooLong { days: i64, max: i64 },
}

/// Inclusive calendar-day range. `start > end` is a valid, empty range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse both bounds, naming the offending query field on failure.
    pub fn parse(start: &str, end: &str) -> Result<Self, ValidationError> {
        Ok(Self {
            start: parse_date("start_date", start)?,
            end: parse_date("end_date", end)?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Days in the range, ascending.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }

    /// Reject ranges spanning more than `max_days` days.
    pub fn within(self, max_days: i64) -> Result<Self, ValidationError> {
        let days = self.num_days();
        if days > max_days {
            return Err(ValidationError::RangeTooLong {
                days,
                max: max_days,
            });
        }
        Ok(self)
    }

    pub fn num_days(&self) -> i64 {
        if self.is_empty() {
            0
        } else {
            (self.end - self.start).num_days() + 1
        }
    }
}

/// Parse an ISO 8601 date. A full local datetime is accepted and truncated
/// to its calendar day.
pub fn parse_date(field: &'static str, raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, CANONICAL_FORMAT).map(|dt| dt.date()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M").map(|dt| dt.date()))
        .map_err(|_| ValidationError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

/// Format a wall-clock timestamp without a zone suffix.
pub fn format_local(datetime: NaiveDateTime) -> String {
    datetime.format(CANONICAL_FORMAT).to_string()
}

/// Format a timestamp as UTC using a `Z` suffix.
pub fn format_utc(datetime: NaiveDateTime) -> String {
    format!("{}Z", format_local(datetime))
}

/// Compact `YYYYMMDD` form used in activity identifiers.
pub fn format_compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("start_date", "2024-03-05").unwrap(), date(2024, 3, 5));
        assert_eq!(
            parse_date("start_date", "2024-03-05T10:30:00").unwrap(),
            date(2024, 3, 5)
        );
        assert_eq!(
            parse_date("start_date", "2024-03-05T10:30").unwrap(),
            date(2024, 3, 5)
        );
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        let err = parse_date("end_date", "not-a-date").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidDate {
                field: "end_date",
                value: "not-a-date".to_string()
            }
        );
        assert!(parse_date("end_date", "2024-02-30").is_err());
    }

    #[test]
    fn test_range_days_inclusive() {
        let range = DateRange::new(date(2024, 2, 27), date(2024, 3, 1));
        let days: Vec<_> = range.days().collect();
        assert_eq!(days.len(), 4); // leap year
        assert_eq!(days[2], date(2024, 2, 29));
        assert_eq!(range.num_days(), 4);
    }

    #[test]
    fn test_reversed_range_is_empty() {
        let range = DateRange::new(date(2024, 1, 2), date(2024, 1, 1));
        assert!(range.is_empty());
        assert_eq!(range.days().count(), 0);
        assert_eq!(range.num_days(), 0);
    }

    #[test]
    fn test_range_length_limit() {
        let range = DateRange::new(date(2024, 1, 1), date(2024, 1, 10));
        assert_eq!(range.within(10), Ok(range));
        assert_eq!(
            range.within(9),
            Err(ValidationError::RangeTooLong { days: 10, max: 9 })
        );

        let reversed = DateRange::new(date(2024, 1, 2), date(2024, 1, 1));
        assert!(reversed.within(0).is_ok());

        let millennium = DateRange::new(date(1000, 1, 1), date(1999, 12, 31));
        assert!(millennium.within(1096).is_err());
    }

    #[test]
    fn test_canonical_formats() {
        let dt = date(2024, 1, 5).and_hms_opt(7, 4, 0).unwrap();
        assert_eq!(format_local(dt), "2024-01-05T07:04:00");
        assert_eq!(format_utc(dt), "2024-01-05T07:04:00Z");
        assert_eq!(format_compact_date(dt.date()), "20240105");
    }
}
