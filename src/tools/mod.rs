//! Site operations shared by the CLI and the HTTP API
//!
//! Each tool exposes an `execute_*` function returning a typed response
//! and a `format_*` function rendering it as markdown for the CLI.

pub mod availability;
pub mod blog;
pub mod careers;
pub mod contact;
pub mod inquire;
pub mod properties;
pub mod quote;
pub mod rates;
pub mod search;

use crate::error::AppError;
use chrono::NaiveDate;

/// Parse an optional YYYY-MM-DD date argument
pub(crate) fn parse_date(value: Option<&str>, field: &str) -> Result<Option<NaiveDate>, AppError> {
    match value {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| {
                AppError::InvalidInput(format!(
                    "Invalid {} date '{}', expected YYYY-MM-DD",
                    field, raw
                ))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date(None, "check-in").unwrap(), None);
        assert_eq!(parse_date(Some(""), "check-in").unwrap(), None);
        assert!(parse_date(Some("2026-09-01"), "check-in").unwrap().is_some());
        assert!(parse_date(Some("01/09/2026"), "check-in").is_err());
    }
}
