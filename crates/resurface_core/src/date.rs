//! Reference-date parsing for the CLI's `--reference` option.

use chrono::{Duration, Local, NaiveDate};

use crate::error::{ResurfaceError, Result};

/// Parse a reference date string into a `NaiveDate`.
///
/// Supports: "today", "yesterday", "YYYY-MM-DD".
pub fn parse_reference(date_str: &str) -> Result<NaiveDate> {
    match date_str.to_lowercase().as_str() {
        "today" => Ok(Local::now().date_naive()),
        "yesterday" => Ok(Local::now().date_naive() - Duration::days(1)),
        _ => NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| {
            ResurfaceError::InvalidDate {
                input: date_str.to_string(),
            }
        }),
    }
}
