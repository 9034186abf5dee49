//! Long-form date rendering for invoice headers.

use chrono::NaiveDate;

use crate::error::{EngineError, EngineResult};

/// Input format accepted by [`format_date_long`].
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Output format: day without leading zero, full month name, four-digit year.
pub const LONG_DATE_FORMAT: &str = "%-d %B %Y";

/// Converts a `YYYY-MM-DD` date into long form, e.g. `20 October 2025`.
///
/// # Errors
///
/// Returns [`EngineError::InvalidDate`] if the input is not a real calendar
/// date in `YYYY-MM-DD` form.
///
/// # Examples
///
/// ```
/// use invoice_engine::calculation::format_date_long;
///
/// assert_eq!(format_date_long("2025-10-20").unwrap(), "20 October 2025");
/// assert_eq!(format_date_long("2024-01-05").unwrap(), "5 January 2024");
/// assert!(format_date_long("2024-02-30").is_err());
/// ```
pub fn format_date_long(input: &str) -> EngineResult<String> {
    let date = NaiveDate::parse_from_str(input, ISO_DATE_FORMAT).map_err(|e| {
        EngineError::InvalidDate {
            input: input.to_string(),
            message: e.to_string(),
        }
    })?;

    Ok(date.format(LONG_DATE_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        assert_eq!(format_date_long("2025-10-20").unwrap(), "20 October 2025");
    }

    #[test]
    fn test_leading_zeros_dropped_from_day() {
        assert_eq!(format_date_long("2024-01-05").unwrap(), "5 January 2024");
    }

    #[test]
    fn test_leap_day() {
        assert_eq!(format_date_long("2024-02-29").unwrap(), "29 February 2024");
    }

    #[test]
    fn test_impossible_date_is_rejected() {
        let err = format_date_long("2024-02-30").unwrap_err();
        match err {
            EngineError::InvalidDate { input, .. } => assert_eq!(input, "2024-02-30"),
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn test_non_leap_year_feb_29_is_rejected() {
        assert!(format_date_long("2025-02-29").is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(format_date_long("not-a-date").is_err());
        assert!(format_date_long("").is_err());
        assert!(format_date_long("20/10/2025").is_err());
    }
}
