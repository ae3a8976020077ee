//! Time helpers for business timezone conversions
//!
//! Date-to-timestamp conversion happens at the API handler layer; the
//! repository layer only ever sees `i64` Unix millis.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;

use shared::{AppError, AppResult, ErrorCode};

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Midnight of `date` as Unix millis in the business timezone.
///
/// DST gap fallback: when the local midnight does not exist, fall back
/// to UTC.
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    let naive = date.and_time(NaiveTime::MIN);
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Exclusive end of `date`: the next day's midnight as Unix millis.
///
/// Callers use `< end` semantics.
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    day_start_millis(date.succ_opt().unwrap_or(date), tz)
}

/// Parse an inclusive `YYYY-MM-DD` range into `[start, end)` millis
pub fn range_millis(start_date: &str, end_date: &str, tz: Tz) -> AppResult<(i64, i64)> {
    let start = parse_date(start_date)?;
    let end = parse_date(end_date)?;
    if end < start {
        return Err(AppError::with_message(
            ErrorCode::InvalidDateRange,
            format!("End date {} precedes start date {}", end, start),
        ));
    }
    Ok((day_start_millis(start, tz), day_end_millis(end, tz)))
}

/// Today's date in the business timezone
pub fn today(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono_tz::America::Sao_Paulo;

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-03-09").unwrap(),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
        assert!(parse_date("09/03/2025").is_err());
        assert!(parse_date("2025-13-01").is_err());
    }

    #[test]
    fn test_day_bounds_cover_one_day() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 9).unwrap();
        let start = day_start_millis(date, Sao_Paulo);
        let end = day_end_millis(date, Sao_Paulo);
        // São Paulo has no DST since 2019, so a day is exactly 24h
        assert_eq!(end - start, 24 * 60 * 60 * 1000);
    }

    #[test]
    fn test_range_is_end_exclusive() {
        let (start, end) = range_millis("2025-03-01", "2025-03-02", Sao_Paulo).unwrap();
        let second_day =
            day_start_millis(NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(), Sao_Paulo);
        assert!(start < second_day);
        // End lands on March 3rd midnight, so March 2nd is included
        assert_eq!(
            end,
            day_end_millis(NaiveDate::from_ymd_opt(2025, 3, 2).unwrap(), Sao_Paulo)
        );
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let err = range_millis("2025-03-02", "2025-03-01", Sao_Paulo).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidDateRange);
    }
}
