//! Time helpers — business-timezone day windows
//!
//! All date-to-timestamp conversion happens at the API handler layer;
//! the repository layer only ever sees `i64` Unix millis. Day windows
//! are half-open: `[day_start, day_end)`.

use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;

use super::{AppError, AppResult};

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Local midnight to Unix millis in the business timezone.
///
/// DST gap fallback: if midnight does not exist locally (spring-forward),
/// fall back to interpreting it as UTC.
fn midnight_millis(date: NaiveDate, tz: Tz) -> i64 {
    let naive = date.and_time(NaiveTime::MIN);
    naive
        .and_local_timezone(tz)
        .latest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Start of day (00:00:00) in Unix millis, business timezone
pub fn day_start_millis(date: NaiveDate, tz: Tz) -> i64 {
    midnight_millis(date, tz)
}

/// End of day in Unix millis, business timezone.
///
/// Returns next-day midnight; callers use `< end` (exclusive) semantics.
pub fn day_end_millis(date: NaiveDate, tz: Tz) -> i64 {
    let next_day = date.succ_opt().unwrap_or(date);
    midnight_millis(next_day, tz)
}

/// Today's calendar date in the business timezone
pub fn today_in_tz(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}
