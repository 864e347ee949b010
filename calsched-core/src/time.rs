//! Strict parsing of the date and date-time strings the engine accepts.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{CalSchedError, CalSchedResult};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Start of the fixed all-day window.
pub const ALL_DAY_START: NaiveTime = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
/// End of the fixed all-day window.
pub const ALL_DAY_END: NaiveTime = NaiveTime::from_hms_opt(17, 0, 0).unwrap();

const DAY_START: NaiveTime = NaiveTime::from_hms_opt(0, 0, 0).unwrap();
const DAY_END: NaiveTime = NaiveTime::from_hms_opt(23, 59, 0).unwrap();

/// Parse `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> CalSchedResult<NaiveDate> {
    if !has_shape(s, "dddd-dd-dd") {
        return Err(malformed(s, "YYYY-MM-DD"));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| malformed(s, "YYYY-MM-DD"))
}

/// Parse `YYYY-MM-DDThh:mm`. Seconds are not accepted.
pub fn parse_date_time(s: &str) -> CalSchedResult<NaiveDateTime> {
    if !has_shape(s, "dddd-dd-ddTdd:dd") {
        return Err(malformed(s, "YYYY-MM-DDThh:mm"));
    }
    NaiveDateTime::parse_from_str(s, DATE_TIME_FORMAT)
        .map_err(|_| malformed(s, "YYYY-MM-DDThh:mm"))
}

/// Format a date-time the way it is accepted by [`parse_date_time`].
pub fn format_date_time(dt: &NaiveDateTime) -> String {
    dt.format(DATE_TIME_FORMAT).to_string()
}

/// 00:00 on the given date.
pub fn day_start(date: NaiveDate) -> NaiveDateTime {
    date.and_time(DAY_START)
}

/// 23:59 on the given date.
pub fn day_end(date: NaiveDate) -> NaiveDateTime {
    date.and_time(DAY_END)
}

// chrono's %Y and %m accept variable widths, so pin the exact layout first.
fn has_shape(s: &str, shape: &str) -> bool {
    s.len() == shape.len()
        && s.chars().zip(shape.chars()).all(|(c, p)| match p {
            'd' => c.is_ascii_digit(),
            _ => c == p,
        })
}

fn malformed(input: &str, expected: &'static str) -> CalSchedError {
    CalSchedError::MalformedDateTime {
        input: input.to_string(),
        expected,
    }
}
