//! Flexible two-granularity timestamps.
//!
//! Schedule endpoints are stored as strings in one of two forms:
//! date-only (`YYYY-MM-DD`) or minute precision (`YYYY-MM-DD HH:MM`).
//! A date-only stamp parses as midnight. Operations that shift a stamp
//! (e.g. extending a slot) re-render it in its original granularity.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::errors::CoreError;

const DATE_FMT: &str = "%Y-%m-%d";
const MINUTE_FMT: &str = "%Y-%m-%d %H:%M";
const SECOND_FMT: &str = "%Y-%m-%d %H:%M:%S";
const COMPACT_FMT: &str = "%Y%m%d_%H%M%S";

/// String granularity of a stamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Date,
    Minute,
}

impl Granularity {
    /// Granularity implied by the string form. A ten-character stamp is
    /// date-only; everything else is treated as minute precision.
    #[must_use]
    pub const fn of(raw: &str) -> Self {
        if raw.len() == 10 {
            Self::Date
        } else {
            Self::Minute
        }
    }
}

/// Parse a stamp in either accepted granularity.
pub fn parse(raw: &str) -> Result<NaiveDateTime, CoreError> {
    let invalid = || CoreError::InvalidStamp {
        input: raw.to_string(),
    };
    match Granularity::of(raw) {
        Granularity::Date => NaiveDate::parse_from_str(raw, DATE_FMT)
            .map(|date| date.and_time(NaiveTime::MIN))
            .map_err(|_| invalid()),
        Granularity::Minute => {
            NaiveDateTime::parse_from_str(raw, MINUTE_FMT).map_err(|_| invalid())
        }
    }
}

/// Date portion of a stamp, for date-only range comparisons.
pub fn date_part(raw: &str) -> Result<NaiveDate, CoreError> {
    let prefix = raw.get(..10).ok_or_else(|| CoreError::InvalidStamp {
        input: raw.to_string(),
    })?;
    NaiveDate::parse_from_str(prefix, DATE_FMT).map_err(|_| CoreError::InvalidStamp {
        input: raw.to_string(),
    })
}

/// Render a datetime back into the given granularity.
#[must_use]
pub fn format(dt: NaiveDateTime, granularity: Granularity) -> String {
    match granularity {
        Granularity::Date => dt.format(DATE_FMT).to_string(),
        Granularity::Minute => dt.format(MINUTE_FMT).to_string(),
    }
}

/// Current local time as a minute-precision stamp.
#[must_use]
pub fn now_minute() -> String {
    Local::now().naive_local().format(MINUTE_FMT).to_string()
}

/// Current local time as a second-precision stamp (`deleted_at`,
/// `created_at`).
#[must_use]
pub fn now_second() -> String {
    Local::now().naive_local().format(SECOND_FMT).to_string()
}

/// Current local time in the compact form used for backup file names.
#[must_use]
pub fn now_compact() -> String {
    Local::now().naive_local().format(COMPACT_FMT).to_string()
}

/// Floor a datetime to the nearest 5 minutes (seconds dropped).
#[must_use]
pub fn floor_to_five_minutes(dt: NaiveDateTime) -> NaiveDateTime {
    let minute = dt.minute() - dt.minute() % 5;
    dt.with_minute(minute)
        .and_then(|d| d.with_second(0))
        .and_then(|d| d.with_nanosecond(0))
        .unwrap_or(dt)
}
