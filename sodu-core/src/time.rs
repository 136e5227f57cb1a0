//! Time helpers: day-part bucketing, weekend test, and timezone-aware
//! statement timestamps.

use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Utc, Weekday};
use chrono_tz::Tz;

/// Five-way bucketing of the hour of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Midday,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Morning 6-10, midday 10-14, afternoon 14-18, evening 18-22, night 22-6.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            6..10 => TimeOfDay::Morning,
            10..14 => TimeOfDay::Midday,
            14..18 => TimeOfDay::Afternoon,
            18..22 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }
}

/// True for Saturday and Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Convert a UTC instant into wall-clock time in an IANA timezone like
/// "Asia/Ho_Chi_Minh". Statement exports often record UTC; the classifier
/// cares about the local hour.
pub fn to_local(utc: DateTime<Utc>, tz: &str) -> Result<NaiveDateTime> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
    Ok(tz.from_utc_datetime(&utc.naive_utc()).naive_local())
}

/// Parse a statement timestamp.
///
/// Accepts RFC3339 ("2026-08-05T10:30:00Z", taken as UTC wall-clock),
/// "YYYY-MM-DD HH:MM[:SS]", and bare dates (midnight).
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Ok(ndt);
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M") {
        return Ok(ndt);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
            return Ok(ndt);
        }
    }

    anyhow::bail!("unrecognized timestamp: '{raw}'")
}
