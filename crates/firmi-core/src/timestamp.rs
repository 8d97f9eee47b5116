//! Timestamps and their wall-clock text forms
//!
//! The picker exchanges epoch milliseconds with its caller but edits a
//! `YYYY-MM-DD` date and an `HH:mm` time, both read as local wall-clock
//! values in whatever zone the caller supplies.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{PickerError, Result};

/// `YYYY-MM-DD`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// `HH:mm`
pub const TIME_FORMAT: &str = "%H:%M";

const TIME_WITH_SECONDS_FORMAT: &str = "%H:%M:%S";

/// Milliseconds since the Unix epoch
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub const EPOCH: Self = Self(0);

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Wall-clock reading of this instant in `zone`.
    ///
    /// Returns `None` when the value lies outside chrono's supported range.
    pub fn to_local<Z: TimeZone>(self, zone: &Z) -> Option<NaiveDateTime> {
        DateTime::from_timestamp_millis(self.0).map(|utc| utc.with_timezone(zone).naive_local())
    }

    /// Instant at which `zone`'s clocks read `naive`.
    ///
    /// An ambiguous reading (clocks turned back) resolves to the earlier
    /// instant; a skipped reading (clocks turned forward) moves one hour
    /// ahead, the way browsers normalize such input.
    pub fn from_local<Z: TimeZone>(naive: NaiveDateTime, zone: &Z) -> Option<Self> {
        zone.from_local_datetime(&naive)
            .earliest()
            .or_else(|| {
                let shifted = naive.checked_add_signed(TimeDelta::hours(1))?;
                zone.from_local_datetime(&shifted).earliest()
            })
            .map(|dt| Self(dt.timestamp_millis()))
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self(millis)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Timestamp {
    type Err = PickerError;

    fn from_str(s: &str) -> Result<Self> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| PickerError::InvalidTimestamp(s.to_string()))
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn format_time(time: NaiveTime) -> String {
    time.format(TIME_FORMAT).to_string()
}

/// Parse `HH:mm` (or `HH:mm:ss`, which some browsers send); seconds are dropped.
pub fn parse_time(text: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(text, TIME_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(text, TIME_WITH_SECONDS_FORMAT))
        .map(truncate_to_minute)
        .map_err(|_| PickerError::InvalidTime(text.to_string()))
}

/// Drop seconds and sub-second precision.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

#[cfg(test)]
mod tests {
    use chrono::{FixedOffset, Utc};

    use super::*;

    #[test]
    fn test_epoch_in_utc() {
        let naive = Timestamp::EPOCH.to_local(&Utc).unwrap();
        assert_eq!(format_date(naive.date()), "1970-01-01");
        assert_eq!(format_time(naive.time()), "00:00");
    }

    #[test]
    fn test_epoch_west_of_greenwich() {
        let zone = FixedOffset::west_opt(5 * 3600).unwrap();
        let naive = Timestamp::EPOCH.to_local(&zone).unwrap();
        assert_eq!(format_date(naive.date()), "1969-12-31");
        assert_eq!(format_time(naive.time()), "19:00");
    }

    #[test]
    fn test_from_local_honours_offset() {
        let zone = FixedOffset::east_opt(2 * 3600).unwrap();
        let naive = NaiveDate::from_ymd_opt(1970, 1, 1)
            .unwrap()
            .and_time(parse_time("02:00").unwrap());
        assert_eq!(Timestamp::from_local(naive, &zone), Some(Timestamp::EPOCH));
    }

    #[test]
    fn test_out_of_range_has_no_local_reading() {
        assert!(Timestamp::from_millis(i64::MAX).to_local(&Utc).is_none());
    }

    #[test]
    fn test_parse_time_drops_seconds() {
        let time = parse_time("09:45:31").unwrap();
        assert_eq!(format_time(time), "09:45");
        assert_eq!(time.second(), 0);
    }

    #[test]
    fn test_rejects_malformed_text() {
        assert_eq!(
            parse_time("quarter past"),
            Err(PickerError::InvalidTime("quarter past".into()))
        );
        assert!("12abc".parse::<Timestamp>().is_err());
        assert_eq!("-1500".parse::<Timestamp>(), Ok(Timestamp::from_millis(-1500)));
    }
}
