//! Canonical day identity for the grid and the event map.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};

use crate::error::PortalError;

/// A calendar day in local time, rendered as `YYYY-MM-DD`.
///
/// Two timestamps map to the same key iff they fall on the same local
/// calendar day; the key doubles as the bucket identity in
/// [`EventsByDay`](crate::day_map::EventsByDay).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn from_date(date: NaiveDate) -> Self {
        DayKey(date)
    }

    /// The key for the current local day.
    pub fn today() -> Self {
        DayKey(Local::now().date_naive())
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// Combine the day with a `"HH:MM"` time of day into an absolute UTC
    /// timestamp. Empty or unparseable times mean local midnight, keeping
    /// the function total.
    pub fn and_time(&self, time: &str) -> DateTime<Utc> {
        let tod = NaiveTime::parse_from_str(time, "%H:%M").unwrap_or(NaiveTime::MIN);
        local_to_utc(self.0.and_time(tod))
    }
}

/// Resolve a local wall-clock datetime to UTC, tolerating DST gaps.
pub(crate) fn local_to_utc(naive: NaiveDateTime) -> DateTime<Utc> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| naive.and_utc())
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for DayKey {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(DayKey)
            .map_err(|_| {
                PortalError::Validation(format!("Invalid day key '{}'. Expected YYYY-MM-DD", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn formats_with_zero_padding() {
        let key = DayKey::from_date(NaiveDate::from_ymd_opt(2026, 2, 5).unwrap());
        assert_eq!(key.to_string(), "2026-02-05");
    }

    #[test]
    fn round_trips_through_string() {
        let key: DayKey = "2026-02-05".parse().unwrap();
        let date = key.date();
        assert_eq!((date.year(), date.month(), date.day()), (2026, 2, 5));
        assert_eq!(key.to_string().parse::<DayKey>().unwrap(), key);
    }

    #[test]
    fn rejects_malformed_keys() {
        assert!("2026-2-5".parse::<DayKey>().is_err());
        assert!("Feb 5 2026".parse::<DayKey>().is_err());
        assert!("".parse::<DayKey>().is_err());
    }

    #[test]
    fn orders_chronologically() {
        let a: DayKey = "2026-01-31".parse().unwrap();
        let b: DayKey = "2026-02-01".parse().unwrap();
        assert!(a < b);
    }

    #[test]
    fn and_time_applies_hours_and_minutes() {
        let key: DayKey = "2026-02-05".parse().unwrap();
        let local = key.and_time("10:30").with_timezone(&Local);
        assert_eq!(local.date_naive(), key.date());
        assert_eq!((local.hour(), local.minute()), (10, 30));
    }

    #[test]
    fn and_time_defaults_to_midnight() {
        let key: DayKey = "2026-02-05".parse().unwrap();
        for time in ["", "soon", "25:99"] {
            let local = key.and_time(time).with_timezone(&Local);
            assert_eq!(local.date_naive(), key.date());
            assert_eq!((local.hour(), local.minute()), (0, 0));
        }
    }
}
