//! Date range for fetching events.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

use crate::day_key::local_to_utc;
use crate::grid::{first_of_month, next_month};

/// Days requested before the 1st of the displayed month.
const LEAD_DAYS: i64 = 7;
/// Days requested into the following month.
const TRAIL_DAYS: i64 = 6;

/// Inclusive window of absolute timestamps to request from the event store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

impl DateRange {
    /// Window for the month containing `anchor`: from a week before the 1st
    /// through the end of the 7th of the next month, so the grid's
    /// adjacent-month cells have their events too.
    pub fn for_month(anchor: NaiveDate) -> Self {
        let first = first_of_month(anchor);
        let from_day = first - Duration::days(LEAD_DAYS);
        let to_day = next_month(first) + Duration::days(TRAIL_DAYS);

        DateRange {
            from: local_to_utc(from_day.and_time(NaiveTime::MIN)),
            to: local_to_utc(to_day.and_hms_opt(23, 59, 59).unwrap_or_default()),
        }
    }

    /// Window covering `days` whole days starting at `from` (inclusive).
    pub fn covering_days(from: NaiveDate, days: u32) -> Self {
        let last = from + Duration::days(days.saturating_sub(1) as i64);
        DateRange {
            from: local_to_utc(from.and_time(NaiveTime::MIN)),
            to: local_to_utc(last.and_hms_opt(23, 59, 59).unwrap_or_default()),
        }
    }

    /// `from` as an RFC 3339 string for the wire.
    pub fn from_rfc3339(&self) -> String {
        self.from.to_rfc3339()
    }

    /// `to` as an RFC 3339 string for the wire.
    pub fn to_rfc3339(&self) -> String {
        self.to.to_rfc3339()
    }
}
