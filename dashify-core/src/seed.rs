//! Fixture events for sessions without a reachable backend.

use chrono::NaiveDate;

use crate::day_key::DayKey;
use crate::day_map::EventsByDay;
use crate::event::{CalendarEvent, EventType, SEED_ID_PREFIX};

/// The sample schedule shown before the first successful sync, anchored to
/// the given month so the grid is never empty.
///
/// Deterministic: the same (year, month) always yields the same map with
/// ids `seed-1` through `seed-9`.
pub fn seed_month(year: i32, month: u32) -> EventsByDay {
    let fixtures: [(u32, &str, EventType, &str); 9] = [
        (5, "Brand shoot", EventType::Shoot, "10:00"),
        (5, "BTS clips", EventType::Shoot, "14:00"),
        (8, "Reel drop", EventType::Post, "12:00"),
        (12, "Product shoot", EventType::Shoot, "09:00"),
        (15, "IG carousel", EventType::Post, "11:00"),
        (15, "TikTok post", EventType::Post, "15:00"),
        (20, "Studio session", EventType::Shoot, "10:00"),
        (22, "YouTube upload", EventType::Post, "18:00"),
        (25, "Blog post", EventType::Post, "09:00"),
    ];

    let mut map = EventsByDay::new();
    for (n, (day, title, kind, time)) in fixtures.into_iter().enumerate() {
        let Some(date) = NaiveDate::from_ymd_opt(year, month, day) else {
            continue;
        };
        map.insert(
            DayKey::from_date(date),
            CalendarEvent {
                id: format!("{}{}", SEED_ID_PREFIX, n + 1),
                title: title.to_string(),
                kind,
                time: time.to_string(),
            },
        );
    }
    map
}
