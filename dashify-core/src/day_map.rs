//! Day-keyed event map.

use std::collections::BTreeMap;

use chrono::Local;

use crate::day_key::DayKey;
use crate::event::{CalendarEvent, EventRecord};

/// Events bucketed by calendar day.
///
/// Within a day, insertion order is display order; no sorting by time.
/// Keys iterate chronologically.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventsByDay(BTreeMap<DayKey, Vec<CalendarEvent>>);

impl EventsByDay {
    pub fn new() -> Self {
        EventsByDay::default()
    }

    /// Group API records by the local calendar day of their start timestamp.
    pub fn from_records(records: &[EventRecord]) -> Self {
        let mut map = EventsByDay::new();
        for record in records {
            let key = DayKey::from_date(record.start.with_timezone(&Local).date_naive());
            map.insert(key, CalendarEvent::from(record));
        }
        map
    }

    /// Append an event to a day's bucket.
    pub fn insert(&mut self, key: DayKey, event: CalendarEvent) {
        self.0.entry(key).or_default().push(event);
    }

    /// Remove an event from a day. Returns whether anything was removed;
    /// empty buckets are dropped.
    pub fn remove(&mut self, key: DayKey, id: &str) -> bool {
        let Some(bucket) = self.0.get_mut(&key) else {
            return false;
        };
        let before = bucket.len();
        bucket.retain(|event| event.id != id);
        let removed = bucket.len() < before;
        if bucket.is_empty() {
            self.0.remove(&key);
        }
        removed
    }

    /// Replace the event holding `old_id` in place, keeping its display slot.
    pub fn reconcile(&mut self, key: DayKey, old_id: &str, event: CalendarEvent) -> bool {
        if let Some(bucket) = self.0.get_mut(&key) {
            if let Some(slot) = bucket.iter_mut().find(|e| e.id == old_id) {
                *slot = event;
                return true;
            }
        }
        false
    }

    pub fn get(&self, key: DayKey) -> &[CalendarEvent] {
        self.0.get(&key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days with at least one event, in chronological order.
    pub fn days(&self) -> impl Iterator<Item = (DayKey, &[CalendarEvent])> {
        self.0.iter().map(|(key, bucket)| (*key, bucket.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total event count across all days.
    pub fn total(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventType;

    fn key(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn event(id: &str, title: &str) -> CalendarEvent {
        CalendarEvent {
            id: id.into(),
            title: title.into(),
            kind: EventType::Shoot,
            time: "10:00".into(),
        }
    }

    #[test]
    fn insertion_order_is_display_order() {
        let mut map = EventsByDay::new();
        map.insert(key("2026-02-05"), event("a", "First"));
        map.insert(key("2026-02-05"), event("b", "Second"));
        let titles: Vec<_> = map.get(key("2026-02-05")).iter().map(|e| &e.title).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[test]
    fn remove_drops_empty_buckets() {
        let mut map = EventsByDay::new();
        map.insert(key("2026-02-05"), event("a", "Only"));
        assert!(map.remove(key("2026-02-05"), "a"));
        assert!(map.is_empty());
        assert!(!map.remove(key("2026-02-05"), "a"));
    }

    #[test]
    fn reconcile_keeps_position() {
        let mut map = EventsByDay::new();
        map.insert(key("2026-02-05"), event("temp-1", "First"));
        map.insert(key("2026-02-05"), event("b", "Second"));
        assert!(map.reconcile(key("2026-02-05"), "temp-1", event("abc123", "First")));
        let bucket = map.get(key("2026-02-05"));
        assert_eq!(bucket[0].id, "abc123");
        assert_eq!(bucket[1].id, "b");
    }

    #[test]
    fn reconcile_misses_unknown_ids() {
        let mut map = EventsByDay::new();
        map.insert(key("2026-02-05"), event("a", "Only"));
        assert!(!map.reconcile(key("2026-02-05"), "nope", event("b", "Other")));
        assert!(!map.reconcile(key("2026-02-06"), "a", event("b", "Other")));
    }

    #[test]
    fn from_records_groups_by_local_day() {
        let records = vec![
            EventRecord {
                id: "1".into(),
                title: "Morning".into(),
                kind: EventType::Shoot,
                time: "09:00".into(),
                start: key("2026-02-05").and_time("09:00"),
            },
            EventRecord {
                id: "2".into(),
                title: "Afternoon".into(),
                kind: EventType::Post,
                time: "15:00".into(),
                start: key("2026-02-05").and_time("15:00"),
            },
            EventRecord {
                id: "3".into(),
                title: "Other day".into(),
                kind: EventType::Meeting,
                time: "".into(),
                start: key("2026-02-08").and_time(""),
            },
        ];

        let map = EventsByDay::from_records(&records);
        assert_eq!(map.total(), 3);
        assert_eq!(map.get(key("2026-02-05")).len(), 2);
        assert_eq!(map.get(key("2026-02-08"))[0].title, "Other day");
        assert!(map.get(key("2026-02-09")).is_empty());
    }

    #[test]
    fn days_iterate_chronologically() {
        let mut map = EventsByDay::new();
        map.insert(key("2026-02-20"), event("a", "Late"));
        map.insert(key("2026-02-05"), event("b", "Early"));
        let keys: Vec<_> = map.days().map(|(k, _)| k.to_string()).collect();
        assert_eq!(keys, ["2026-02-05", "2026-02-20"]);
    }
}
