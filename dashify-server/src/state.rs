//! Shared application state: the in-memory event table.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use dashify_core::event::EventType;

use crate::model::{EventUpdate, StoredEvent};

/// Shared application state.
#[derive(Clone, Default)]
pub struct AppState {
    events: Arc<RwLock<HashMap<String, StoredEvent>>>,
}

/// Filters accepted by the list endpoint.
///
/// `owner` is only applied when a bearer identity was presented — anonymous
/// requests see the whole table, matching the portal's optional-auth routes.
#[derive(Debug, Default)]
pub struct EventFilter {
    pub owner: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub kind: Option<EventType>,
}

impl EventFilter {
    fn matches(&self, event: &StoredEvent) -> bool {
        if let Some(owner) = &self.owner {
            if event.owner.as_deref() != Some(owner.as_str()) {
                return false;
            }
        }
        if let Some(start) = self.start {
            if event.start_date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if event.start_date > end {
                return false;
            }
        }
        if let Some(kind) = self.kind {
            if event.kind != kind {
                return false;
            }
        }
        true
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState::default()
    }

    pub async fn insert(&self, event: StoredEvent) -> StoredEvent {
        let mut events = self.events.write().await;
        events.insert(event.id.clone(), event.clone());
        event
    }

    /// Matching events, ascending by start date.
    pub async fn query(&self, filter: &EventFilter) -> Vec<StoredEvent> {
        let events = self.events.read().await;
        let mut rows: Vec<StoredEvent> = events
            .values()
            .filter(|event| filter.matches(event))
            .cloned()
            .collect();
        rows.sort_by_key(|event| event.start_date);
        rows
    }

    pub async fn get(&self, id: &str, owner: Option<&str>) -> Option<StoredEvent> {
        let events = self.events.read().await;
        events
            .get(id)
            .filter(|event| owner.is_none() || event.owner.as_deref() == owner)
            .cloned()
    }

    /// Apply a sparse update. Returns None when the id is unknown or owned
    /// by someone else.
    pub async fn update(
        &self,
        id: &str,
        owner: Option<&str>,
        changes: &EventUpdate,
    ) -> Option<StoredEvent> {
        let mut events = self.events.write().await;
        let event = events.get_mut(id)?;
        if owner.is_some() && event.owner.as_deref() != owner {
            return None;
        }

        if let Some(title) = &changes.title {
            event.title = title.clone();
        }
        if let Some(description) = &changes.description {
            event.description = description.clone();
        }
        if let Some(start_date) = changes.start_date {
            event.start_date = start_date;
        }
        if let Some(end_date) = changes.end_date {
            event.end_date = Some(end_date);
        }
        if let Some(all_day) = changes.all_day {
            event.all_day = all_day;
        }
        if let Some(color) = &changes.color {
            event.color = color.clone();
        }
        if let Some(kind) = changes.kind {
            event.kind = kind;
        }
        if let Some(time) = &changes.time {
            event.time = time.clone();
        }
        event.updated_at = Utc::now();

        Some(event.clone())
    }

    /// Remove an event. Returns whether anything was deleted.
    pub async fn delete(&self, id: &str, owner: Option<&str>) -> bool {
        let mut events = self.events.write().await;
        let owned = events
            .get(id)
            .map(|event| owner.is_none() || event.owner.as_deref() == owner)
            .unwrap_or(false);
        if owned {
            events.remove(id);
        }
        owned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn event(id: &str, start: DateTime<Utc>, kind: EventType, owner: Option<&str>) -> StoredEvent {
        StoredEvent {
            id: id.into(),
            title: format!("Event {id}"),
            description: String::new(),
            start_date: start,
            end_date: None,
            all_day: false,
            color: "#7C3AED".into(),
            kind,
            time: String::new(),
            owner: owner.map(String::from),
            created_at: start,
            updated_at: start,
        }
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, day, 10, 0, 0).unwrap()
    }

    async fn seeded_state() -> AppState {
        let state = AppState::new();
        state.insert(event("a", at(5), EventType::Shoot, Some("alice"))).await;
        state.insert(event("b", at(8), EventType::Post, Some("alice"))).await;
        state.insert(event("c", at(2), EventType::Shoot, Some("bob"))).await;
        state.insert(event("d", at(20), EventType::Meeting, None)).await;
        state
    }

    #[tokio::test]
    async fn query_sorts_by_start_date() {
        let state = seeded_state().await;
        let rows = state.query(&EventFilter::default()).await;
        let ids: Vec<_> = rows.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["c", "a", "b", "d"]);
    }

    #[tokio::test]
    async fn query_scopes_to_owner_only_when_present() {
        let state = seeded_state().await;

        let filter = EventFilter {
            owner: Some("alice".into()),
            ..Default::default()
        };
        assert_eq!(state.query(&filter).await.len(), 2);

        // anonymous requests see everything
        assert_eq!(state.query(&EventFilter::default()).await.len(), 4);
    }

    #[tokio::test]
    async fn query_filters_by_range_and_type() {
        let state = seeded_state().await;

        let filter = EventFilter {
            start: Some(at(4)),
            end: Some(at(10)),
            ..Default::default()
        };
        let ids: Vec<_> = state.query(&filter).await.iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, ["a", "b"]);

        let filter = EventFilter {
            kind: Some(EventType::Shoot),
            ..Default::default()
        };
        assert_eq!(state.query(&filter).await.len(), 2);
    }

    #[tokio::test]
    async fn update_applies_only_set_fields() {
        let state = seeded_state().await;

        let changes = EventUpdate {
            title: Some("Renamed".into()),
            time: Some("12:30".into()),
            ..Default::default()
        };
        let updated = state.update("a", Some("alice"), &changes).await.unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.time, "12:30");
        assert_eq!(updated.start_date, at(5));
        assert_eq!(updated.kind, EventType::Shoot);
    }

    #[tokio::test]
    async fn update_respects_ownership() {
        let state = seeded_state().await;
        let changes = EventUpdate {
            title: Some("Hijacked".into()),
            ..Default::default()
        };

        assert!(state.update("a", Some("bob"), &changes).await.is_none());
        assert!(state.update("missing", None, &changes).await.is_none());
        assert!(state.update("a", None, &changes).await.is_some());
    }

    #[tokio::test]
    async fn delete_removes_owned_events() {
        let state = seeded_state().await;

        assert!(!state.delete("a", Some("bob")).await);
        assert!(state.delete("a", Some("alice")).await);
        assert!(!state.delete("a", Some("alice")).await);
        assert!(state.get("a", None).await.is_none());
    }
}
