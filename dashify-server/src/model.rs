//! Server-side event model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dashify_core::event::EventType;

/// Default accent color from the portal's palette.
const DEFAULT_COLOR: &str = "#7C3AED";

pub fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// A persisted calendar event, field-for-field the portal's event document.
///
/// Serializes with the portal wire names (`_id`, `type`, `startDate`, ...)
/// so existing clients keep working.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredEvent {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "startDate")]
    pub start_date: DateTime<Utc>,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(rename = "allDay", default)]
    pub all_day: bool,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(rename = "type", default)]
    pub kind: EventType,
    #[serde(default)]
    pub time: String,
    /// Bearer identity of the owner; None for events created anonymously.
    #[serde(skip)]
    pub owner: Option<String>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl StoredEvent {
    pub fn new_id() -> String {
        Uuid::new_v4().simple().to_string()
    }
}

/// Sparse update payload, restricted to the portal's updatable fields.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct EventUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(rename = "endDate")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(rename = "allDay")]
    pub all_day: Option<bool>,
    pub color: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<EventType>,
    pub time: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn serializes_with_portal_field_names() {
        let event = StoredEvent {
            id: "abc123".into(),
            title: "Shoot".into(),
            description: String::new(),
            start_date: Utc.with_ymd_and_hms(2026, 2, 5, 10, 0, 0).unwrap(),
            end_date: None,
            all_day: false,
            color: default_color(),
            kind: EventType::Shoot,
            time: "10:00".into(),
            owner: Some("secret-token".into()),
            created_at: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
        };

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["_id"], "abc123");
        assert_eq!(value["type"], "shoot");
        assert!(value["startDate"].as_str().unwrap().starts_with("2026-02-05"));
        // owner identities never leave the server
        assert!(value.get("owner").is_none());
        assert!(value.get("endDate").is_none());
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(StoredEvent::new_id(), StoredEvent::new_id());
    }
}
