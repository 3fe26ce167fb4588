//! Portal-neutral event types.
//!
//! [`CalendarEvent`] is what the grid displays; the `*Record`/`NewEvent`
//! types mirror the portal API's wire shape (`_id`, `type`, `startDate`)
//! so the client and server speak the same JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::PortalError;

/// Id prefix for events staged locally before the server assigns an identity.
pub const TEMP_ID_PREFIX: &str = "temp-";

/// Id prefix for fixture events loaded when no backend is reachable.
pub const SEED_ID_PREFIX: &str = "seed-";

/// True for identities that only exist in local state and must never be
/// sent to the network (pending creates and seed fixtures).
pub fn is_local_id(id: &str) -> bool {
    id.starts_with(TEMP_ID_PREFIX) || id.starts_with(SEED_ID_PREFIX)
}

/// Event category, used for grid badges and list filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Shoot,
    Post,
    Meeting,
    Deadline,
    Reminder,
    Other,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Shoot,
        EventType::Post,
        EventType::Meeting,
        EventType::Deadline,
        EventType::Reminder,
        EventType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Shoot => "shoot",
            EventType::Post => "post",
            EventType::Meeting => "meeting",
            EventType::Deadline => "deadline",
            EventType::Reminder => "reminder",
            EventType::Other => "other",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventType {
    type Err = PortalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        EventType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == lower)
            .ok_or_else(|| {
                PortalError::Validation(format!(
                    "Unknown event type '{}'. Expected one of: shoot, post, meeting, deadline, reminder, other",
                    s
                ))
            })
    }
}

/// A calendar event as displayed in a day cell.
///
/// Identity is immutable once server-assigned; only `temp-` events ever
/// change id (when the create reconciles).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub id: String,
    pub title: String,
    pub kind: EventType,
    /// "HH:MM", or "" for events without a time of day.
    pub time: String,
}

/// Caller-supplied fields for a new event.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub title: String,
    pub kind: EventType,
    pub time: String,
}

/// An event record as returned by the portal API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: EventType,
    #[serde(default)]
    pub time: String,
    #[serde(rename = "startDate")]
    pub start: DateTime<Utc>,
}

impl From<&EventRecord> for CalendarEvent {
    fn from(record: &EventRecord) -> Self {
        CalendarEvent {
            id: record.id.clone(),
            title: record.title.clone(),
            kind: record.kind,
            time: record.time.clone(),
        }
    }
}

/// Payload for creating an event on the portal API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEvent {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: EventType,
    pub time: String,
    #[serde(rename = "startDate")]
    pub start: DateTime<Utc>,
}

/// Sparse change set for updating an event.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<EventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(rename = "startDate", skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
}
