//! Persistence collaborator interface.

use async_trait::async_trait;

use crate::date_range::DateRange;
use crate::error::PortalResult;
use crate::event::{EventChanges, EventRecord, NewEvent};

/// Remote event persistence (the portal's calendar API).
///
/// Implementations handle their own authentication; callers only see
/// records. `update_event` is part of the service surface even though the
/// planner itself never calls it.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Events whose start falls inside `range`, ascending by start.
    async fn fetch_events(&self, range: &DateRange) -> PortalResult<Vec<EventRecord>>;

    async fn create_event(&self, event: &NewEvent) -> PortalResult<EventRecord>;

    async fn update_event(&self, id: &str, changes: &EventChanges) -> PortalResult<EventRecord>;

    async fn delete_event(&self, id: &str) -> PortalResult<()>;
}
