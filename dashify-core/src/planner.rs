//! Month planner: navigation, remote sync, and optimistic event CRUD.

use chrono::{Datelike, Local, NaiveDate};
use tracing::warn;

use crate::date_range::DateRange;
use crate::day_key::DayKey;
use crate::day_map::EventsByDay;
use crate::error::{PortalError, PortalResult};
use crate::event::{CalendarEvent, EventDraft, NewEvent, TEMP_ID_PREFIX, is_local_id};
use crate::grid::{GridCell, first_of_month, month_grid, next_month, prev_month};
use crate::seed::seed_month;
use crate::store::EventStore;

/// Where the current event map came from.
///
/// `Synced` is sticky on the failure side: once the server has answered,
/// a later failed fetch keeps the last good data instead of seeding over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncMode {
    /// No fetch has completed yet.
    Unsynced,
    /// Fetches have only ever failed; the map holds fixture data.
    Seeded,
    /// The map mirrors the server's answer for the displayed window.
    Synced,
}

/// Calendar controller for the view layer.
///
/// Local state is authoritative for the session: mutations apply before the
/// network round-trip starts, and persistence failures degrade to local-only
/// state rather than rolling back.
pub struct Planner<S> {
    store: S,
    anchor: NaiveDate,
    events: EventsByDay,
    sync: SyncMode,
    loading: bool,
    next_temp: u64,
}

impl<S: EventStore> Planner<S> {
    /// Planner anchored to the current real-world month.
    pub fn new(store: S) -> Self {
        Self::with_anchor(store, Local::now().date_naive())
    }

    /// Planner anchored to the month containing `date`.
    pub fn with_anchor(store: S, date: NaiveDate) -> Self {
        Planner {
            store,
            anchor: first_of_month(date),
            events: EventsByDay::new(),
            sync: SyncMode::Unsynced,
            loading: false,
            next_temp: 0,
        }
    }

    /// First day of the displayed month.
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// The 42-cell grid for the displayed month.
    pub fn grid(&self) -> Vec<GridCell> {
        month_grid(self.anchor)
    }

    pub fn events(&self) -> &EventsByDay {
        &self.events
    }

    /// Key of the current local day, for highlighting.
    pub fn today_key(&self) -> DayKey {
        DayKey::today()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn sync_mode(&self) -> SyncMode {
        self.sync
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn go_to_prev(&mut self) {
        self.anchor = prev_month(self.anchor);
    }

    pub fn go_to_next(&mut self) {
        self.anchor = next_month(self.anchor);
    }

    pub fn go_to_today(&mut self) {
        self.anchor = first_of_month(Local::now().date_naive());
    }

    /// Fetch events for the displayed month (plus the grid's adjacent-month
    /// cells) and replace the map wholesale.
    ///
    /// Never fails: an unreachable store falls back to fixture data until
    /// the first successful sync, and keeps the last synced data after it.
    pub async fn refresh(&mut self) {
        self.loading = true;
        let range = DateRange::for_month(self.anchor);

        match self.store.fetch_events(&range).await {
            Ok(records) => {
                self.events = EventsByDay::from_records(&records);
                self.sync = SyncMode::Synced;
            }
            Err(err) if self.sync == SyncMode::Synced => {
                warn!("event fetch failed, keeping last synced data: {err}");
            }
            Err(err) => {
                // Re-seed wholesale each time: repeated failures must not
                // accumulate fixture events.
                let today = Local::now().date_naive();
                self.events = seed_month(today.year(), today.month());
                self.sync = SyncMode::Seeded;
                warn!("calendar API unavailable, using sample data: {err}");
            }
        }

        self.loading = false;
    }

    /// Validate a draft and apply it to local state under a temporary id.
    ///
    /// This is the synchronous half of [`add_event`](Planner::add_event):
    /// the caller observes the new event before any network round-trip.
    pub fn stage_event(&mut self, key: DayKey, draft: &EventDraft) -> PortalResult<String> {
        if draft.title.trim().is_empty() {
            return Err(PortalError::Validation("title is required".into()));
        }

        self.next_temp += 1;
        let temp_id = format!("{}{}", TEMP_ID_PREFIX, self.next_temp);
        self.events.insert(
            key,
            CalendarEvent {
                id: temp_id.clone(),
                title: draft.title.clone(),
                kind: draft.kind,
                time: draft.time.clone(),
            },
        );
        Ok(temp_id)
    }

    /// Add an event to a day: optimistic insert, then persist.
    ///
    /// Returns the event's final id — the server's on success, the
    /// temporary one when persistence fails and the event stays local-only.
    /// Only validation rejects the operation.
    pub async fn add_event(&mut self, key: DayKey, draft: EventDraft) -> PortalResult<String> {
        let temp_id = self.stage_event(key, &draft)?;

        let new = NewEvent {
            start: key.and_time(&draft.time),
            title: draft.title,
            kind: draft.kind,
            time: draft.time,
        };

        match self.store.create_event(&new).await {
            Ok(record) => {
                let id = record.id.clone();
                self.events.reconcile(key, &temp_id, CalendarEvent::from(&record));
                Ok(id)
            }
            Err(err) => {
                warn!("failed to save event, keeping it locally: {err}");
                Ok(temp_id)
            }
        }
    }

    /// Remove an event from a day.
    ///
    /// Local removal is immediate and unconditional; the delete request is
    /// fire-and-forget and skipped entirely for temp/seed ids.
    pub async fn remove_event(&mut self, key: DayKey, id: &str) {
        self.events.remove(key, id);

        if is_local_id(id) {
            return;
        }

        if let Err(err) = self.store.delete_event(id).await {
            warn!("failed to delete event {id}: {err}");
        }
    }
}
