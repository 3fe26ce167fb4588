use anyhow::Result;
use owo_colors::OwoColorize;

use dashify_core::day_key::DayKey;
use dashify_core::event::{EventChanges, EventType};
use dashify_core::store::EventStore;

use crate::client::ApiClient;

pub async fn run(
    client: ApiClient,
    id: String,
    title: Option<String>,
    kind: Option<EventType>,
    time: Option<String>,
    day: Option<String>,
) -> Result<()> {
    if title.is_none() && kind.is_none() && time.is_none() && day.is_none() {
        anyhow::bail!("Nothing to update. Pass --title, --type, --time or --day.");
    }

    // Moving to another day recomputes the absolute start from the new day
    // and (new or cleared) time.
    let start = match &day {
        Some(day) => {
            let key: DayKey = day.parse()?;
            Some(key.and_time(time.as_deref().unwrap_or("")))
        }
        None => None,
    };

    let changes = EventChanges {
        title,
        kind,
        time,
        start,
    };

    let updated = client.update_event(&id, &changes).await?;
    println!("{}", format!("  Updated: {}", updated.title).green());

    Ok(())
}
