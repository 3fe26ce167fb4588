use anyhow::Result;
use owo_colors::OwoColorize;

use dashify_core::day_key::DayKey;
use dashify_core::planner::Planner;

use crate::client::ApiClient;

pub async fn run(client: ApiClient, day: String, id: String) -> Result<()> {
    let key: DayKey = day.parse()?;

    let mut planner = Planner::with_anchor(client, key.date());
    planner.refresh().await;

    let known = planner.events().get(key).iter().any(|e| e.id == id);
    planner.remove_event(key, &id).await;

    if known {
        println!("{}", format!("  Removed: {}", id).green());
    } else {
        println!("{}", format!("  Removed (was not listed on {}): {}", key, id).yellow());
    }

    Ok(())
}
