use anyhow::Result;
use dialoguer::{Input, Select};
use owo_colors::OwoColorize;

use dashify_core::day_key::DayKey;
use dashify_core::event::{EventDraft, EventType, is_local_id};
use dashify_core::planner::Planner;

use crate::client::ApiClient;

pub async fn run(
    client: ApiClient,
    day: String,
    title: Option<String>,
    kind: Option<EventType>,
    time: Option<String>,
) -> Result<()> {
    let key: DayKey = day.parse()?;
    let interactive = title.is_none();

    // --- Title ---
    let title = match title {
        Some(t) => t,
        None => Input::<String>::new()
            .with_prompt("  Title")
            .interact_text()?,
    };

    // --- Type ---
    let kind = match kind {
        Some(k) => k,
        None if interactive => prompt_kind()?,
        None => EventType::default(),
    };

    // --- Time ---
    let time = match time {
        Some(t) => t,
        None if interactive => Input::new()
            .with_prompt("  Time? (HH:MM, skip for all-day)")
            .default(String::new())
            .show_default(false)
            .interact_text()?,
        None => String::new(),
    };

    let draft = EventDraft { title, kind, time };
    let summary = draft.title.clone();

    let mut planner = Planner::with_anchor(client, key.date());
    let id = planner.add_event(key, draft).await?;

    if interactive {
        println!();
    }
    if is_local_id(&id) {
        println!("{}", format!("  Created locally: {}", summary).yellow());
        println!(
            "{}",
            "  The portal API was unreachable; the event was not persisted.".dimmed()
        );
    } else {
        println!("{}", format!("  Created: {}", summary).green());
    }

    Ok(())
}

fn prompt_kind() -> Result<EventType> {
    let items: Vec<&str> = EventType::ALL.iter().map(|k| k.as_str()).collect();
    let selection = Select::new()
        .with_prompt("  Type")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(EventType::ALL[selection])
}
