use anyhow::Result;
use chrono::{Local, NaiveDate};
use owo_colors::OwoColorize;

use dashify_core::date_range::DateRange;
use dashify_core::day_key::DayKey;
use dashify_core::day_map::EventsByDay;
use dashify_core::store::EventStore;

use crate::client::ApiClient;
use crate::render;

pub async fn run(client: ApiClient, from: Option<String>, days: u32) -> Result<()> {
    let start = match from {
        Some(s) => s.parse::<DayKey>()?.date(),
        None => Local::now().date_naive(),
    };

    let range = DateRange::covering_days(start, days);
    let records = client.fetch_events(&range).await?;
    let events = EventsByDay::from_records(&records);

    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    let mut first = true;
    for (key, day_events) in events.days() {
        if !first {
            println!();
        }
        first = false;

        println!("{}", format_day_label(key.date()).bold());
        for event in day_events {
            println!("{}", render::render_event_line(event));
        }
    }

    Ok(())
}

/// Format a date as a human-readable label (e.g. "Today", "Tomorrow", "Wed Feb 25")
fn format_day_label(date: NaiveDate) -> String {
    let today = Local::now().date_naive();

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}
