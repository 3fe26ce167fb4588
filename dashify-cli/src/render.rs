//! Terminal rendering for the month grid.
//!
//! Extension-style helpers that turn planner state into colored terminal
//! output using owo_colors.

use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

use dashify_core::day_key::DayKey;
use dashify_core::day_map::EventsByDay;
use dashify_core::event::{CalendarEvent, EventType};
use dashify_core::grid::GridCell;

/// Render the full month view: title, weekday header, the 6-week grid, and
/// a per-day listing of the displayed month's events.
pub fn month_view(
    anchor: NaiveDate,
    grid: &[GridCell],
    events: &EventsByDay,
    today: DayKey,
) -> String {
    let mut lines = Vec::new();

    lines.push(month_title(anchor).bold().to_string());
    lines.push(weekday_header().dimmed().to_string());

    for week in grid.chunks(7) {
        let row: String = week
            .iter()
            .map(|cell| render_cell(cell, events, today))
            .collect();
        lines.push(row);
    }

    let listing = month_listing(grid, events);
    if !listing.is_empty() {
        lines.push(String::new());
        lines.extend(listing);
    }

    lines.join("\n")
}

/// e.g. "February 2026"
pub fn month_title(anchor: NaiveDate) -> String {
    anchor.format("%B %Y").to_string()
}

fn weekday_header() -> String {
    ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"]
        .iter()
        .map(|day| format!("{:>3} ", day))
        .collect()
}

/// One 4-column cell: right-aligned day number plus an event marker.
fn render_cell(cell: &GridCell, events: &EventsByDay, today: DayKey) -> String {
    let marker = if events.get(cell.key).is_empty() { ' ' } else { '*' };
    let text = format!("{:>3}{}", cell.date.day(), marker);

    if cell.key == today {
        text.reversed().to_string()
    } else if !cell.in_month {
        text.dimmed().to_string()
    } else {
        text
    }
}

/// Day-by-day listing of the displayed month's events.
fn month_listing(grid: &[GridCell], events: &EventsByDay) -> Vec<String> {
    let mut lines = Vec::new();

    for cell in grid.iter().filter(|c| c.in_month) {
        let day_events = events.get(cell.key);
        if day_events.is_empty() {
            continue;
        }

        lines.push(cell.date.format("%a %-d").to_string().bold().to_string());
        for event in day_events {
            lines.push(render_event_line(event));
        }
    }

    lines
}

pub fn render_event_line(event: &CalendarEvent) -> String {
    let tag = format!("[{}]", event.kind);
    format!(
        "  {:>7}  {}  {}",
        render_time(&event.time),
        event.title,
        colorize_kind(event.kind, &tag)
    )
}

/// Format the time column (e.g. "10:00" or "all-day").
pub fn render_time(time: &str) -> String {
    if time.is_empty() {
        "all-day".to_string()
    } else {
        time.to_string()
    }
}

/// Colorize text according to the event type.
fn colorize_kind(kind: EventType, text: &str) -> String {
    match kind {
        EventType::Shoot => text.magenta().to_string(),
        EventType::Post => text.blue().to_string(),
        EventType::Meeting => text.green().to_string(),
        EventType::Deadline => text.red().to_string(),
        EventType::Reminder => text.yellow().to_string(),
        EventType::Other => text.dimmed().to_string(),
    }
}
