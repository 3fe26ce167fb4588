use std::time::Duration;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use indicatif::ProgressBar;
use owo_colors::OwoColorize;

use dashify_core::planner::{Planner, SyncMode};

use crate::client::ApiClient;
use crate::render;

pub async fn run(client: ApiClient, month: Option<String>) -> Result<()> {
    let anchor = match month {
        Some(s) => parse_month(&s)?,
        None => Local::now().date_naive(),
    };

    let mut planner = Planner::with_anchor(client, anchor);

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Fetching events...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    planner.refresh().await;
    spinner.finish_and_clear();

    println!(
        "{}",
        render::month_view(
            planner.anchor(),
            &planner.grid(),
            planner.events(),
            planner.today_key(),
        )
    );

    if planner.sync_mode() == SyncMode::Seeded {
        println!();
        println!(
            "{}",
            "Showing sample data — run `dashify auth` to connect your account.".dimmed()
        );
    }

    Ok(())
}

fn parse_month(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid month '{}'. Expected YYYY-MM", s))
}
