mod client;
mod commands;
mod config;
mod render;
mod session;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dashify_core::event::EventType;
use tracing_subscriber::EnvFilter;

use crate::client::ApiClient;
use crate::config::PortalConfig;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "dashify")]
#[command(about = "View and manage your Dashify calendar from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid
    View {
        /// Month to display (YYYY-MM, defaults to the current month)
        month: Option<String>,
    },
    /// List events grouped by day
    Agenda {
        /// First day to include (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        from: Option<String>,

        /// Number of days to cover
        #[arg(long, default_value_t = 14)]
        days: u32,
    },
    /// Add an event to a day
    Add {
        /// Day to add the event to (YYYY-MM-DD)
        day: String,

        /// Event title (prompted for when omitted)
        title: Option<String>,

        /// Event type (shoot, post, meeting, deadline, reminder, other)
        #[arg(short = 't', long = "type")]
        kind: Option<EventType>,

        /// Time of day (HH:MM)
        #[arg(long)]
        time: Option<String>,
    },
    /// Remove an event from a day
    Rm {
        /// Day the event lives on (YYYY-MM-DD)
        day: String,

        /// Event id
        id: String,
    },
    /// Update an existing event
    Edit {
        /// Event id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New event type
        #[arg(short = 't', long = "type")]
        kind: Option<EventType>,

        /// New time of day (HH:MM)
        #[arg(long)]
        time: Option<String>,

        /// Move the event to another day (YYYY-MM-DD)
        #[arg(long)]
        day: Option<String>,
    },
    /// Store your portal API token
    Auth {
        /// Token to store (prompted for when omitted)
        token: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .without_time()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::View { month } => commands::view::run(make_client()?, month).await,
        Commands::Agenda { from, days } => commands::agenda::run(make_client()?, from, days).await,
        Commands::Add {
            day,
            title,
            kind,
            time,
        } => commands::add::run(make_client()?, day, title, kind, time).await,
        Commands::Rm { day, id } => commands::rm::run(make_client()?, day, id).await,
        Commands::Edit {
            id,
            title,
            kind,
            time,
            day,
        } => commands::edit::run(make_client()?, id, title, kind, time, day).await,
        Commands::Auth { token } => commands::auth::run(token),
    }
}

fn make_client() -> Result<ApiClient> {
    let cfg = PortalConfig::load()?;
    let session = Session::from_token(cfg.token);
    Ok(ApiClient::new(cfg.api_url, session))
}
