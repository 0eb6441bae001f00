mod config;
mod render;
mod store;

use anyhow::{Context, Result};
use bakeboard_core::{filter, Calendar, DayIndex, Event, EventKind, EventStatus, FilterSelection};
use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bakeboard-cli")]
#[command(about = "Terminal dashboard for bakery delivery and production scheduling")]
struct Cli {
    /// Events JSON file (overrides events_file from config)
    #[arg(long, global = true)]
    events: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the month calendar and the selected day's events
    Show {
        /// Day to select (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Month to render (YYYY-MM, defaults to the selected day's month)
        #[arg(short, long)]
        month: Option<String>,

        /// Filter: all, delivery, production, pending, in-progress, completed, cancelled
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// List events grouped by day
    List {
        /// Filter: all, delivery, production, pending, in-progress, completed, cancelled
        #[arg(short, long)]
        filter: Option<String>,
    },
    /// Create a new event
    New {
        /// Event title
        title: String,

        /// Event date (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(short, long)]
        date: String,

        /// Event type: delivery or production
        #[arg(short = 't', long = "type", default_value = "delivery")]
        kind: String,

        /// Initial status
        #[arg(short, long, default_value = "pending")]
        status: String,

        /// Free-text details
        #[arg(long)]
        details: Option<String>,
    },
    /// Show one event's details
    View {
        /// Event id
        id: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    let events_path = events_path(&cli, &cfg);

    match cli.command {
        Commands::Show {
            date,
            month,
            filter,
        } => cmd_show(&cfg, &events_path, date, month, filter),
        Commands::List { filter } => cmd_list(&cfg, &events_path, filter),
        Commands::New {
            title,
            date,
            kind,
            status,
            details,
        } => cmd_new(&events_path, title, date, kind, status, details),
        Commands::View { id } => cmd_view(&events_path, &id),
    }
}

fn cmd_show(
    cfg: &config::Config,
    path: &Path,
    date: Option<String>,
    month: Option<String>,
    filter_arg: Option<String>,
) -> Result<()> {
    let events = store::load_events(path)?;
    let selection = resolve_filter(filter_arg.as_deref(), cfg)?;
    let selected = match date {
        Some(s) => parse_day(&s)?,
        None => Local::now().date_naive(),
    };

    let mut calendar = Calendar::with_selected(events, selected);
    calendar.set_filter(selection);

    let (year, month_number) = match month {
        Some(s) => parse_month(&s)?,
        None => (selected.year(), selected.month()),
    };

    println!("{}", render::render_month(&calendar, year, month_number));
    println!("Filter: {}  (d = delivery, p = production, + = more events)", selection);
    println!();
    print!("{}", render::render_day_events(&calendar));

    Ok(())
}

fn cmd_list(cfg: &config::Config, path: &Path, filter_arg: Option<String>) -> Result<()> {
    let events = store::load_events(path)?;
    let selection = resolve_filter(filter_arg.as_deref(), cfg)?;

    let filtered = filter(&events, selection);
    let index = DayIndex::build(&filtered);

    if index.is_empty() {
        println!("No events match filter '{}'.", selection);
        return Ok(());
    }

    for day in index.days() {
        println!("\n{}", day.format("%A, %Y-%m-%d"));
        for event in index.events_on(day) {
            println!(
                "  {}  {}  [{}, {}]  (id: {})",
                event.date.format("%H:%M"),
                event.title,
                event.kind,
                event.status,
                event.id
            );
            if let Some(details) = &event.details {
                println!("         {}", details);
            }
        }
    }

    println!("\n{} event(s), filter: {}", index.len(), selection);

    Ok(())
}

fn cmd_new(
    path: &Path,
    title: String,
    date: String,
    kind: String,
    status: String,
    details: Option<String>,
) -> Result<()> {
    let kind: EventKind = kind.parse()?;
    let status: EventStatus = status.parse()?;
    let date = parse_cli_datetime(&date)?;

    let event = Event {
        id: format!("evt-{}", uuid::Uuid::new_v4()),
        title,
        date,
        kind,
        status,
        details,
    };

    // Append to what is stored on disk; the sample schedule shown for a
    // missing file is display-only and must not be persisted here.
    let mut events = store::load_stored(path)?;
    events.push(event.clone());
    store::save_events(path, &events)?;

    println!("Created {} on {}: {}", event.kind, event.date.format("%Y-%m-%d"), event.title);
    println!("  id: {}", event.id);

    Ok(())
}

fn cmd_view(path: &Path, id: &str) -> Result<()> {
    let events = store::load_events(path)?;

    let event = events
        .iter()
        .find(|e| e.id == id)
        .with_context(|| format!("Event not found: {}", id))?;

    print!("{}", render::render_event_detail(event));

    Ok(())
}

/// Resolve the active filter: an explicit flag is validated strictly,
/// the config default is fail-open (unknown value means "all").
fn resolve_filter(flag: Option<&str>, cfg: &config::Config) -> Result<FilterSelection> {
    match flag {
        Some(s) => Ok(s.parse()?),
        None => Ok(FilterSelection::parse_lossy(&cfg.default_filter)),
    }
}

fn events_path(cli: &Cli, cfg: &config::Config) -> PathBuf {
    match &cli.events {
        Some(path) => config::expand_path(path),
        None => config::expand_path(&cfg.events_file),
    }
}

/// Parse YYYY-MM-DD as a calendar day
fn parse_day(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

/// Parse YYYY-MM into (year, month)
fn parse_month(s: &str) -> Result<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .with_context(|| format!("Invalid month '{}'. Expected YYYY-MM", s))?;
    Ok((first.year(), first.month()))
}

/// Parse a CLI date as a local timestamp. A bare date lands at noon so the
/// day key is unambiguous on DST-transition days.
fn parse_cli_datetime(s: &str) -> Result<DateTime<Local>> {
    let naive = if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        date.and_hms_opt(12, 0, 0).unwrap()
    } else {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M").map_err(|_| {
            anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD or YYYY-MM-DDTHH:MM", s)
        })?
    };

    naive
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| anyhow::anyhow!("Date '{}' does not exist in the local timezone", s))
}
