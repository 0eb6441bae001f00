//! JSON event store for the CLI.
//!
//! The engine never touches a file; this module is the scheduling
//! collaborator's side of the boundary. Events live in a single JSON array,
//! and file order is the supplied order the day index preserves.

use anyhow::{Context, Result};
use bakeboard_core::{Event, EventKind, EventStatus};
use chrono::{Duration, Local};
use std::path::Path;

/// Load events for display. A missing file falls back to the sample
/// schedule instead of erroring, so the dashboard always has something
/// to show.
pub fn load_events(path: &Path) -> Result<Vec<Event>> {
    if !path.exists() {
        return Ok(sample_events());
    }
    load_stored(path)
}

/// Load exactly what is on disk; a missing file is an empty schedule.
/// Used by mutating commands so the sample data is never persisted
/// as a side effect.
pub fn load_stored(path: &Path) -> Result<Vec<Event>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read events file at {}", path.display()))?;

    let events: Vec<Event> = serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse events file at {}", path.display()))?;

    Ok(events)
}

/// Save events, creating parent directories as needed.
pub fn save_events(path: &Path, events: &[Event]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory at {}", parent.display()))?;
    }

    let contents = serde_json::to_string_pretty(events).context("Failed to serialize events")?;

    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write events file at {}", path.display()))?;

    Ok(())
}

/// The demo schedule the dashboard ships with, dated relative to today.
pub fn sample_events() -> Vec<Event> {
    let now = Local::now();

    vec![
        Event {
            id: "1".to_string(),
            title: "Bolo de Aniversário - Maria".to_string(),
            date: now + Duration::days(2),
            kind: EventKind::Delivery,
            status: EventStatus::Pending,
            details: Some("Entrega às 14h".to_string()),
        },
        Event {
            id: "2".to_string(),
            title: "Cupcakes para Festa".to_string(),
            date: now + Duration::days(1),
            kind: EventKind::Production,
            status: EventStatus::InProgress,
            details: Some("24 unidades".to_string()),
        },
        Event {
            id: "3".to_string(),
            title: "Torta de Morango - João".to_string(),
            date: now,
            kind: EventKind::Delivery,
            status: EventStatus::Completed,
            details: Some("Entregue às 10h".to_string()),
        },
        Event {
            id: "4".to_string(),
            title: "Docinhos para Casamento".to_string(),
            date: now + Duration::days(5),
            kind: EventKind::Production,
            status: EventStatus::Pending,
            details: Some("200 unidades".to_string()),
        },
    ]
}
