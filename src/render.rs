//! Terminal rendering for the month grid and event lists.
//!
//! All event counting goes through the engine's indicator summaries; the
//! renderer never walks a day's event list to decide what to draw.

use bakeboard_core::{Calendar, Event, EventKind};
use chrono::{Datelike, NaiveDate};

/// Grid cell width: "[dd]" or " dd " plus up to three marker chars
const CELL_WIDTH: usize = 7;

/// Marker shown when a day holds more events than its type markers depict
const OVERFLOW_MARKER: char = '+';

fn marker_char(kind: EventKind) -> char {
    match kind {
        EventKind::Delivery => 'd',
        EventKind::Production => 'p',
    }
}

/// One grid cell: day number (selected day bracketed) plus indicator marks.
fn cell(calendar: &Calendar, day: NaiveDate) -> String {
    let summary = calendar.day_indicator(day);

    let mut marks = String::new();
    for kind in &summary.markers {
        marks.push(marker_char(*kind));
    }
    if summary.overflow {
        marks.push(OVERFLOW_MARKER);
    }

    let number = if calendar.selected_day() == Some(day) {
        format!("[{:>2}]", day.day())
    } else {
        format!(" {:>2} ", day.day())
    };

    format!("{}{:<3}", number, marks)
}

/// Render one month as a Sunday-first grid with indicator marks.
pub fn render_month(calendar: &Calendar, year: i32, month: u32) -> String {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, 1, 1).unwrap());

    let mut out = String::new();
    let title = first.format("%B %Y").to_string();
    out.push_str(&format!("{:^width$}\n", title, width = CELL_WIDTH * 7));
    for label in ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"] {
        out.push_str(&format!("{:^width$}", label, width = CELL_WIDTH));
    }
    out.push('\n');

    let mut col = first.weekday().num_days_from_sunday() as usize;
    out.push_str(&" ".repeat(col * CELL_WIDTH));

    let mut day = first;
    while day.month() == month {
        out.push_str(&cell(calendar, day));
        col += 1;
        if col == 7 {
            out.push('\n');
            col = 0;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    if col != 0 {
        out.push('\n');
    }

    out
}

/// Render the selected day's event list (the panel under the grid).
pub fn render_day_events(calendar: &Calendar) -> String {
    let mut out = String::new();

    let day = match calendar.selected_day() {
        Some(day) => day,
        None => {
            out.push_str("No date selected.\n");
            return out;
        }
    };

    out.push_str(&format!("Events for {}:\n", day.format("%Y-%m-%d")));

    let events = calendar.events_for_selected_day();
    if events.is_empty() {
        out.push_str("  No events for this date.\n");
        return out;
    }

    for event in events {
        out.push_str(&format!(
            "  {}  {}  [{}, {}]\n",
            event.date.format("%H:%M"),
            event.title,
            event.kind,
            event.status
        ));
        if let Some(details) = &event.details {
            out.push_str(&format!("         {}\n", details));
        }
    }

    out
}

/// Render one event's full detail (the `view` command).
pub fn render_event_detail(event: &Event) -> String {
    let mut out = String::new();
    out.push_str(&format!("Id:      {}\n", event.id));
    out.push_str(&format!("Title:   {}\n", event.title));
    out.push_str(&format!("Date:    {}\n", event.date.format("%Y-%m-%d %H:%M")));
    out.push_str(&format!("Type:    {}\n", event.kind));
    out.push_str(&format!("Status:  {}\n", event.status));
    if let Some(details) = &event.details {
        out.push_str(&format!("Details: {}\n", details));
    }
    out
}
