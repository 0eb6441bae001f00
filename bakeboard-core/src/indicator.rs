//! Per-day indicator summaries for calendar cells.
//!
//! A calendar surface annotates each day with small markers instead of full
//! event lists: one type marker per event for the first two events, plus an
//! overflow marker when the day holds more than two. That 2+overflow rule
//! is part of the engine's contract, not a renderer choice.

use chrono::NaiveDate;
use std::collections::BTreeSet;

use crate::day_index::DayIndex;
use crate::event::EventKind;

/// Maximum number of individual type markers shown for one day.
pub const MAX_DAY_MARKERS: usize = 2;

/// Compact per-day signal for calendar-cell rendering.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DayIndicator {
    /// Total events on the day under the active filter
    pub count: usize,
    /// Kinds of the first `MAX_DAY_MARKERS` events, in supplied order.
    /// May contain the same kind twice.
    pub markers: Vec<EventKind>,
    /// Set when the day holds more events than `markers` depicts
    pub overflow: bool,
    /// Every kind occurring on the day, deduplicated
    pub kinds_present: BTreeSet<EventKind>,
}

impl DayIndicator {
    /// Summarize `day` from the index. A day with no events yields the
    /// default summary (count 0, no markers, no overflow).
    pub fn summarize(index: &DayIndex, day: NaiveDate) -> DayIndicator {
        let events = index.events_on(day);

        DayIndicator {
            count: events.len(),
            markers: events.iter().take(MAX_DAY_MARKERS).map(|e| e.kind).collect(),
            overflow: events.len() > MAX_DAY_MARKERS,
            kinds_present: events.iter().map(|e| e.kind).collect(),
        }
    }

    /// Whether the day needs any annotation at all
    pub fn has_events(&self) -> bool {
        self.count > 0
    }
}
