//! Day index: groups a filtered event set by local calendar day.
//!
//! The index is a derived view, rebuilt from scratch whenever the filter or
//! the underlying collection changes. Collections are tens of events, so a
//! full rebuild is the simple and correct choice over incremental updates.

use chrono::NaiveDate;
use std::collections::HashMap;

use crate::event::Event;

/// Mapping from calendar day to the events occurring on that day,
/// in the order they were supplied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayIndex {
    buckets: HashMap<NaiveDate, Vec<Event>>,
}

impl DayIndex {
    /// Build an index over `events`, one pass, preserving relative order
    /// within each day. Empty input yields an empty index.
    pub fn build(events: &[Event]) -> DayIndex {
        let mut buckets: HashMap<NaiveDate, Vec<Event>> = HashMap::new();
        for event in events {
            buckets.entry(event.day_key()).or_default().push(event.clone());
        }
        DayIndex { buckets }
    }

    /// Events on `day`, or an empty slice — a day without events is a
    /// normal state, not a lookup failure.
    pub fn events_on(&self, day: NaiveDate) -> &[Event] {
        self.buckets.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Days that have at least one event, in ascending order.
    pub fn days(&self) -> Vec<NaiveDate> {
        let mut days: Vec<NaiveDate> = self.buckets.keys().copied().collect();
        days.sort();
        days
    }

    /// Total number of indexed events across all days.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{EventKind, EventStatus};
    use chrono::{Local, TimeZone};

    fn make_event(id: &str, kind: EventKind, day: u32, hour: u32) -> Event {
        Event {
            id: id.to_string(),
            title: format!("Event {}", id),
            date: Local.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap(),
            kind,
            status: EventStatus::Pending,
            details: None,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_empty_input_yields_empty_index() {
        let index = DayIndex::build(&[]);
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
        assert!(index.events_on(day(1)).is_empty());
    }

    #[test]
    fn test_groups_by_calendar_day() {
        let events = vec![
            make_event("1", EventKind::Delivery, 1, 9),
            make_event("2", EventKind::Production, 1, 15),
            make_event("3", EventKind::Delivery, 2, 9),
        ];
        let index = DayIndex::build(&events);

        let first: Vec<&str> = index.events_on(day(1)).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(first, ["1", "2"]);
        let second: Vec<&str> = index.events_on(day(2)).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(second, ["3"]);
        assert!(index.events_on(day(3)).is_empty());
    }

    #[test]
    fn test_time_of_day_collapses_to_one_bucket() {
        let events = vec![
            make_event("1", EventKind::Delivery, 10, 0),
            make_event("2", EventKind::Delivery, 10, 23),
        ];
        let index = DayIndex::build(&events);
        assert_eq!(index.events_on(day(10)).len(), 2);
        assert_eq!(index.days(), vec![day(10)]);
    }

    #[test]
    fn test_preserves_supplied_order_within_day() {
        let events = vec![
            make_event("z", EventKind::Production, 5, 20),
            make_event("a", EventKind::Delivery, 5, 8),
            make_event("m", EventKind::Delivery, 5, 12),
        ];
        let index = DayIndex::build(&events);
        let ids: Vec<&str> = index.events_on(day(5)).iter().map(|e| e.id.as_str()).collect();
        // Supplied order, not chronological order
        assert_eq!(ids, ["z", "a", "m"]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let events = vec![
            make_event("1", EventKind::Delivery, 1, 9),
            make_event("2", EventKind::Production, 2, 9),
            make_event("3", EventKind::Delivery, 2, 18),
        ];
        let first = DayIndex::build(&events);
        let second = DayIndex::build(&events);
        assert_eq!(first, second);
    }

    #[test]
    fn test_union_of_buckets_equals_input() {
        let events = vec![
            make_event("1", EventKind::Delivery, 1, 9),
            make_event("2", EventKind::Production, 1, 10),
            make_event("3", EventKind::Delivery, 7, 9),
            make_event("4", EventKind::Production, 28, 9),
        ];
        let index = DayIndex::build(&events);

        let mut collected: Vec<&str> = Vec::new();
        for d in index.days() {
            for event in index.events_on(d) {
                // No event may sit under a foreign day key
                assert_eq!(event.day_key(), d);
                collected.push(event.id.as_str());
            }
        }
        collected.sort();
        assert_eq!(collected, ["1", "2", "3", "4"]);
        assert_eq!(index.len(), events.len());
    }
}
