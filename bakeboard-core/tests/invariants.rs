//! Cross-module invariants of the filter → day-index pipeline, checked
//! over randomly generated event collections.

use chrono::{Local, TimeZone};
use proptest::prelude::*;

use bakeboard_core::{filter, DayIndex, DayIndicator, Event, EventKind, EventStatus, FilterSelection, MAX_DAY_MARKERS};

fn arb_kind() -> impl Strategy<Value = EventKind> {
    prop_oneof![Just(EventKind::Delivery), Just(EventKind::Production)]
}

fn arb_status() -> impl Strategy<Value = EventStatus> {
    prop_oneof![
        Just(EventStatus::Pending),
        Just(EventStatus::InProgress),
        Just(EventStatus::Completed),
        Just(EventStatus::Cancelled),
    ]
}

/// Random collections within one month, any time of day, unique ids.
fn arb_events() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((1u32..=28, 0u32..24, arb_kind(), arb_status()), 0..40).prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (day, hour, kind, status))| Event {
                id: i.to_string(),
                title: format!("Event {}", i),
                date: Local.with_ymd_and_hms(2024, 5, day, hour, 0, 0).unwrap(),
                kind,
                status,
                details: None,
            })
            .collect()
    })
}

fn all_selections() -> Vec<FilterSelection> {
    vec![
        FilterSelection::All,
        FilterSelection::Kind(EventKind::Delivery),
        FilterSelection::Kind(EventKind::Production),
        FilterSelection::Status(EventStatus::Pending),
        FilterSelection::Status(EventStatus::InProgress),
        FilterSelection::Status(EventStatus::Completed),
        FilterSelection::Status(EventStatus::Cancelled),
    ]
}

proptest! {
    #[test]
    fn prop_filter_membership_matches_predicate(events in arb_events()) {
        for selection in all_selections() {
            let filtered = filter(&events, selection);
            for event in &events {
                let kept = filtered.iter().any(|e| e.id == event.id);
                prop_assert_eq!(kept, selection.matches(event));
            }
        }
    }

    #[test]
    fn prop_index_partitions_filtered_set(events in arb_events()) {
        for selection in all_selections() {
            let filtered = filter(&events, selection);
            let index = DayIndex::build(&filtered);

            // Union of all buckets is exactly the filtered set, each event
            // once, under its own day key.
            let mut seen: Vec<String> = Vec::new();
            for day in index.days() {
                for event in index.events_on(day) {
                    prop_assert_eq!(event.day_key(), day);
                    prop_assert!(selection.matches(event));
                    seen.push(event.id.clone());
                }
            }
            seen.sort();
            let mut expected: Vec<String> = filtered.iter().map(|e| e.id.clone()).collect();
            expected.sort();
            prop_assert_eq!(seen, expected);
        }
    }

    #[test]
    fn prop_index_preserves_supplied_order_per_day(events in arb_events()) {
        let index = DayIndex::build(&events);
        for day in index.days() {
            let bucket_ids: Vec<&str> = index.events_on(day).iter().map(|e| e.id.as_str()).collect();
            let input_ids: Vec<&str> = events
                .iter()
                .filter(|e| e.day_key() == day)
                .map(|e| e.id.as_str())
                .collect();
            prop_assert_eq!(bucket_ids, input_ids);
        }
    }

    #[test]
    fn prop_build_twice_is_identical(events in arb_events()) {
        let first = DayIndex::build(&events);
        let second = DayIndex::build(&events);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_indicator_marker_cap_and_overflow(events in arb_events()) {
        let index = DayIndex::build(&events);
        for day in index.days() {
            let summary = DayIndicator::summarize(&index, day);
            prop_assert_eq!(summary.count, index.events_on(day).len());
            prop_assert_eq!(summary.markers.len(), summary.count.min(MAX_DAY_MARKERS));
            prop_assert_eq!(summary.overflow, summary.count > MAX_DAY_MARKERS);
        }
    }
}
