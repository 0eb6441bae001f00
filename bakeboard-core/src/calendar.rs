//! Calendar facade: filter state, day selection, and the derived day index.
//!
//! This is the surface the presentation layer talks to. It owns the event
//! collection handed in by the scheduling collaborator, the active filter,
//! and the selected day, and it rebuilds the day index whenever the filter
//! or the collection changes.

use chrono::{Local, NaiveDate};

use crate::day_index::DayIndex;
use crate::event::Event;
use crate::filter::{self, FilterSelection};
use crate::indicator::DayIndicator;

/// Calendar state for one dashboard view.
#[derive(Debug, Clone)]
pub struct Calendar {
    events: Vec<Event>,
    filter: FilterSelection,
    /// `None` is the deselected state; only an external reset reaches it
    selected: Option<NaiveDate>,
    /// Derived from `events` + `filter`, never edited in place
    index: DayIndex,
}

impl Calendar {
    /// New calendar over `events` with no filter and today selected.
    pub fn new(events: Vec<Event>) -> Calendar {
        Calendar::with_selected(events, Local::now().date_naive())
    }

    /// New calendar with an explicit initial selection.
    pub fn with_selected(events: Vec<Event>, day: NaiveDate) -> Calendar {
        let mut calendar = Calendar {
            events,
            filter: FilterSelection::All,
            selected: Some(day),
            index: DayIndex::default(),
        };
        calendar.rebuild();
        calendar
    }

    /// Replace the event collection (e.g. the scheduling collaborator
    /// delivered fresh data) and rebuild the index.
    pub fn set_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.rebuild();
    }

    /// Change the active filter and rebuild the index.
    pub fn set_filter(&mut self, selection: FilterSelection) {
        self.filter = selection;
        self.rebuild();
    }

    pub fn filter(&self) -> FilterSelection {
        self.filter
    }

    /// Select a day. Reselecting the current day is a no-op transition;
    /// the event list is always recomputed from the current index.
    pub fn select_day(&mut self, day: NaiveDate) {
        self.selected = Some(day);
    }

    /// External reset back to the no-selection state.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected_day(&self) -> Option<NaiveDate> {
        self.selected
    }

    /// Events on the selected day under the active filter.
    /// Empty when nothing is selected or the day has no events.
    pub fn events_for_selected_day(&self) -> &[Event] {
        match self.selected {
            Some(day) => self.index.events_on(day),
            None => &[],
        }
    }

    /// Events on an arbitrary day under the active filter.
    pub fn events_on(&self, day: NaiveDate) -> &[Event] {
        self.index.events_on(day)
    }

    /// Indicator summary for a calendar cell.
    pub fn day_indicator(&self, day: NaiveDate) -> DayIndicator {
        DayIndicator::summarize(&self.index, day)
    }

    /// Days with at least one event under the active filter, ascending.
    pub fn event_days(&self) -> Vec<NaiveDate> {
        self.index.days()
    }

    fn rebuild(&mut self) {
        self.index = DayIndex::build(&filter::filter(&self.events, self.filter));
    }
}
