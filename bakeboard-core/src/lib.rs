//! Core types and calendar engine for the bakeboard dashboard.
//!
//! This crate provides the logic behind the dashboard's calendar view:
//! - `Event` and its kind/status enumerations
//! - the filter engine (`FilterSelection`, `filter`)
//! - the day index (`DayIndex`) grouping events by local calendar day
//! - per-day indicator summaries (`DayIndicator`)
//! - the `Calendar` facade tying filter state and day selection together
//!
//! Everything here is pure and synchronous; the presentation layer owns all
//! I/O and hands the event collection in as a parameter.

pub mod calendar;
pub mod day_index;
pub mod error;
pub mod event;
pub mod filter;
pub mod indicator;

pub use calendar::Calendar;
pub use day_index::DayIndex;
pub use error::{BakeboardError, BakeboardResult};
pub use event::{Event, EventKind, EventStatus};
pub use filter::{filter, FilterSelection};
pub use indicator::{DayIndicator, MAX_DAY_MARKERS};
