//! Filter engine: narrows the event collection to one selected category.
//!
//! A selection is a single value from `all` ∪ kinds ∪ statuses. Filtering
//! is a pure pass over the caller's collection; nothing is mutated and the
//! relative order of surviving events is preserved.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BakeboardError;
use crate::event::{Event, EventKind, EventStatus};

/// The single active filter category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterSelection {
    /// No narrowing: every event passes
    #[default]
    All,
    Kind(EventKind),
    Status(EventStatus),
}

impl FilterSelection {
    /// Whether an event passes this filter.
    pub fn matches(&self, event: &Event) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Kind(kind) => event.kind == *kind,
            FilterSelection::Status(status) => event.status == *status,
        }
    }

    /// Fail-open parse: an unrecognized value means "all".
    ///
    /// Filtering is cosmetic, not access control, so a stale or mistyped
    /// selection string coming from UI state must never hide everything.
    pub fn parse_lossy(s: &str) -> FilterSelection {
        s.parse().unwrap_or(FilterSelection::All)
    }

    /// The wire/CLI literal for this selection
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterSelection::All => "all",
            FilterSelection::Kind(kind) => kind.as_str(),
            FilterSelection::Status(status) => status.as_str(),
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterSelection {
    type Err = BakeboardError;

    /// Strict parse for callers that validate input (CLI arguments).
    ///
    /// Kind literals are checked before status literals. The enumerations
    /// are disjoint today, so this is only a documented tie-break in case
    /// a future variant overlaps.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(FilterSelection::All);
        }
        if let Ok(kind) = s.parse::<EventKind>() {
            return Ok(FilterSelection::Kind(kind));
        }
        if let Ok(status) = s.parse::<EventStatus>() {
            return Ok(FilterSelection::Status(status));
        }
        Err(BakeboardError::UnknownFilter(s.to_string()))
    }
}

/// Reduce `events` to the subset matching `selection`, preserving order.
///
/// `All` returns a clone of the input unchanged. The input is never mutated.
pub fn filter(events: &[Event], selection: FilterSelection) -> Vec<Event> {
    events
        .iter()
        .filter(|event| selection.matches(event))
        .cloned()
        .collect()
}
