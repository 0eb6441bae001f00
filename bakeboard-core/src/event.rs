//! Presentation-neutral event types.
//!
//! These types represent scheduled bakery events (deliveries and production
//! runs) in a rendering-agnostic way. The calendar engine works exclusively
//! with them; callers own the collection and supply it as input.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BakeboardError;

/// A scheduled bakery event (delivery or production run)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// Only the local calendar-day component matters for grouping;
    /// time-of-day is kept for display but ignored by the day index.
    pub date: DateTime<Local>,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub status: EventStatus,
    /// Free-text annotation, unused by filtering/grouping
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Event {
    /// The day-index key for this event: its local calendar day,
    /// with time-of-day dropped.
    pub fn day_key(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

/// What kind of work the event represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Delivery,
    Production,
}

impl EventKind {
    /// The wire/CLI literal for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Delivery => "delivery",
            EventKind::Production => "production",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = BakeboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "delivery" => Ok(EventKind::Delivery),
            "production" => Ok(EventKind::Production),
            _ => Err(BakeboardError::UnknownKind(s.to_string())),
        }
    }
}

/// Workflow status of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl EventStatus {
    /// The wire/CLI literal for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::InProgress => "in-progress",
            EventStatus::Completed => "completed",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventStatus {
    type Err = BakeboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(EventStatus::Pending),
            "in-progress" => Ok(EventStatus::InProgress),
            "completed" => Ok(EventStatus::Completed),
            "cancelled" => Ok(EventStatus::Cancelled),
            _ => Err(BakeboardError::UnknownStatus(s.to_string())),
        }
    }
}
