//! Error types for the bakeboard engine.

use thiserror::Error;

/// Errors from the strict string-parsing boundary.
///
/// The engine itself has no failure modes: unknown filter strings are
/// fail-open (`FilterSelection::parse_lossy`) and day lookups with no
/// events are fail-empty. These variants exist only so callers that want
/// strict validation (e.g. CLI arguments) can get a useful message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BakeboardError {
    #[error("Unknown event type: '{0}' (expected delivery or production)")]
    UnknownKind(String),

    #[error("Unknown event status: '{0}' (expected pending, in-progress, completed or cancelled)")]
    UnknownStatus(String),

    #[error("Unknown filter value: '{0}'")]
    UnknownFilter(String),
}

/// Result type alias for bakeboard operations.
pub type BakeboardResult<T> = Result<T, BakeboardError>;
