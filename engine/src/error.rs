//! Error handling for the crop planning engine
//!
//! All errors are raised synchronously from the call that detects them.
//! There is no retry policy and no partial result: a request either returns
//! a complete, internally consistent value or fails outright.

use chrono::NaiveDate;
use thiserror::Error;

/// Planner error types
#[derive(Error, Debug)]
pub enum PlannerError {
    /// Crop is not in the succession-suitable allow-list
    #[error("Crop '{0}' is not suitable for succession planting")]
    UnsupportedCrop(String),

    /// Unknown crop or zone id in a catalog lookup
    #[error("{0} not found")]
    NotFound(String),

    /// The earliest safe planting date falls after the latest one.
    /// Surfaced as-is; the window is never silently reordered.
    #[error("Degenerate planting window: earliest {earliest} is after latest {latest}")]
    DegenerateWindow {
        earliest: NaiveDate,
        latest: NaiveDate,
    },

    /// The safe window cannot hold even one succession interval
    #[error("Season too short: a {window_days}-day window cannot hold a {interval_days}-day succession interval")]
    SeasonTooShort {
        window_days: i64,
        interval_days: i64,
    },

    /// Caller supplied a value the planner cannot work with
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for planner operations
pub type PlannerResult<T> = Result<T, PlannerError>;
