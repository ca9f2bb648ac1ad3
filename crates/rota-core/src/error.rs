//! Error types for schedule rendering.

use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotaError {
    /// Empty participant list or non-positive handover interval.
    #[error("Invalid rotation: {0}")]
    InvalidRotation(String),

    /// The query window is empty or inverted.
    #[error("Invalid window: from {from} is not before until {until}")]
    InvalidWindow {
        from: DateTime<Utc>,
        until: DateTime<Utc>,
    },

    /// A timestamp string that does not parse as ISO-8601 UTC.
    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),
}

pub type Result<T> = std::result::Result<T, RotaError>;
