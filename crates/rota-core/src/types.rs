//! Wire-facing data model.
//!
//! Field names match the JSON documents the surrounding CLI consumes, so the
//! schedule and overrides files deserialize directly into these types. All
//! intervals are half-open: `[start_at, end_at)`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An on-call rotation definition: who rotates, from when, and how often.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    /// Participants in handover order. Order is significant: period `k` is
    /// assigned to `users[k % users.len()]`.
    pub users: Vec<String>,
    /// Start of the very first handover period (may be far before any
    /// queried window).
    #[serde(with = "crate::time::timestamp")]
    pub handover_start_at: DateTime<Utc>,
    /// Fixed length of each handover period, in days. Must be positive.
    pub handover_interval_days: i64,
}

/// A manual substitution: `user` takes over `[start_at, end_at)` regardless
/// of what the rotation assigns there.
///
/// Overrides may overlap each other and the query window arbitrarily. When
/// two overrides overlap, the one later in the input list wins over the
/// earlier one wherever they intersect. An override with
/// `start_at >= end_at` is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Override {
    pub user: String,
    #[serde(with = "crate::time::timestamp")]
    pub start_at: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    pub end_at: DateTime<Utc>,
}

/// One rendered schedule entry: `user` is on call over `[start_at, end_at)`.
///
/// Also the working unit inside the compositor. Any sequence produced by
/// this crate is sorted by `start_at` and non-overlapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub user: String,
    #[serde(with = "crate::time::timestamp")]
    pub start_at: DateTime<Utc>,
    #[serde(with = "crate::time::timestamp")]
    pub end_at: DateTime<Utc>,
}

/// The half-open query window `[from, until)` a schedule is rendered for.
///
/// Built from CLI flags rather than a JSON document; `from < until` is
/// enforced by [`crate::rotation::generate_base_schedule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub from: DateTime<Utc>,
    pub until: DateTime<Utc>,
}
