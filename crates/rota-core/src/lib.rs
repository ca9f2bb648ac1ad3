//! # rota-core
//!
//! Deterministic on-call rotation rendering: expand a fixed-interval,
//! round-robin rotation into concrete schedule entries for a time window,
//! then compose manual overrides on top.
//!
//! All instants are UTC. Every interval is half-open (`[start, end)`), so an
//! entry ending at an instant and another starting at the same instant are
//! adjacent, not overlapping. The rendered output is sorted, gap-free over
//! the window, and minimal: no two adjacent entries share a user.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use rota_core::{render_schedule, Rotation, Window};
//!
//! let rotation = Rotation {
//!     users: vec!["alice".into(), "bob".into()],
//!     handover_start_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
//!     handover_interval_days: 7,
//! };
//! let window = Window {
//!     from: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
//!     until: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
//! };
//!
//! let entries = render_schedule(&rotation, &[], &window).unwrap();
//! assert_eq!(entries.len(), 2);
//! assert_eq!(entries[0].user, "alice");
//! assert_eq!(entries[1].user, "bob");
//! ```
//!
//! ## Modules
//!
//! - [`rotation`] — base schedule generation (round-robin period expansion)
//! - [`compose`] — override splitting, precedence, and coalescing
//! - [`types`] — wire-facing data model (`Rotation`, `Override`, `Entry`, `Window`)
//! - [`time`] — ISO-8601 UTC timestamp parsing and rendering
//! - [`error`] — error types

pub mod compose;
pub mod error;
pub mod rotation;
pub mod time;
pub mod types;

pub use compose::{apply_overrides, render_schedule};
pub use error::RotaError;
pub use rotation::generate_base_schedule;
pub use time::{format_utc, parse_utc};
pub use types::{Entry, Override, Rotation, Window};
