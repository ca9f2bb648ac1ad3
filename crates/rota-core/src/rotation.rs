//! Base schedule generation -- expands a rotation into the entries that tile
//! a query window before any overrides are applied.
//!
//! Periods are fixed-length and tile the timeline from the anchor onward, so
//! the first relevant period is found by integer division on whole seconds
//! rather than by walking forward from the anchor one period at a time.

use chrono::Duration;

use crate::error::{Result, RotaError};
use crate::types::{Entry, Rotation, Window};

const SECS_PER_DAY: i64 = 86_400;

/// Generate the unmodified rotation's coverage of `[window.from, window.until)`.
///
/// Entries are chronological and contiguous by construction. Each period is
/// clipped to the window; periods that fall entirely outside it are not
/// emitted. A window that ends on or before the anchor yields no entries,
/// and a window straddling the anchor starts its coverage at the anchor.
///
/// Adjacent entries may share a user when the rotation has a single
/// participant; coalescing is left to [`crate::compose::apply_overrides`].
///
/// # Errors
/// Returns `RotaError::InvalidRotation` when `users` is empty or the
/// handover interval is not positive, and `RotaError::InvalidWindow` when
/// `from >= until`.
pub fn generate_base_schedule(rotation: &Rotation, window: &Window) -> Result<Vec<Entry>> {
    if rotation.users.is_empty() {
        return Err(RotaError::InvalidRotation(
            "participant list is empty".to_string(),
        ));
    }
    if rotation.handover_interval_days <= 0 {
        return Err(RotaError::InvalidRotation(format!(
            "handover interval must be positive, got {} days",
            rotation.handover_interval_days
        )));
    }
    if window.from >= window.until {
        return Err(RotaError::InvalidWindow {
            from: window.from,
            until: window.until,
        });
    }

    let anchor = rotation.handover_start_at;
    let period_secs = rotation.handover_interval_days * SECS_PER_DAY;

    // Jump straight to the period containing `from`. Clamped to period 0
    // when the window starts at or before the anchor; nothing precedes the
    // first handover.
    let mut index = if window.from <= anchor {
        0
    } else {
        (window.from - anchor).num_seconds().div_euclid(period_secs)
    };

    let mut entries = Vec::new();
    loop {
        let period_start = anchor + Duration::seconds(index * period_secs);
        if period_start >= window.until {
            break;
        }
        let period_end = period_start + Duration::seconds(period_secs);

        let entry_start = period_start.max(window.from);
        let entry_end = period_end.min(window.until);
        if entry_start < entry_end {
            let user = &rotation.users[index as usize % rotation.users.len()];
            entries.push(Entry {
                user: user.clone(),
                start_at: entry_start,
                end_at: entry_end,
            });
        }

        index += 1;
    }

    Ok(entries)
}
