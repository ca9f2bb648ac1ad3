//! Override composition -- splits base entries at override boundaries,
//! substitutes the override's user over each intersection, and coalesces
//! the result into the minimal entry sequence.
//!
//! Precedence between overlapping overrides is positional: each override in
//! the input list is applied in turn to the evolving segment set, so a later
//! list entry overwrites anything earlier (base or override) wherever the
//! two intersect. Callers control precedence purely via list order.

use crate::error::Result;
use crate::rotation::generate_base_schedule;
use crate::types::{Entry, Override, Rotation, Window};

/// Apply a list of overrides to an ordered base schedule.
///
/// Never fails on well-formed input: overrides that miss every entry are
/// no-ops, as are degenerate overrides with `start_at >= end_at`. The
/// returned sequence covers the same span as `base`, sorted and with
/// adjacent same-user entries merged, so no two neighbors share a user.
pub fn apply_overrides(base: Vec<Entry>, overrides: &[Override]) -> Vec<Entry> {
    let mut pieces = Vec::with_capacity(base.len());

    for entry in base {
        let mut working = vec![entry];
        for ov in overrides {
            if ov.start_at >= ov.end_at {
                continue;
            }
            working = working
                .into_iter()
                .flat_map(|seg| split_at_override(seg, ov))
                .collect();
        }
        pieces.extend(working);
    }

    // Stable sort: base entries are disjoint, so ties cannot occur on
    // well-formed input, but stability keeps the result deterministic
    // regardless.
    pieces.sort_by_key(|e| e.start_at);
    coalesce(pieces)
}

/// Render the full schedule for a window: base rotation plus overrides.
///
/// # Errors
/// Propagates `InvalidRotation` / `InvalidWindow` from the generator; the
/// override pass itself cannot fail.
pub fn render_schedule(
    rotation: &Rotation,
    overrides: &[Override],
    window: &Window,
) -> Result<Vec<Entry>> {
    let base = generate_base_schedule(rotation, window)?;
    Ok(apply_overrides(base, overrides))
}

/// Split one segment against one override.
///
/// Half-open semantics: no overlap when `ov.end_at <= seg.start_at` or
/// `ov.start_at >= seg.end_at`. An intersecting override yields up to three
/// pieces (before / overridden middle / after), fewer when it covers one or
/// both edges.
fn split_at_override(seg: Entry, ov: &Override) -> Vec<Entry> {
    if ov.end_at <= seg.start_at || ov.start_at >= seg.end_at {
        return vec![seg];
    }

    let mut out = Vec::with_capacity(3);
    if ov.start_at > seg.start_at {
        out.push(Entry {
            user: seg.user.clone(),
            start_at: seg.start_at,
            end_at: ov.start_at,
        });
    }
    out.push(Entry {
        user: ov.user.clone(),
        start_at: seg.start_at.max(ov.start_at),
        end_at: seg.end_at.min(ov.end_at),
    });
    if ov.end_at < seg.end_at {
        out.push(Entry {
            user: seg.user,
            start_at: ov.end_at,
            end_at: seg.end_at,
        });
    }
    out
}

/// Merge adjacent same-user entries in a sorted sequence.
///
/// Merging requires true adjacency (`prev.end_at == next.start_at`), not
/// mere user equality, so coverage gaps are never papered over.
fn coalesce(entries: Vec<Entry>) -> Vec<Entry> {
    let mut merged: Vec<Entry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(last) = merged.last_mut() {
            if last.user == entry.user && last.end_at == entry.start_at {
                last.end_at = entry.end_at;
                continue;
            }
        }
        merged.push(entry);
    }
    merged
}
