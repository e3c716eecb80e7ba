//! Conflict detection.
//!
//! One pairwise interval-overlap scan serves every detector; the
//! matching identity is injected as a [`MatchPolicy`]. Detection is
//! stateless and recomputes from the full entry list on every call —
//! no incremental diffing. The scan is quadratic, which is fine at
//! campus catalog sizes.
//!
//! # Overlap test
//!
//! Half-open intervals `[s1, e1)` and `[s2, e2)` overlap iff
//! `s1 < e2 && e1 > s2`; touching endpoints never conflict.

mod policy;

pub use policy::{MatchPolicy, SamePerson, SharedResources};

use crate::models::{chronological, ConflictRecord, ScheduleEntry};

/// Scans entries pairwise under the given policy.
///
/// A pair is classified only when its intervals overlap on the same
/// day. Each record orders its pair chronologically and the result is
/// sorted, so the same entry set always yields the same records
/// regardless of input order.
pub fn detect_with_policy(
    entries: &[ScheduleEntry],
    policy: &dyn MatchPolicy,
    detected_at_ms: i64,
) -> Vec<ConflictRecord> {
    let mut records = Vec::new();
    for i in 0..entries.len() {
        for j in (i + 1)..entries.len() {
            let (a, b) = (&entries[i], &entries[j]);
            if !a.overlaps(b) {
                continue;
            }
            if let Some(kind) = policy.classify(a, b) {
                records.push(ConflictRecord::new(a.clone(), b.clone(), kind, detected_at_ms));
            }
        }
    }
    records.sort_by(|x, y| {
        chronological(&x.first, &y.first).then(chronological(&x.second, &y.second))
    });
    records
}

/// Cross-entry conflicts: shared faculty or shared room.
pub fn detect_conflicts(entries: &[ScheduleEntry], detected_at_ms: i64) -> Vec<ConflictRecord> {
    detect_with_policy(entries, &SharedResources, detected_at_ms)
}

/// Self-overlaps within one person's own entry list.
///
/// This is the clash primitive behind [`Timetable`]'s derived clash
/// list: faculty and room identities are ignored, only time matters.
///
/// [`Timetable`]: crate::models::Timetable
pub fn detect_clashes(entries: &[ScheduleEntry], detected_at_ms: i64) -> Vec<ConflictRecord> {
    detect_with_policy(entries, &SamePerson, detected_at_ms)
}
