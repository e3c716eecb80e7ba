//! Conflict resolution by relocation.
//!
//! Takes the allocated entries plus the conflicts detected among them
//! and tries to move the chronologically later entry of each conflict
//! to a slot that is still free. Identities are preserved: a move
//! changes day and time only, never the faculty, room, or cohort bound
//! at placement. Conflicts with no viable target are surfaced as
//! [`Unresolved`] with remediation advice; nothing is relaxed or
//! retried automatically.
//!
//! # Algorithm
//!
//! Iterative repair. Each round rebuilds the consumed-slot ledger from
//! the *current* entries minus the one being moved, picks the first
//! conflict not already given up, and scans the entry's cohort grid
//! for a run that is free on all three ledger axes and interval-free
//! against every entry sharing the cohort, faculty, or room. After a
//! successful move the outstanding conflicts are re-detected from
//! scratch under the resolver's match policy, so a fix can neither
//! miss a conflict it solved as a side effect nor silently reintroduce
//! one resolved earlier. Every accepted move strictly reduces the
//! outstanding count, so the loop terminates.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::detection::{self, MatchPolicy, SharedResources};
use crate::grid::TimeGrid;
use crate::models::{hhmm, ConflictRecord, ScheduleEntry, Weekday};

use super::allocator::SlotLedger;

/// One successful move made by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Relocation {
    /// Course whose entry moved.
    pub course_id: String,
    /// Cohort owning the entry.
    pub cohort_id: String,
    /// Day the entry sat on before the move.
    pub from_day: Weekday,
    /// Start before the move (minutes from midnight).
    pub from_start_min: i32,
    /// Day after the move.
    pub to_day: Weekday,
    /// Start after the move (minutes from midnight).
    pub to_start_min: i32,
}

impl Relocation {
    /// Human-readable description for operator display.
    pub fn message(&self) -> String {
        format!(
            "Moved '{}' (cohort '{}') from {} {} to {} {}",
            self.course_id,
            self.cohort_id,
            self.from_day,
            hhmm(self.from_start_min),
            self.to_day,
            hhmm(self.to_start_min),
        )
    }
}

/// A conflict that survived resolution.
///
/// Diagnostic output only: the conflicting entries stay where they
/// are, and the remediation text tells an operator what to change
/// before rerunning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unresolved {
    /// The conflict as last detected.
    pub conflict: ConflictRecord,
    /// Operator guidance for eliminating it by hand.
    pub remediation: String,
}

impl Unresolved {
    /// Wraps a surviving conflict with its per-kind remediation text.
    pub fn new(conflict: ConflictRecord) -> Self {
        let remediation = conflict.remediation().to_string();
        Self {
            conflict,
            remediation,
        }
    }

    /// Human-readable description for operator display.
    pub fn message(&self) -> String {
        format!("{} ({})", self.conflict.message(), self.remediation)
    }
}

/// Output of one resolution pass.
#[derive(Debug, Clone, Default)]
pub struct ResolutionResult {
    /// Entries after relocation, in their original order.
    pub entries: Vec<ScheduleEntry>,
    /// Moves made, in the order they happened.
    pub relocations: Vec<Relocation>,
    /// Conflicts no move could eliminate.
    pub unresolved: Vec<Unresolved>,
}

/// Relocates conflicting entries to still-free slots.
///
/// Outstanding conflicts are re-derived under the resolver's match
/// policy after every move, so the policy must be the one that
/// produced the seed worklist. The default re-detects shared faculty
/// and rooms; a resolver fed clash records takes [`SamePerson`]
/// through [`with_policy`](Self::with_policy).
///
/// [`SamePerson`]: crate::detection::SamePerson
#[derive(Debug, Clone)]
pub struct ConflictResolver {
    policy: Arc<dyn MatchPolicy>,
}

impl ConflictResolver {
    /// Creates a resolver matching on shared faculty and rooms.
    pub fn new() -> Self {
        Self {
            policy: Arc::new(SharedResources),
        }
    }

    /// Sets the policy used to re-detect outstanding conflicts after
    /// each move.
    pub fn with_policy<P: MatchPolicy + 'static>(mut self, policy: P) -> Self {
        self.policy = Arc::new(policy);
        self
    }

    /// Repairs the entry set, one conflict at a time in detection
    /// order.
    ///
    /// `conflicts` seeds the worklist; after every successful move the
    /// outstanding set is re-detected from the updated entries under
    /// the resolver's policy with `detected_at_ms`. Conflicts whose
    /// later entry has no viable target are reported as [`Unresolved`]
    /// and their entries left untouched.
    pub fn resolve(
        &self,
        entries: Vec<ScheduleEntry>,
        conflicts: &[ConflictRecord],
        grids: &HashMap<String, TimeGrid>,
        detected_at_ms: i64,
    ) -> ResolutionResult {
        let mut result = ResolutionResult {
            entries,
            ..Default::default()
        };
        let mut outstanding = conflicts.to_vec();
        let mut given_up: Vec<ConflictRecord> = Vec::new();

        loop {
            let next = outstanding
                .iter()
                .find(|c| !given_up.iter().any(|g| same_conflict(g, c)))
                .cloned();
            let Some(conflict) = next else {
                break;
            };

            match relocate(&mut result.entries, &conflict, grids) {
                Some(relocation) => {
                    result.relocations.push(relocation);
                    // One move can fix several conflicts at once, so
                    // the outstanding set is re-derived rather than
                    // just dropping the one processed.
                    outstanding = detection::detect_with_policy(
                        &result.entries,
                        self.policy.as_ref(),
                        detected_at_ms,
                    );
                }
                None => given_up.push(conflict),
            }
        }

        result.unresolved = outstanding.into_iter().map(Unresolved::new).collect();
        result
    }
}

impl Default for ConflictResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether two records describe the same entry pair colliding the same
/// way, regardless of when they were detected.
fn same_conflict(a: &ConflictRecord, b: &ConflictRecord) -> bool {
    a.kind == b.kind && a.first == b.first && a.second == b.second
}

/// Whether placing `candidate` could collide with `other`: they belong
/// to the same cohort or share an assigned faculty or room.
fn shares_identity(candidate: &ScheduleEntry, other: &ScheduleEntry) -> bool {
    candidate.cohort_id == other.cohort_id
        || (!candidate.faculty_id.is_empty() && candidate.faculty_id == other.faculty_id)
        || (!candidate.room_id.is_empty() && candidate.room_id == other.room_id)
}

/// Moves the conflict's later entry to the first viable run on its
/// cohort grid, or returns `None` when no run qualifies.
///
/// A run qualifies when every covered slot is free on all three ledger
/// axes and the resulting interval overlaps no other entry sharing the
/// cohort, faculty, or room. The ledger is rebuilt on every call from
/// every entry except the mover, so earlier moves stay visible while
/// the mover's own footprint never blocks its candidate runs.
fn relocate(
    entries: &mut [ScheduleEntry],
    conflict: &ConflictRecord,
    grids: &HashMap<String, TimeGrid>,
) -> Option<Relocation> {
    let idx = entries.iter().position(|e| *e == conflict.second)?;
    let entry = entries[idx].clone();
    let grid = grids.get(&entry.cohort_id)?;
    // Rebuilt without the mover so its own slots count as free.
    let others: Vec<ScheduleEntry> = entries
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != idx)
        .map(|(_, e)| e.clone())
        .collect();
    let ledger = SlotLedger::rebuild(&others, grids);

    let slot = grid.slot_duration_min.max(1);
    let duration_slots = (entry.duration_min() + slot - 1) / slot;

    for run in grid.contiguous_runs(duration_slots) {
        let ledger_free = run.starts.iter().all(|&s| {
            ledger.is_free(&entry.cohort_id, &entry.faculty_id, &entry.room_id, run.day, s)
        });
        if !ledger_free {
            continue;
        }

        let mut candidate = entry.clone();
        candidate.day = run.day;
        candidate.start_min = run.start_min;
        candidate.end_min = run.start_min + entry.duration_min();

        // The ledger only sees this grid's lattice; entries placed on
        // another cohort's lattice can still overlap in time, so every
        // shared-identity entry gets an interval check as well.
        let collides = entries.iter().enumerate().any(|(i, other)| {
            i != idx && shares_identity(&candidate, other) && candidate.overlaps(other)
        });
        if collides {
            continue;
        }

        entries[idx] = candidate;
        return Some(Relocation {
            course_id: entry.course_id.clone(),
            cohort_id: entry.cohort_id.clone(),
            from_day: entry.day,
            from_start_min: entry.start_min,
            to_day: run.day,
            to_start_min: run.start_min,
        });
    }
    None
}
