//! Timetable model.
//!
//! One owner's schedule for a term: an ordered entry list plus a
//! derived clash list. Entries are private — every mutation re-sorts
//! and recomputes clashes before returning, so add/remove plus the
//! recompute form one logical read-modify-write and a caller can never
//! observe a stale clash list.

use serde::{Deserialize, Serialize};

use crate::detection;

use super::{chronological, ConflictRecord, ScheduleEntry, Weekday};

/// A cohort's or person's schedule for one term.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Timetable {
    /// Cohort or person this timetable belongs to.
    pub owner_id: String,
    /// Academic term label (e.g., "2026-fall").
    pub term: String,
    entries: Vec<ScheduleEntry>,
    clashes: Vec<ConflictRecord>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new(owner_id: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            owner_id: owner_id.into(),
            term: term.into(),
            entries: Vec::new(),
            clashes: Vec::new(),
        }
    }

    /// Builds a timetable from existing entries, sorting them and
    /// computing clashes immediately.
    pub fn from_entries(
        owner_id: impl Into<String>,
        term: impl Into<String>,
        entries: Vec<ScheduleEntry>,
        detected_at_ms: i64,
    ) -> Self {
        let mut timetable = Self::new(owner_id, term);
        timetable.entries = entries;
        timetable.entries.sort_by(chronological);
        timetable.recompute_clashes(detected_at_ms);
        timetable
    }

    /// Adds an entry and recomputes clashes before returning.
    ///
    /// Returns the clashes the new entry participates in; empty means
    /// a clean add.
    pub fn add_entry(
        &mut self,
        entry: ScheduleEntry,
        detected_at_ms: i64,
    ) -> Vec<ConflictRecord> {
        let added = entry.clone();
        self.entries.push(entry);
        self.entries.sort_by(chronological);
        self.recompute_clashes(detected_at_ms);
        self.clashes
            .iter()
            .filter(|c| c.first == added || c.second == added)
            .cloned()
            .collect()
    }

    /// Removes the first entry matching course, day, and start.
    ///
    /// Returns the removed entry, or `None` if nothing matched.
    /// Clashes are recomputed before returning.
    pub fn remove_entry(
        &mut self,
        course_id: &str,
        day: Weekday,
        start_min: i32,
        detected_at_ms: i64,
    ) -> Option<ScheduleEntry> {
        let idx = self.entries.iter().position(|e| {
            e.course_id == course_id && e.day == day && e.start_min == start_min
        })?;
        let removed = self.entries.remove(idx);
        self.recompute_clashes(detected_at_ms);
        Some(removed)
    }

    /// Recomputes the clash list from the current entries.
    ///
    /// Self-overlap detection: any two entries whose times overlap
    /// clash, regardless of faculty or room.
    pub fn recompute_clashes(&mut self, detected_at_ms: i64) {
        self.clashes = detection::detect_clashes(&self.entries, detected_at_ms);
    }

    /// Entries in chronological order.
    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    /// Current clash list, refreshed on every mutation.
    pub fn clashes(&self) -> &[ConflictRecord] {
        &self.clashes
    }

    /// Whether the timetable has no clashes.
    pub fn is_clash_free(&self) -> bool {
        self.clashes.is_empty()
    }

    /// Entries on a given day, in start order.
    pub fn entries_on(&self, day: Weekday) -> Vec<&ScheduleEntry> {
        self.entries.iter().filter(|e| e.day == day).collect()
    }

    /// Number of entries.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Total scheduled minutes across all entries.
    pub fn scheduled_min(&self) -> i32 {
        self.entries.iter().map(|e| e.duration_min()).sum()
    }
}
