//! Conflict matching policies.
//!
//! A policy decides whether two time-overlapping entries actually
//! collide, and under which identity. The pairwise scan itself is
//! identity-agnostic; swapping the policy switches it between
//! cross-entry resource conflicts and a person's own self-overlaps.

use std::fmt::Debug;

use crate::models::{ConflictKind, ScheduleEntry};

/// Decides whether two overlapping entries collide.
///
/// The scan only calls `classify` for pairs whose intervals already
/// overlap on the same day. Implementations must be pure: the same
/// pair always classifies the same way.
pub trait MatchPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "shared-resources").
    fn name(&self) -> &'static str;

    /// Classifies an overlapping pair, or `None` when this policy does
    /// not consider it a conflict.
    fn classify(&self, a: &ScheduleEntry, b: &ScheduleEntry) -> Option<ConflictKind>;
}

/// Cross-entry mode: entries sharing a faculty member or a room
/// collide.
///
/// Faculty takes precedence when both identities are shared, so each
/// pair yields at most one record.
#[derive(Debug, Clone, Copy)]
pub struct SharedResources;

impl MatchPolicy for SharedResources {
    fn name(&self) -> &'static str {
        "shared-resources"
    }

    fn classify(&self, a: &ScheduleEntry, b: &ScheduleEntry) -> Option<ConflictKind> {
        // Unassigned identities never match.
        if !a.faculty_id.is_empty() && a.faculty_id == b.faculty_id {
            Some(ConflictKind::Faculty)
        } else if !a.room_id.is_empty() && a.room_id == b.room_id {
            Some(ConflictKind::Room)
        } else {
            None
        }
    }
}

/// Self-overlap mode: on one person's own timetable, any two
/// overlapping entries collide regardless of faculty or room — a
/// person cannot sit in two sessions at once.
#[derive(Debug, Clone, Copy)]
pub struct SamePerson;

impl MatchPolicy for SamePerson {
    fn name(&self) -> &'static str {
        "same-person"
    }

    fn classify(&self, _a: &ScheduleEntry, _b: &ScheduleEntry) -> Option<ConflictKind> {
        Some(ConflictKind::SelfOverlap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn make_entry(faculty: &str, room: &str) -> ScheduleEntry {
        ScheduleEntry::new("CS101", "cs-year1", Weekday::Monday, 540, 600)
            .with_faculty(faculty)
            .with_room(room)
    }

    #[test]
    fn test_shared_faculty_takes_precedence() {
        let a = make_entry("F1", "R1");
        let b = make_entry("F1", "R1");
        assert_eq!(
            SharedResources.classify(&a, &b),
            Some(ConflictKind::Faculty)
        );
    }

    #[test]
    fn test_shared_room_only() {
        let a = make_entry("F1", "R1");
        let b = make_entry("F2", "R1");
        assert_eq!(SharedResources.classify(&a, &b), Some(ConflictKind::Room));
    }

    #[test]
    fn test_disjoint_resources() {
        let a = make_entry("F1", "R1");
        let b = make_entry("F2", "R2");
        assert_eq!(SharedResources.classify(&a, &b), None);
    }

    #[test]
    fn test_unassigned_identities_never_match() {
        let a = make_entry("", "");
        let b = make_entry("", "");
        assert_eq!(SharedResources.classify(&a, &b), None);
    }

    #[test]
    fn test_same_person_flags_everything() {
        let a = make_entry("F1", "R1");
        let b = make_entry("F2", "R2");
        assert_eq!(
            SamePerson.classify(&a, &b),
            Some(ConflictKind::SelfOverlap)
        );
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(SharedResources.name(), "shared-resources");
        assert_eq!(SamePerson.name(), "same-person");
    }
}
