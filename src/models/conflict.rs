//! Conflict record model.
//!
//! A conflict is a pair of entries occupying overlapping time under a
//! matching identity: same faculty, same room, or two entries on one
//! person's own timetable. Records order their pair chronologically so
//! detector output does not depend on input order.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{chronological, ScheduleEntry};

/// Matching identity under which two entries collided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConflictKind {
    /// Same faculty member teaching two overlapping sessions.
    Faculty,
    /// Same room hosting two overlapping sessions.
    Room,
    /// Two overlapping entries on one person's own timetable.
    SelfOverlap,
}

/// A detected pair of overlapping entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConflictRecord {
    /// Chronologically earlier entry.
    pub first: ScheduleEntry,
    /// Chronologically later entry.
    pub second: ScheduleEntry,
    /// Matching identity that collided.
    pub kind: ConflictKind,
    /// Caller-supplied detection timestamp (ms since the Unix epoch).
    pub detected_at_ms: i64,
}

impl ConflictRecord {
    /// Creates a record, ordering the pair chronologically.
    ///
    /// The ordering key is day, start, end, then course/cohort IDs, so
    /// the same two entries always produce the same record regardless
    /// of argument order.
    pub fn new(
        a: ScheduleEntry,
        b: ScheduleEntry,
        kind: ConflictKind,
        detected_at_ms: i64,
    ) -> Self {
        let (first, second) = if chronological(&b, &a) == Ordering::Less {
            (b, a)
        } else {
            (a, b)
        };
        Self {
            first,
            second,
            kind,
            detected_at_ms,
        }
    }

    /// The identity both entries share: the faculty or room ID, or the
    /// owning cohort for a self-overlap.
    pub fn shared_id(&self) -> &str {
        match self.kind {
            ConflictKind::Faculty => &self.first.faculty_id,
            ConflictKind::Room => &self.first.room_id,
            ConflictKind::SelfOverlap => &self.first.cohort_id,
        }
    }

    /// Human-readable description of the collision.
    pub fn message(&self) -> String {
        let day = self.first.day;
        match self.kind {
            ConflictKind::Faculty => format!(
                "Faculty '{}' double-booked on {}: '{}' {} overlaps '{}' {}",
                self.first.faculty_id,
                day,
                self.first.course_id,
                self.first.window(),
                self.second.course_id,
                self.second.window(),
            ),
            ConflictKind::Room => format!(
                "Room '{}' double-booked on {}: '{}' {} overlaps '{}' {}",
                self.first.room_id,
                day,
                self.first.course_id,
                self.first.window(),
                self.second.course_id,
                self.second.window(),
            ),
            ConflictKind::SelfOverlap => format!(
                "Overlapping entries on {}: '{}' {} and '{}' {}",
                day,
                self.first.course_id,
                self.first.window(),
                self.second.course_id,
                self.second.window(),
            ),
        }
    }

    /// Operator guidance for a conflict that could not be resolved.
    pub fn remediation(&self) -> &'static str {
        match self.kind {
            ConflictKind::Faculty => {
                "Reduce this faculty member's concurrent load, add teaching staff, \
                 or extend operating hours"
            }
            ConflictKind::Room => "Add rooms or extend operating hours",
            ConflictKind::SelfOverlap => "Remove or reschedule one of the overlapping entries",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Weekday;

    fn make_entry(course: &str, start_min: i32, end_min: i32) -> ScheduleEntry {
        ScheduleEntry::new(course, "cs-year1", Weekday::Monday, start_min, end_min)
            .with_faculty("F1")
            .with_room("R201")
    }

    #[test]
    fn test_pair_normalization() {
        let early = make_entry("CS101", 540, 600);
        let late = make_entry("MA201", 570, 630);

        let forward =
            ConflictRecord::new(early.clone(), late.clone(), ConflictKind::Faculty, 0);
        let reversed = ConflictRecord::new(late, early, ConflictKind::Faculty, 0);

        assert_eq!(forward, reversed);
        assert_eq!(forward.first.course_id, "CS101");
        assert_eq!(forward.second.course_id, "MA201");
    }

    #[test]
    fn test_shared_id() {
        let a = make_entry("CS101", 540, 600);
        let b = make_entry("MA201", 570, 630);

        let faculty = ConflictRecord::new(a.clone(), b.clone(), ConflictKind::Faculty, 0);
        assert_eq!(faculty.shared_id(), "F1");

        let room = ConflictRecord::new(a.clone(), b.clone(), ConflictKind::Room, 0);
        assert_eq!(room.shared_id(), "R201");

        let own = ConflictRecord::new(a, b, ConflictKind::SelfOverlap, 0);
        assert_eq!(own.shared_id(), "cs-year1");
    }

    #[test]
    fn test_message_names_parties() {
        let c = ConflictRecord::new(
            make_entry("CS101", 540, 600),
            make_entry("MA201", 570, 630),
            ConflictKind::Faculty,
            0,
        );
        let msg = c.message();
        assert!(msg.contains("F1"));
        assert!(msg.contains("CS101"));
        assert!(msg.contains("MA201"));
        assert!(msg.contains("09:00-10:00"));
        assert!(msg.contains("Mon"));
    }

    #[test]
    fn test_remediation_per_kind() {
        let a = make_entry("CS101", 540, 600);
        let b = make_entry("MA201", 570, 630);

        let faculty = ConflictRecord::new(a.clone(), b.clone(), ConflictKind::Faculty, 0);
        assert!(faculty.remediation().contains("teaching staff"));

        let room = ConflictRecord::new(a.clone(), b.clone(), ConflictKind::Room, 0);
        assert!(room.remediation().contains("Add rooms"));

        let own = ConflictRecord::new(a, b, ConflictKind::SelfOverlap, 0);
        assert!(own.remediation().contains("reschedule"));
    }

    #[test]
    fn test_detected_at_carried() {
        let c = ConflictRecord::new(
            make_entry("CS101", 540, 600),
            make_entry("MA201", 570, 630),
            ConflictKind::Room,
            1_700_000_000_000,
        );
        assert_eq!(c.detected_at_ms, 1_700_000_000_000);
    }
}
