//! Schedule entry model.
//!
//! An entry is one placed session: a day, a minute interval, and the
//! course/faculty/room/cohort identities bound to it. Entries are the
//! atomic unit every detector and the resolver operate on. The
//! resolver may change an entry's day and times; its identities never
//! change after placement.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::{DayWindow, SessionType, Weekday};

/// One placed session on a timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Day the session sits on.
    pub day: Weekday,
    /// Session start (minutes from midnight, inclusive).
    pub start_min: i32,
    /// Session end (minutes from midnight, exclusive).
    pub end_min: i32,
    /// Course taught.
    pub course_id: String,
    /// Faculty teaching. Empty until assigned.
    pub faculty_id: String,
    /// Room hosting. Empty until assigned.
    pub room_id: String,
    /// Cohort attending.
    pub cohort_id: String,
    /// Session kind.
    pub session_type: SessionType,
}

impl ScheduleEntry {
    /// Creates an entry with unassigned faculty and room.
    pub fn new(
        course_id: impl Into<String>,
        cohort_id: impl Into<String>,
        day: Weekday,
        start_min: i32,
        end_min: i32,
    ) -> Self {
        Self {
            day,
            start_min,
            end_min,
            course_id: course_id.into(),
            faculty_id: String::new(),
            room_id: String::new(),
            cohort_id: cohort_id.into(),
            session_type: SessionType::Lecture,
        }
    }

    /// Sets the teaching faculty.
    pub fn with_faculty(mut self, faculty_id: impl Into<String>) -> Self {
        self.faculty_id = faculty_id.into();
        self
    }

    /// Sets the hosting room.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.room_id = room_id.into();
        self
    }

    /// Sets the session kind.
    pub fn with_session_type(mut self, session_type: SessionType) -> Self {
        self.session_type = session_type;
        self
    }

    /// Session length (minutes).
    #[inline]
    pub fn duration_min(&self) -> i32 {
        self.end_min - self.start_min
    }

    /// The entry's interval as a window.
    pub fn window(&self) -> DayWindow {
        DayWindow::new(self.start_min, self.end_min)
    }

    /// Whether two entries occupy overlapping time on the same day.
    ///
    /// Half-open intervals: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day
            && self.start_min < other.end_min
            && other.start_min < self.end_min
    }
}

/// Chronological ordering for entries: day, start, end, then course and
/// cohort IDs as stable tie-breakers.
pub fn chronological(a: &ScheduleEntry, b: &ScheduleEntry) -> Ordering {
    a.day
        .cmp(&b.day)
        .then(a.start_min.cmp(&b.start_min))
        .then(a.end_min.cmp(&b.end_min))
        .then(a.course_id.cmp(&b.course_id))
        .then(a.cohort_id.cmp(&b.cohort_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_entry(course: &str, day: Weekday, start_min: i32, end_min: i32) -> ScheduleEntry {
        ScheduleEntry::new(course, "cs-year1", day, start_min, end_min)
            .with_faculty("F1")
            .with_room("R201")
    }

    #[test]
    fn test_entry_builder() {
        let e = make_entry("CS101", Weekday::Monday, 540, 600)
            .with_session_type(SessionType::Tutorial);
        assert_eq!(e.course_id, "CS101");
        assert_eq!(e.cohort_id, "cs-year1");
        assert_eq!(e.faculty_id, "F1");
        assert_eq!(e.room_id, "R201");
        assert_eq!(e.duration_min(), 60);
        assert_eq!(e.session_type, SessionType::Tutorial);
        assert_eq!(e.window(), DayWindow::new(540, 600));
    }

    #[test]
    fn test_entry_overlap_same_day() {
        let a = make_entry("CS101", Weekday::Monday, 540, 600);
        let b = make_entry("MA201", Weekday::Monday, 570, 630);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_entry_no_overlap_touching() {
        let a = make_entry("CS101", Weekday::Monday, 540, 600);
        let b = make_entry("MA201", Weekday::Monday, 600, 660);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_entry_no_overlap_different_day() {
        let a = make_entry("CS101", Weekday::Monday, 540, 600);
        let b = make_entry("MA201", Weekday::Tuesday, 540, 600);
        assert!(!a.overlaps(&b));
    }

    #[test]
    fn test_chronological_ordering() {
        let mon = make_entry("CS101", Weekday::Monday, 600, 660);
        let tue = make_entry("CS101", Weekday::Tuesday, 480, 540);
        let mon_early = make_entry("MA201", Weekday::Monday, 480, 540);

        assert_eq!(chronological(&mon_early, &mon), Ordering::Less);
        assert_eq!(chronological(&mon, &tue), Ordering::Less);
        assert_eq!(chronological(&mon, &mon), Ordering::Equal);
    }

    #[test]
    fn test_chronological_tie_break_by_course() {
        let a = make_entry("CS101", Weekday::Monday, 480, 540);
        let b = make_entry("MA201", Weekday::Monday, 480, 540);
        assert_eq!(chronological(&a, &b), Ordering::Less);
    }
}
