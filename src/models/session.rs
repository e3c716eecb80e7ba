//! Session request model.
//!
//! A session request is one occurrence of a course that needs a slot,
//! a faculty member, and a room. Requests are the unit of work for the
//! slot allocator; caller-supplied order is placement priority.

use serde::{Deserialize, Serialize};

/// Kind of session being scheduled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionType {
    /// Standard taught class.
    #[default]
    Lecture,
    /// Practical or laboratory session.
    Lab,
    /// Small-group tutorial.
    Tutorial,
    /// Domain-specific kind.
    Custom(String),
}

/// A course occurrence awaiting placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRequest {
    /// Course being scheduled.
    pub course_id: String,
    /// Cohort attending the session.
    pub cohort_id: String,
    /// Faculty who can teach it, in preference order.
    pub faculty_candidates: Vec<String>,
    /// Number of consecutive slots the session occupies.
    pub duration_slots: i32,
    /// Session kind, stamped onto the resulting entry.
    pub session_type: SessionType,
}

impl SessionRequest {
    /// Creates a single-slot lecture request.
    pub fn new(course_id: impl Into<String>, cohort_id: impl Into<String>) -> Self {
        Self {
            course_id: course_id.into(),
            cohort_id: cohort_id.into(),
            faculty_candidates: Vec::new(),
            duration_slots: 1,
            session_type: SessionType::Lecture,
        }
    }

    /// Adds a faculty candidate.
    pub fn with_faculty(mut self, faculty_id: impl Into<String>) -> Self {
        self.faculty_candidates.push(faculty_id.into());
        self
    }

    /// Replaces the candidate list.
    pub fn with_faculty_candidates(mut self, faculty: Vec<String>) -> Self {
        self.faculty_candidates = faculty;
        self
    }

    /// Sets the number of consecutive slots.
    pub fn with_duration_slots(mut self, duration_slots: i32) -> Self {
        self.duration_slots = duration_slots;
        self
    }

    /// Sets the session kind.
    pub fn with_session_type(mut self, session_type: SessionType) -> Self {
        self.session_type = session_type;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_builder() {
        let r = SessionRequest::new("CS101", "cs-year1")
            .with_faculty("F1")
            .with_faculty("F2")
            .with_duration_slots(2)
            .with_session_type(SessionType::Lab);

        assert_eq!(r.course_id, "CS101");
        assert_eq!(r.cohort_id, "cs-year1");
        assert_eq!(r.faculty_candidates, vec!["F1", "F2"]);
        assert_eq!(r.duration_slots, 2);
        assert_eq!(r.session_type, SessionType::Lab);
    }

    #[test]
    fn test_request_defaults() {
        let r = SessionRequest::new("CS101", "cs-year1");
        assert!(r.faculty_candidates.is_empty());
        assert_eq!(r.duration_slots, 1);
        assert_eq!(r.session_type, SessionType::Lecture);
    }

    #[test]
    fn test_replace_candidates() {
        let r = SessionRequest::new("CS101", "cs-year1")
            .with_faculty("F1")
            .with_faculty_candidates(vec!["F9".into()]);
        assert_eq!(r.faculty_candidates, vec!["F9"]);
    }

    #[test]
    fn test_session_type_default() {
        assert_eq!(SessionType::default(), SessionType::Lecture);
    }
}
