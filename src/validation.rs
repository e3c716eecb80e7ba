//! Input validation for generation runs.
//!
//! Checks structural integrity of cohort constraints, session
//! requests, and the room catalog before generation. Detects:
//! - Duplicate cohort and room IDs
//! - Constraints that cannot produce a grid
//! - Requests referencing unknown cohorts
//! - Requests with no faculty candidates or a non-positive duration
//! - An empty room catalog when there are requests to place
//!
//! Generation enforces the fatal subset of these checks itself and
//! stops at the first; this pass reports every problem at once so an
//! operator can fix a catalog in one round.

use std::collections::HashSet;

use crate::grid::TimeGrid;
use crate::models::{CohortConstraint, SessionRequest};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two cohorts or two rooms share the same ID.
    DuplicateId,
    /// A constraint cannot produce a grid.
    MalformedConstraint,
    /// A request names a cohort with no constraint.
    UnknownCohortReference,
    /// A request lists no faculty candidates.
    NoFacultyCandidates,
    /// A request's `duration_slots` is not positive.
    InvalidDuration,
    /// There are requests to place but no rooms to place them in.
    EmptyRoomCatalog,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input catalog for a generation run.
///
/// Checks:
/// 1. No duplicate cohort IDs
/// 2. No duplicate room IDs
/// 3. Every constraint can produce a grid
/// 4. Every request references a known cohort
/// 5. Every request lists at least one faculty candidate
/// 6. Every request has a positive duration
/// 7. The room catalog is non-empty when there are requests
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_catalog(
    constraints: &[CohortConstraint],
    requests: &[SessionRequest],
    rooms: &[String],
) -> ValidationResult {
    let mut errors = Vec::new();

    // Collect cohort IDs, flagging duplicates
    let mut cohort_ids = HashSet::new();
    for constraint in constraints {
        if !cohort_ids.insert(constraint.cohort_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate cohort ID: {}", constraint.cohort_id),
            ));
        }
        // Grid derivation is the authority on what a well-formed
        // constraint is; one error per constraint.
        if let Err(e) = TimeGrid::build(constraint) {
            errors.push(ValidationError::new(
                ValidationErrorKind::MalformedConstraint,
                e.to_string(),
            ));
        }
    }

    let mut room_ids = HashSet::new();
    for room in rooms {
        if !room_ids.insert(room.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate room ID: {room}"),
            ));
        }
    }

    for request in requests {
        if !cohort_ids.contains(request.cohort_id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownCohortReference,
                format!(
                    "Request for course '{}' references unknown cohort '{}'",
                    request.course_id, request.cohort_id
                ),
            ));
        }
        if request.faculty_candidates.is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::NoFacultyCandidates,
                format!(
                    "Request for course '{}' lists no faculty candidates",
                    request.course_id
                ),
            ));
        }
        if request.duration_slots < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidDuration,
                format!(
                    "Request for course '{}' has non-positive duration_slots ({})",
                    request.course_id, request.duration_slots
                ),
            ));
        }
    }

    if !requests.is_empty() && rooms.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoomCatalog,
            format!(
                "Room catalog is empty but there are {} requests to place",
                requests.len()
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
