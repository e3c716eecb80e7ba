//! Fatal error taxonomy.
//!
//! Only malformed input aborts a generation run: a cohort window that
//! cannot produce a grid, or two constraints claiming the same cohort.
//! Capacity exhaustion never lands here — unplaceable requests and
//! unresolved conflicts ride in the run outcome as diagnostics for an
//! operator to act on.

use thiserror::Error;

/// Errors that abort a generation run before allocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A cohort constraint cannot produce a valid grid.
    #[error("Invalid constraint for cohort '{cohort_id}': {field}: {reason}")]
    InvalidConstraint {
        /// Cohort whose constraint is malformed.
        cohort_id: String,
        /// Offending field (e.g., "daily_window", "break_windows[2]").
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Two constraints were supplied for the same cohort.
    #[error("Duplicate constraint for cohort '{cohort_id}'")]
    DuplicateCohort {
        /// Cohort claimed twice.
        cohort_id: String,
    },
}

impl ScheduleError {
    /// Convenience constructor for constraint violations.
    pub fn invalid_constraint(
        cohort_id: impl Into<String>,
        field: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidConstraint {
            cohort_id: cohort_id.into(),
            field: field.into(),
            reason: reason.into(),
        }
    }
}
