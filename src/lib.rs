//! Campus timetable generation and clash detection.
//!
//! Builds weekly teaching timetables for cohorts of students: derives
//! each cohort's assignable slot grid from its constraints, places
//! session requests without double-booking cohorts, faculty, or rooms,
//! and repairs the conflicts placement cannot avoid. A feasibility
//! engine, not an optimizer — runs are fast and deterministic, and
//! anything that cannot be placed or repaired comes back as an
//! explicit diagnostic instead of failing the run.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `CohortConstraint`, `SessionRequest`,
//!   `ScheduleEntry`, `Timetable`, `ConflictRecord`
//! - **`grid`**: Per-cohort assignable slot grids derived from daily
//!   windows, breaks, and working days
//! - **`scheduler`**: The `TimetableGenerator` pipeline — allocation,
//!   conflict resolution, run metrics
//! - **`detection`**: Pairwise conflict scans with pluggable match
//!   policies
//! - **`validation`**: Input integrity checks (duplicate IDs, malformed
//!   constraints, dangling references)
//! - **`error`**: Fatal error taxonomy for aborted runs
//!
//! # Pipeline
//!
//! `TimetableGenerator::generate` runs one synchronous pass per call:
//! grid derivation, first-fit allocation, conflict detection, repair
//! by relocation. Only malformed input aborts; capacity exhaustion
//! degrades to `Unplaced` and `Unresolved` records in the
//! `GenerationOutcome`.
//!
//! # References
//!
//! - de Werra (1985), "An introduction to timetabling"
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated
//!   timetabling"

pub mod detection;
pub mod error;
pub mod grid;
pub mod models;
pub mod scheduler;
pub mod validation;
