//! Timetabling domain models.
//!
//! Core data types for cohort constraints, session requests, placed
//! entries, timetables, and detected conflicts. Storage-agnostic:
//! everything here serializes with serde and carries no I/O — the
//! enclosing service decides how records are persisted.
//!
//! # Domain Mappings
//!
//! | timetabler | University | School | Training center |
//! |------------|-----------|--------|-----------------|
//! | Cohort | Year section | Class | Batch |
//! | Faculty | Professor | Teacher | Instructor |
//! | Room | Lecture hall | Classroom | Lab bay |
//! | Session | Lecture/Lab | Lesson | Module block |

mod cohort;
mod conflict;
mod entry;
mod session;
mod timetable;

pub use cohort::{CohortConstraint, DayWindow, Weekday};
pub use conflict::{ConflictKind, ConflictRecord};
pub use entry::{chronological, ScheduleEntry};
pub use session::{SessionRequest, SessionType};
pub use timetable::Timetable;

pub(crate) use cohort::hhmm;
