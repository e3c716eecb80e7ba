//! Time grid construction.
//!
//! Expands one cohort's constraint into the ordered list of assignable
//! slots: day-major in working-day order, chronological within a day,
//! stepping by the slot duration. A candidate that intersects a break
//! is never emitted, not even partially; the cursor jumps to the end of
//! the intersecting break and stepping resumes there, so afternoon
//! slots pack against the break instead of staying on the morning
//! lattice.
//!
//! Grids are derived data: rebuilt per run, never persisted.
//!
//! # Algorithm
//!
//! For each working day, walk a cursor from the window start. If the
//! candidate slot `[cursor, cursor + slot)` fits inside the window and
//! touches no break, emit it and advance by one slot duration;
//! if it intersects a break, advance the cursor to the latest
//! intersecting break's end and retry. Every intersecting break ends
//! strictly after the cursor, so the walk terminates.

use crate::error::ScheduleError;
use crate::models::{hhmm, CohortConstraint, DayWindow, Weekday};

/// One assignable interval on one day.
///
/// Derived from a `CohortConstraint`; exists only for the duration of
/// a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    /// Day the slot sits on.
    pub day: Weekday,
    /// Slot start (minutes from midnight, inclusive).
    pub start_min: i32,
    /// Slot end (minutes from midnight, exclusive).
    pub end_min: i32,
}

impl TimeSlot {
    /// The slot's interval as a window.
    pub fn window(&self) -> DayWindow {
        DayWindow::new(self.start_min, self.end_min)
    }
}

/// A maximal-information run of consecutive slots on one day.
///
/// Slots are consecutive when each begins exactly where the previous
/// ends; a break gap therefore splits runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRun {
    /// Day the run sits on.
    pub day: Weekday,
    /// Start of the first slot.
    pub start_min: i32,
    /// End of the last slot.
    pub end_min: i32,
    /// Start minute of every covered slot, in order.
    pub starts: Vec<i32>,
}

/// The assignable slots for one cohort, in emission order.
#[derive(Debug, Clone)]
pub struct TimeGrid {
    /// Cohort the grid was built for.
    pub cohort_id: String,
    /// Slot granularity (minutes).
    pub slot_duration_min: i32,
    slots: Vec<TimeSlot>,
}

impl TimeGrid {
    /// Builds the grid for one cohort constraint.
    ///
    /// Slots come out day-major in working-day order (duplicates
    /// removed) and chronological within each day.
    ///
    /// # Errors
    ///
    /// `InvalidConstraint` when the daily window or a break window is
    /// not monotonic, a bound leaves 00:00..24:00, or the slot duration
    /// is not positive. The error names the offending field.
    ///
    /// # Example
    ///
    /// ```
    /// use timetabler::grid::TimeGrid;
    /// use timetabler::models::{CohortConstraint, Weekday};
    ///
    /// let constraint = CohortConstraint::new("cs-year1")
    ///     .with_daily_window(8 * 60, 16 * 60)
    ///     .with_break(12 * 60 + 30, 13 * 60 + 30)
    ///     .with_slot_duration(60)
    ///     .with_working_days(vec![Weekday::Monday]);
    ///
    /// let grid = TimeGrid::build(&constraint).unwrap();
    /// let starts: Vec<i32> = grid.slots().iter().map(|s| s.start_min).collect();
    /// // 12:00 and 13:00 would touch the 12:30-13:30 break; the first
    /// // afternoon slot packs against the break's end instead.
    /// assert_eq!(starts, vec![480, 540, 600, 660, 810, 870]);
    /// ```
    pub fn build(constraint: &CohortConstraint) -> Result<TimeGrid, ScheduleError> {
        validate(constraint)?;

        let window = constraint.daily_window;
        let slot = constraint.slot_duration_min;
        let mut slots = Vec::new();

        for day in constraint.distinct_working_days() {
            let mut cursor = window.start_min;
            while cursor + slot <= window.end_min {
                let candidate = DayWindow::new(cursor, cursor + slot);
                let blocked_until = constraint
                    .break_windows
                    .iter()
                    .filter(|b| b.overlaps(&candidate))
                    .map(|b| b.end_min)
                    .max();
                match blocked_until {
                    Some(break_end) => cursor = break_end,
                    None => {
                        slots.push(TimeSlot {
                            day,
                            start_min: candidate.start_min,
                            end_min: candidate.end_min,
                        });
                        cursor = candidate.end_min;
                    }
                }
            }
        }

        Ok(TimeGrid {
            cohort_id: constraint.cohort_id.clone(),
            slot_duration_min: slot,
            slots,
        })
    }

    /// Slots in emission order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the grid has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots on a given day, in start order.
    pub fn slots_on(&self, day: Weekday) -> Vec<TimeSlot> {
        self.slots.iter().filter(|s| s.day == day).copied().collect()
    }

    /// Whether (day, start) names one of this grid's slots.
    pub fn has_slot(&self, day: Weekday, start_min: i32) -> bool {
        self.slots
            .iter()
            .any(|s| s.day == day && s.start_min == start_min)
    }

    /// Start minutes of the slots fully covered by `[start_min,
    /// end_min)` on `day`.
    pub fn covered_starts(&self, day: Weekday, start_min: i32, end_min: i32) -> Vec<i32> {
        self.slots
            .iter()
            .filter(|s| s.day == day && s.start_min >= start_min && s.end_min <= end_min)
            .map(|s| s.start_min)
            .collect()
    }

    /// All runs of exactly `duration_slots` consecutive slots.
    ///
    /// Returns an empty list when `duration_slots` is not positive or
    /// exceeds the longest run in the grid.
    pub fn contiguous_runs(&self, duration_slots: i32) -> Vec<SlotRun> {
        if duration_slots < 1 {
            return Vec::new();
        }
        let n = duration_slots as usize;
        let mut runs = Vec::new();
        for w in self.slots.windows(n) {
            let consecutive = w
                .windows(2)
                .all(|p| p[0].day == p[1].day && p[1].start_min == p[0].end_min);
            if consecutive {
                runs.push(SlotRun {
                    day: w[0].day,
                    start_min: w[0].start_min,
                    end_min: w[n - 1].end_min,
                    starts: w.iter().map(|s| s.start_min).collect(),
                });
            }
        }
        runs
    }
}

/// Checks a constraint can produce a grid, naming the first bad field.
fn validate(constraint: &CohortConstraint) -> Result<(), ScheduleError> {
    let cohort = &constraint.cohort_id;
    let window = constraint.daily_window;

    if constraint.slot_duration_min <= 0 {
        return Err(ScheduleError::invalid_constraint(
            cohort,
            "slot_duration_min",
            format!("must be positive, got {}", constraint.slot_duration_min),
        ));
    }
    if window.start_min >= window.end_min {
        return Err(ScheduleError::invalid_constraint(
            cohort,
            "daily_window",
            format!(
                "start {} is not before end {}",
                hhmm(window.start_min),
                hhmm(window.end_min)
            ),
        ));
    }
    if window.start_min < 0 || window.end_min > 1440 {
        return Err(ScheduleError::invalid_constraint(
            cohort,
            "daily_window",
            "must lie within 00:00..24:00",
        ));
    }
    for (i, b) in constraint.break_windows.iter().enumerate() {
        if b.start_min >= b.end_min {
            return Err(ScheduleError::invalid_constraint(
                cohort,
                format!("break_windows[{i}]"),
                format!(
                    "start {} is not before end {}",
                    hhmm(b.start_min),
                    hhmm(b.end_min)
                ),
            ));
        }
        if b.start_min < 0 || b.end_min > 1440 {
            return Err(ScheduleError::invalid_constraint(
                cohort,
                format!("break_windows[{i}]"),
                "must lie within 00:00..24:00",
            ));
        }
    }
    Ok(())
}
