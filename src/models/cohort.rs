//! Cohort constraint and time-of-day models.
//!
//! Defines when a cohort can hold classes: daily operating hours,
//! break periods, slot granularity, and working days.
//!
//! # Time Model
//! All times of day are in minutes from midnight (0..=1440).
//! Dates are deliberately absent: a timetable repeats weekly, so a
//! `Weekday` plus a minute interval identifies a session time.
//!
//! # Precedence
//! Break windows override the daily window. A minute is assignable iff
//! it falls inside `daily_window` and inside no `break_windows` entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Monday through Friday, in order.
    pub fn weekdays() -> Vec<Weekday> {
        vec![
            Weekday::Monday,
            Weekday::Tuesday,
            Weekday::Wednesday,
            Weekday::Thursday,
            Weekday::Friday,
        ]
    }

    /// Short English label ("Mon".."Sun").
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A time-of-day interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayWindow {
    /// Interval start (minutes from midnight, inclusive).
    pub start_min: i32,
    /// Interval end (minutes from midnight, exclusive).
    pub end_min: i32,
}

impl DayWindow {
    /// Creates a new window.
    pub fn new(start_min: i32, end_min: i32) -> Self {
        Self { start_min, end_min }
    }

    /// Duration of this window (minutes).
    #[inline]
    pub fn duration_min(&self) -> i32 {
        self.end_min - self.start_min
    }

    /// Whether a minute-of-day falls within this window.
    #[inline]
    pub fn contains(&self, time_min: i32) -> bool {
        time_min >= self.start_min && time_min < self.end_min
    }

    /// Whether two windows overlap.
    ///
    /// Touching endpoints do not overlap: 09:00-10:00 and 10:00-11:00
    /// are back-to-back, not in conflict.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_min < other.end_min && other.start_min < self.end_min
    }
}

impl fmt::Display for DayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", hhmm(self.start_min), hhmm(self.end_min))
    }
}

/// Formats minutes-from-midnight as "HH:MM".
pub(crate) fn hhmm(minutes: i32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Scheduling constraints for one cohort.
///
/// Immutable per generation run. The same daily window and breaks apply
/// to every working day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortConstraint {
    /// Unique cohort identifier.
    pub cohort_id: String,
    /// Operating hours applied to each working day.
    pub daily_window: DayWindow,
    /// Periods inside the daily window when no class may sit.
    pub break_windows: Vec<DayWindow>,
    /// Slot granularity (minutes).
    pub slot_duration_min: i32,
    /// Days on which this cohort holds classes.
    pub working_days: Vec<Weekday>,
}

impl CohortConstraint {
    /// Creates a constraint with the given cohort ID.
    ///
    /// Defaults: 09:00-17:00 window, 60-minute slots, Monday-Friday,
    /// no breaks.
    pub fn new(cohort_id: impl Into<String>) -> Self {
        Self {
            cohort_id: cohort_id.into(),
            daily_window: DayWindow::new(9 * 60, 17 * 60),
            break_windows: Vec::new(),
            slot_duration_min: 60,
            working_days: Weekday::weekdays(),
        }
    }

    /// Sets the daily operating window.
    pub fn with_daily_window(mut self, start_min: i32, end_min: i32) -> Self {
        self.daily_window = DayWindow::new(start_min, end_min);
        self
    }

    /// Adds a break window.
    pub fn with_break(mut self, start_min: i32, end_min: i32) -> Self {
        self.break_windows.push(DayWindow::new(start_min, end_min));
        self
    }

    /// Sets the slot granularity.
    pub fn with_slot_duration(mut self, slot_duration_min: i32) -> Self {
        self.slot_duration_min = slot_duration_min;
        self
    }

    /// Sets the working days.
    pub fn with_working_days(mut self, days: Vec<Weekday>) -> Self {
        self.working_days = days;
        self
    }

    /// Working days with duplicates removed, first occurrence preserved.
    pub fn distinct_working_days(&self) -> Vec<Weekday> {
        let mut seen = Vec::new();
        for &day in &self.working_days {
            if !seen.contains(&day) {
                seen.push(day);
            }
        }
        seen
    }
}
