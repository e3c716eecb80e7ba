//! Timetable generation pipeline.
//!
//! One run walks the fixed phase sequence: build each cohort's grid,
//! allocate session requests, detect conflicts among the placed
//! entries, resolve what can be moved, and return everything the
//! caller needs to persist or display. A run is synchronous and fully
//! in-memory; separate runs share no state and may execute in
//! parallel.
//!
//! Only malformed input aborts — a constraint that cannot produce a
//! grid, or two constraints claiming one cohort. Capacity exhaustion
//! degrades to `Unplaced` and `Unresolved` records in the outcome and
//! the run completes for the placed subset.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::detection;
use crate::error::ScheduleError;
use crate::grid::TimeGrid;
use crate::models::{CohortConstraint, ScheduleEntry, SessionRequest, Timetable};

use super::allocator::{PlacementStrategy, SlotAllocator, Unplaced};
use super::resolver::{ConflictResolver, Relocation, Unresolved};

/// Input container for one generation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// One constraint per cohort being scheduled.
    pub constraints: Vec<CohortConstraint>,
    /// Sessions to place, in priority order.
    pub requests: Vec<SessionRequest>,
    /// Room catalog, in assignment preference order.
    pub rooms: Vec<String>,
    /// Term label stamped onto assembled timetables.
    pub term: String,
    /// Caller clock (ms since the Unix epoch), stamped onto every
    /// conflict record this run detects.
    pub timestamp_ms: i64,
    /// How the allocator picks among feasible placements.
    pub strategy: PlacementStrategy,
}

impl GenerationRequest {
    /// Creates a request with an empty room catalog, first-fit
    /// placement, and a zero clock.
    pub fn new(constraints: Vec<CohortConstraint>, requests: Vec<SessionRequest>) -> Self {
        Self {
            constraints,
            requests,
            rooms: Vec::new(),
            term: String::new(),
            timestamp_ms: 0,
            strategy: PlacementStrategy::FirstFit,
        }
    }

    /// Adds a room to the catalog.
    pub fn with_room(mut self, room_id: impl Into<String>) -> Self {
        self.rooms.push(room_id.into());
        self
    }

    /// Replaces the room catalog.
    pub fn with_rooms(mut self, rooms: Vec<String>) -> Self {
        self.rooms = rooms;
        self
    }

    /// Sets the term label.
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into();
        self
    }

    /// Sets the caller clock.
    pub fn with_timestamp(mut self, timestamp_ms: i64) -> Self {
        self.timestamp_ms = timestamp_ms;
        self
    }

    /// Sets the placement strategy.
    pub fn with_strategy(mut self, strategy: PlacementStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Everything one generation run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationOutcome {
    /// Placed entries across all cohorts, post-resolution.
    pub entries: Vec<ScheduleEntry>,
    /// Requests that found no slot.
    pub unplaced: Vec<Unplaced>,
    /// Conflicts that survived resolution.
    pub unresolved: Vec<Unresolved>,
    /// Moves the resolver made.
    pub relocations: Vec<Relocation>,
    /// Term label from the request.
    pub term: String,
}

impl GenerationOutcome {
    /// Whether every request was placed and every conflict resolved.
    pub fn is_clean(&self) -> bool {
        self.unplaced.is_empty() && self.unresolved.is_empty()
    }

    /// Cohorts with at least one placed entry, in first-placement
    /// order.
    pub fn cohort_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = Vec::new();
        for e in &self.entries {
            if !ids.contains(&e.cohort_id) {
                ids.push(e.cohort_id.clone());
            }
        }
        ids
    }

    /// Assembles one cohort's timetable: entries filtered and sorted,
    /// clashes recomputed with the given detection timestamp.
    pub fn timetable_for(&self, cohort_id: &str, detected_at_ms: i64) -> Timetable {
        let entries = self
            .entries
            .iter()
            .filter(|e| e.cohort_id == cohort_id)
            .cloned()
            .collect();
        Timetable::from_entries(cohort_id, &self.term, entries, detected_at_ms)
    }
}

/// Builds one grid per cohort, rejecting duplicate cohort ids.
pub(crate) fn build_grids(
    constraints: &[CohortConstraint],
) -> Result<HashMap<String, TimeGrid>, ScheduleError> {
    let mut grids = HashMap::new();
    for constraint in constraints {
        let grid = TimeGrid::build(constraint)?;
        if grids.insert(constraint.cohort_id.clone(), grid).is_some() {
            return Err(ScheduleError::DuplicateCohort {
                cohort_id: constraint.cohort_id.clone(),
            });
        }
    }
    Ok(grids)
}

/// Runs the full generation pipeline.
///
/// # Example
///
/// ```
/// use timetabler::models::{CohortConstraint, SessionRequest, Weekday};
/// use timetabler::scheduler::{GenerationRequest, TimetableGenerator};
///
/// let constraints = vec![CohortConstraint::new("cs-year1")
///     .with_daily_window(9 * 60, 17 * 60)
///     .with_working_days(vec![Weekday::Monday, Weekday::Tuesday])];
/// let requests = vec![
///     SessionRequest::new("CS101", "cs-year1").with_faculty("F1"),
///     SessionRequest::new("MA201", "cs-year1").with_faculty("F2"),
/// ];
/// let request = GenerationRequest::new(constraints, requests)
///     .with_room("R201")
///     .with_term("2026-fall");
///
/// let outcome = TimetableGenerator::new().generate(&request).unwrap();
/// assert_eq!(outcome.entries.len(), 2);
/// assert!(outcome.is_clean());
///
/// let timetable = outcome.timetable_for("cs-year1", 0);
/// assert!(timetable.is_clash_free());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TimetableGenerator;

impl TimetableGenerator {
    /// Creates a generator.
    pub fn new() -> Self {
        Self
    }

    /// Executes one run: grids, allocation, detection, resolution.
    ///
    /// # Errors
    ///
    /// `InvalidConstraint` when a cohort's window or slot duration
    /// cannot produce a grid; `DuplicateCohort` when two constraints
    /// claim one cohort. Both abort before any request is placed.
    pub fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationOutcome, ScheduleError> {
        // Build each cohort's grid; malformed input aborts here,
        // before anything is placed.
        let grids = build_grids(&request.constraints)?;

        // Place requests in caller order.
        let allocator = SlotAllocator::new().with_strategy(request.strategy);
        let allocation = allocator.allocate(&request.requests, &grids, &request.rooms);

        // Detect conflicts among the placed subset.
        let conflicts = detection::detect_conflicts(&allocation.entries, request.timestamp_ms);

        // Resolve what can be moved; survivors become diagnostics.
        let resolution = ConflictResolver::new().resolve(
            allocation.entries,
            &conflicts,
            &grids,
            request.timestamp_ms,
        );

        Ok(GenerationOutcome {
            entries: resolution.entries,
            unplaced: allocation.unplaced,
            unresolved: resolution.unresolved,
            relocations: resolution.relocations,
            term: request.term.clone(),
        })
    }
}
