//! Generation run metrics.
//!
//! Computes placement and utilization indicators from a completed
//! generation run and the constraints that produced it.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Placement Rate | placed / (placed + unplaced) |
//! | Cohort Utilization | Scheduled minutes / grid minutes |
//! | Avg Utilization | Mean cohort utilization |
//! | Teaching Minutes | Sum of entry durations per faculty |
//! | Occupancy Minutes | Sum of entry durations per room |

use std::collections::HashMap;

use crate::error::ScheduleError;
use crate::models::CohortConstraint;

use super::pipeline::{build_grids, GenerationOutcome};

/// Generation run performance indicators.
///
/// All durations are in minutes; rates are in 0.0..1.0.
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Fraction of requests that found a slot (1.0 when there were
    /// none).
    pub placement_rate: f64,
    /// Mean cohort utilization.
    pub avg_utilization: f64,
    /// Per-cohort scheduled minutes over grid minutes. Every cohort
    /// with a constraint appears, idle ones at 0.0.
    pub utilization_by_cohort: HashMap<String, f64>,
    /// Scheduled minutes per faculty member.
    pub teaching_min_by_faculty: HashMap<String, i32>,
    /// Scheduled minutes per room.
    pub occupied_min_by_room: HashMap<String, i32>,
    /// Placed entries.
    pub entry_count: usize,
    /// Requests that found no slot.
    pub unplaced_count: usize,
    /// Conflicts that survived resolution.
    pub unresolved_count: usize,
    /// Moves the resolver made.
    pub relocation_count: usize,
}

impl GenerationReport {
    /// Computes metrics from a run outcome and the constraints it ran
    /// with.
    ///
    /// # Errors
    ///
    /// Each cohort's grid is re-derived for the utilization
    /// denominators, so malformed or duplicated constraints fail here
    /// the same way they fail generation.
    pub fn calculate(
        outcome: &GenerationOutcome,
        constraints: &[CohortConstraint],
    ) -> Result<Self, ScheduleError> {
        let grids = build_grids(constraints)?;

        let placed = outcome.entries.len();
        let requested = placed + outcome.unplaced.len();
        let placement_rate = if requested == 0 {
            1.0
        } else {
            placed as f64 / requested as f64
        };

        let mut scheduled_by_cohort: HashMap<String, i32> = HashMap::new();
        let mut teaching_min_by_faculty: HashMap<String, i32> = HashMap::new();
        let mut occupied_min_by_room: HashMap<String, i32> = HashMap::new();
        for entry in &outcome.entries {
            let minutes = entry.duration_min();
            *scheduled_by_cohort
                .entry(entry.cohort_id.clone())
                .or_insert(0) += minutes;
            if !entry.faculty_id.is_empty() {
                *teaching_min_by_faculty
                    .entry(entry.faculty_id.clone())
                    .or_insert(0) += minutes;
            }
            if !entry.room_id.is_empty() {
                *occupied_min_by_room
                    .entry(entry.room_id.clone())
                    .or_insert(0) += minutes;
            }
        }

        let mut utilization_by_cohort = HashMap::new();
        for constraint in constraints {
            let available = grids
                .get(&constraint.cohort_id)
                .map(|g| g.len() as i32 * g.slot_duration_min)
                .unwrap_or(0);
            let scheduled = scheduled_by_cohort
                .get(&constraint.cohort_id)
                .copied()
                .unwrap_or(0);
            let utilization = if available > 0 {
                scheduled as f64 / available as f64
            } else {
                0.0
            };
            utilization_by_cohort.insert(constraint.cohort_id.clone(), utilization);
        }
        let avg_utilization = if utilization_by_cohort.is_empty() {
            0.0
        } else {
            let sum: f64 = utilization_by_cohort.values().sum();
            sum / utilization_by_cohort.len() as f64
        };

        Ok(Self {
            placement_rate,
            avg_utilization,
            utilization_by_cohort,
            teaching_min_by_faculty,
            occupied_min_by_room,
            entry_count: placed,
            unplaced_count: outcome.unplaced.len(),
            unresolved_count: outcome.unresolved.len(),
            relocation_count: outcome.relocations.len(),
        })
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, min_placement_rate: f64, max_unresolved: usize) -> bool {
        self.placement_rate >= min_placement_rate && self.unresolved_count <= max_unresolved
    }
}
