//! Slot allocation, conflict resolution, and run orchestration.
//!
//! `TimetableGenerator` drives one generation run end to end:
//! `SlotAllocator` places session requests onto per-cohort grids,
//! `ConflictResolver` repairs double-bookings by relocation, and
//! `GenerationReport` summarizes the result.
//!
//! # Algorithm
//!
//! Greedy first-fit placement followed by iterative repair. Neither
//! pass is optimal; together they produce feasible timetables fast and
//! degrade to explicit diagnostics instead of failing whole runs.
//!
//! # References
//!
//! - Minton et al. (1992), "Minimizing conflicts: a heuristic repair
//!   method", Artificial Intelligence 58
//! - Schaerf (1999), "A Survey of Automated Timetabling"

mod allocator;
mod pipeline;
mod report;
mod resolver;

pub use allocator::{
    AllocationResult, PlacementStrategy, SlotAllocator, SlotLedger, Unplaced, UnplacedReason,
};
pub use pipeline::{GenerationOutcome, GenerationRequest, TimetableGenerator};
pub use report::GenerationReport;
pub use resolver::{ConflictResolver, Relocation, ResolutionResult, Unresolved};
