//! CPU scheduling policies.
//!
//! Each policy is a pure function from a process snapshot to a
//! [`RunResult`]: an execution timeline plus per-process metrics. Policies
//! share no state between invocations, so independent runs may execute on
//! separate threads without locking.
//!
//! # Policies
//!
//! | Policy | Preemptive | Selection |
//! |--------|-----------|-----------|
//! | [`Fcfs`] | no | arrival order |
//! | [`Sjf`] | no | shortest burst |
//! | [`RoundRobin`] | yes (quantum) | FIFO queue |
//! | [`PriorityScheduling`] | optional | lowest priority number |
//!
//! Ties are always broken by earliest arrival, then by process id.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3-4

mod algorithm;
mod fcfs;
mod kpi;
mod priority;
mod round_robin;
mod selection;
mod sjf;
mod state;

pub use algorithm::{compare, Algorithm, Comparison, SimulationRequest};
pub use fcfs::{fcfs, Fcfs};
pub use kpi::RunKpi;
pub use priority::{priority_scheduling, PriorityScheduling};
pub use round_robin::{round_robin, RoundRobin};
pub use sjf::{sjf, Sjf};

use crate::models::{Process, RunResult};
use crate::validation::ValidationResult;
use std::fmt::Debug;

/// Result of one simulation: the run, or every validation problem found.
pub type SimulationResult = ValidationResult<RunResult>;

/// A CPU scheduling policy.
///
/// Implementations validate and normalize their input before building any
/// simulation state, and never return partial results.
pub trait SchedulingPolicy: Send + Sync + Debug {
    /// Policy name (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Simulates the policy over a process snapshot.
    fn simulate(&self, processes: &[Process]) -> SimulationResult;

    /// Policy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
