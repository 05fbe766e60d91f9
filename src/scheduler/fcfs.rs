//! First-Come-First-Serve.
//!
//! # Algorithm
//! 1. Sort processes by (arrival time, id).
//! 2. Walk the sorted list with a clock starting at 0; idle up to each
//!    arrival that lies in the future.
//! 3. Run each process to completion in one segment.
//!
//! # Complexity
//! O(n log n).

use super::state::RunState;
use super::{SchedulingPolicy, SimulationResult};
use crate::models::Process;
use crate::validation::normalize_processes;

/// First-Come-First-Serve, non-preemptive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fcfs;

impl SchedulingPolicy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let mut processes = normalize_processes(processes)?;
        processes.sort_by(Process::arrival_order);
        log::debug!("FCFS: scheduling {} processes", processes.len());

        let mut state = RunState::new(&processes);
        for (i, p) in processes.iter().enumerate() {
            if state.clock() < p.arrival_time {
                state.idle_until_next_arrival();
            }
            state.execute(i, p.burst_time);
        }
        Ok(state.finish())
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Serve"
    }
}

/// Runs First-Come-First-Serve over `processes`.
///
/// # Example
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::fcfs;
///
/// let processes = vec![
///     Process::new(0, 5).with_id("P1"),
///     Process::new(1, 3).with_id("P2"),
///     Process::new(2, 8).with_id("P3"),
/// ];
/// let result = fcfs(&processes).unwrap();
/// assert_eq!(result.timeline.concise(), "P1:0-5,P2:5-8,P3:8-16");
/// ```
pub fn fcfs(processes: &[Process]) -> SimulationResult {
    Fcfs.simulate(processes)
}
