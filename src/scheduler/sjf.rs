//! Shortest Job First, non-preemptive.
//!
//! # Algorithm
//! At each decision point pick, among arrived and unfinished processes,
//! the one with the smallest burst time (ties: earliest arrival, then id)
//! and run it to completion. When nothing is ready, idle up to the next
//! arrival.
//!
//! # Complexity
//! O(n²): a linear scan of the ready set per decision. Process sets are
//! small enough that a heap keyed on burst time does not pay for itself.
//!
//! # Reference
//! Smith (1956), SPT is optimal for mean flow time on a single machine.

use super::selection::SelectionRule;
use super::state::RunState;
use super::{SchedulingPolicy, SimulationResult};
use crate::models::Process;
use crate::validation::normalize_processes;

/// Shortest Job First, non-preemptive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sjf;

impl SchedulingPolicy for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let processes = normalize_processes(processes)?;
        log::debug!("SJF: scheduling {} processes", processes.len());

        let mut state = RunState::new(&processes);
        while !state.all_finished() {
            match SelectionRule::ShortestBurst.select(&state) {
                Some(i) => {
                    log::debug!("SJF: t={} selected {}", state.clock(), processes[i].pid());
                    state.execute(i, state.remaining(i));
                }
                None => {
                    state.idle_until_next_arrival();
                }
            }
        }
        Ok(state.finish())
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }
}

/// Runs non-preemptive Shortest Job First over `processes`.
pub fn sjf(processes: &[Process]) -> SimulationResult {
    Sjf.simulate(processes)
}
