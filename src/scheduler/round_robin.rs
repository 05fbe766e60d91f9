//! Round Robin.
//!
//! # Algorithm
//! 1. Seed a FIFO ready queue with every process arriving at t=0.
//! 2. Pop the head and run it for `min(quantum, remaining)`.
//! 3. Admit every process that arrived up to the end of that slice, in
//!    (arrival, id) order.
//! 4. Only then re-enqueue the popped process if it has work left.
//! 5. When the queue drains with work outstanding, idle to the next arrival
//!    and admit.
//!
//! Step 3 before step 4 matters: a process never cuts in front of arrivals
//! that happened during its own slice.
//!
//! Consecutive slices of one process are kept as separate segments so the
//! quantum boundaries stay visible.

use std::collections::VecDeque;

use super::state::RunState;
use super::{SchedulingPolicy, SimulationResult};
use crate::models::Process;
use crate::validation::{normalize_with, validate_quantum};

/// Round Robin with a fixed time quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    /// Maximum uninterrupted run per turn (> 0).
    pub time_quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin policy.
    pub fn new(time_quantum: i64) -> Self {
        Self { time_quantum }
    }
}

/// Tracks which processes already entered the ready queue.
struct Admission {
    admitted: Vec<bool>,
}

impl Admission {
    fn new(n: usize) -> Self {
        Self {
            admitted: vec![false; n],
        }
    }

    /// Appends every not-yet-admitted process with `arrival <= clock` to the
    /// queue, in (arrival, id) order.
    fn admit_arrived(&mut self, state: &RunState<'_>, queue: &mut VecDeque<usize>) {
        let processes = state.processes();
        let mut arrived: Vec<usize> = (0..processes.len())
            .filter(|&i| !self.admitted[i] && processes[i].arrival_time <= state.clock())
            .collect();
        arrived.sort_by(|&a, &b| processes[a].arrival_order(&processes[b]));
        for i in arrived {
            self.admitted[i] = true;
            queue.push_back(i);
        }
    }
}

impl SchedulingPolicy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let processes = normalize_with(processes, |_| validate_quantum(self.time_quantum))?;
        log::debug!(
            "RR: scheduling {} processes, quantum {}",
            processes.len(),
            self.time_quantum
        );

        let mut state = RunState::new(&processes);
        let mut queue: VecDeque<usize> = VecDeque::with_capacity(processes.len());
        let mut admission = Admission::new(processes.len());
        admission.admit_arrived(&state, &mut queue);

        loop {
            let Some(i) = queue.pop_front() else {
                if state.all_finished() {
                    break;
                }
                state.idle_until_next_arrival();
                admission.admit_arrived(&state, &mut queue);
                continue;
            };

            let slice = self.time_quantum.min(state.remaining(i));
            let finished = state.execute(i, slice);
            admission.admit_arrived(&state, &mut queue);
            if !finished {
                queue.push_back(i);
            }
        }

        Ok(state.finish())
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

/// Runs Round Robin with the given time quantum over `processes`.
///
/// A quantum `<= 0` is rejected with
/// [`ValidationErrorKind::InvalidParameter`](crate::validation::ValidationErrorKind).
///
/// # Example
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::round_robin;
///
/// let processes = vec![Process::new(0, 5).with_id("P1"), Process::new(0, 3).with_id("P2")];
/// let result = round_robin(&processes, 2).unwrap();
/// assert_eq!(result.timeline.concise(), "P1:0-2,P2:2-4,P1:4-6,P2:6-7,P1:7-8");
/// ```
pub fn round_robin(processes: &[Process], time_quantum: i64) -> SimulationResult {
    RoundRobin::new(time_quantum).simulate(processes)
}
