//! Selection rules for non-FIFO policies.
//!
//! A rule orders the ready set; the head of that order runs next.
//! Every rule ends with the same deterministic tie-break: earliest
//! arrival, then process id.
//!
//! # Score Convention
//! Lower key = selected first, as with SPT and priority dispatching.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use std::cmp::Ordering;

use super::state::RunState;
use crate::models::Process;

/// How the next process is picked from the ready set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SelectionRule {
    /// Smallest burst time first (SJF / SPT).
    ShortestBurst,
    /// Smallest priority number first.
    HighestPriority,
}

impl SelectionRule {
    /// Total order over processes under this rule.
    pub(crate) fn compare(self, a: &Process, b: &Process) -> Ordering {
        let primary = match self {
            SelectionRule::ShortestBurst => a.burst_time.cmp(&b.burst_time),
            SelectionRule::HighestPriority => a.priority.cmp(&b.priority),
        };
        primary.then_with(|| a.arrival_order(b))
    }

    /// Index of the ready process this rule picks, if any is ready.
    pub(crate) fn select(self, state: &RunState<'_>) -> Option<usize> {
        let processes = state.processes();
        state
            .ready()
            .min_by(|&a, &b| self.compare(&processes[a], &processes[b]))
    }
}
