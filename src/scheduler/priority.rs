//! Priority scheduling, preemptive and non-preemptive.
//!
//! # Selection
//! Among arrived, unfinished processes the smallest priority number wins;
//! ties go to the earliest arrival, then the id. When nothing is ready the
//! CPU idles up to the next arrival.
//!
//! # Preemption
//! The preemptive variant runs the selected process only until the next
//! arrival of any other unfinished process, then selects again. Slices of
//! the same process that follow each other are folded into one segment, so
//! an arrival that does not win the CPU leaves no trace in the timeline.
//!
//! Low-priority processes can starve while higher-priority work keeps
//! arriving. That is inherent to the policy and is not compensated for
//! (no aging).

use super::selection::SelectionRule;
use super::state::RunState;
use super::{SchedulingPolicy, SimulationResult};
use crate::models::Process;
use crate::validation::{normalize_with, validate_priorities};

/// Priority scheduling (lower number = higher priority).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityScheduling {
    /// Whether a newly arrived process may take the CPU mid-burst.
    pub preemptive: bool,
}

impl PriorityScheduling {
    /// Creates a priority policy.
    pub fn new(preemptive: bool) -> Self {
        Self { preemptive }
    }

    /// Length of the next slice for process `i`.
    fn slice_len(&self, state: &RunState<'_>, i: usize) -> i64 {
        let remaining = state.remaining(i);
        if !self.preemptive {
            return remaining;
        }
        match state.next_arrival_after_clock(Some(i)) {
            Some(next) => remaining.min(next - state.clock()),
            None => remaining,
        }
    }
}

impl SchedulingPolicy for PriorityScheduling {
    fn name(&self) -> &'static str {
        if self.preemptive {
            "Priority (preemptive)"
        } else {
            "Priority"
        }
    }

    fn simulate(&self, processes: &[Process]) -> SimulationResult {
        let processes = normalize_with(processes, validate_priorities)?;
        log::debug!(
            "{}: scheduling {} processes",
            self.name(),
            processes.len()
        );

        let mut state = RunState::new(&processes);
        while !state.all_finished() {
            let Some(i) = SelectionRule::HighestPriority.select(&state) else {
                state.idle_until_next_arrival();
                continue;
            };

            let slice = self.slice_len(&state, i);
            log::debug!(
                "priority: t={} selected {} for {slice}",
                state.clock(),
                processes[i].pid()
            );
            if self.preemptive {
                state.execute_merged(i, slice);
            } else {
                state.execute(i, slice);
            }
        }
        Ok(state.finish())
    }

    fn description(&self) -> &'static str {
        if self.preemptive {
            "Priority scheduling (preemptive)"
        } else {
            "Priority scheduling (non-preemptive)"
        }
    }
}

/// Runs priority scheduling over `processes`.
///
/// Every process must carry a non-negative priority.
///
/// # Example
/// ```
/// use u_cpusched::models::Process;
/// use u_cpusched::scheduler::priority_scheduling;
///
/// let processes = vec![
///     Process::new(0, 10).with_id("P1").with_priority(2),
///     Process::new(3, 4).with_id("P2").with_priority(1),
/// ];
/// let result = priority_scheduling(&processes, true).unwrap();
/// assert_eq!(result.timeline.concise(), "P1:0-3,P2:3-7,P1:7-14");
/// ```
pub fn priority_scheduling(processes: &[Process], preemptive: bool) -> SimulationResult {
    PriorityScheduling::new(preemptive).simulate(processes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ProcessId;
    use crate::validation::ValidationErrorKind;

    fn proc(id: &str, arrival: i64, burst: i64, priority: i32) -> Process {
        Process::new(arrival, burst)
            .with_id(id)
            .with_priority(priority)
    }

    #[test]
    fn test_preemptive_arrival_interrupt() {
        let processes = vec![proc("P1", 0, 10, 2), proc("P2", 3, 4, 1)];
        let result = priority_scheduling(&processes, true).unwrap();
        assert_eq!(result.timeline.concise(), "P1:0-3,P2:3-7,P1:7-14");

        let p1 = result.metrics.get(&ProcessId::new("P1")).unwrap();
        assert_eq!(p1.completion_time, 14);
        assert_eq!(p1.waiting_time, 4);
        assert_eq!(p1.response_time, 0);
    }

    #[test]
    fn test_non_preemptive_runs_to_completion() {
        let processes = vec![proc("P1", 0, 10, 2), proc("P2", 3, 4, 1)];
        let result = priority_scheduling(&processes, false).unwrap();
        assert_eq!(result.timeline.concise(), "P1:0-10,P2:10-14");
    }

    #[test]
    fn test_non_preemptive_picks_highest_priority_among_ready() {
        let processes = vec![
            proc("P1", 0, 4, 3),
            proc("P2", 1, 3, 2),
            proc("P3", 2, 1, 1),
            proc("P4", 3, 2, 2),
        ];
        let result = priority_scheduling(&processes, false).unwrap();
        // At t=4: P3 (prio 1), then P2 and P4 tie on priority, P2 arrived first
        assert_eq!(result.timeline.concise(), "P1:0-4,P3:4-5,P2:5-8,P4:8-10");
    }

    #[test]
    fn test_preemptive_lower_priority_arrival_merges() {
        // P2 arrives with lower priority; P1's slices fold into one segment
        let processes = vec![proc("P1", 0, 6, 1), proc("P2", 2, 3, 5)];
        let result = priority_scheduling(&processes, true).unwrap();
        assert_eq!(result.timeline.len(), 2);
        assert_eq!(result.timeline.concise(), "P1:0-6,P2:6-9");
    }

    #[test]
    fn test_preemptive_chain_of_preemptions() {
        let processes = vec![
            proc("P1", 0, 5, 3),
            proc("P2", 1, 3, 2),
            proc("P3", 2, 1, 1),
        ];
        let result = priority_scheduling(&processes, true).unwrap();
        assert_eq!(result.timeline.concise(), "P1:0-1,P2:1-2,P3:2-3,P2:3-5,P1:5-9");
        let waits: Vec<i64> = result.metrics.rows().map(|m| m.waiting_time).collect();
        assert_eq!(waits, vec![4, 1, 0]);
    }

    #[test]
    fn test_preemptive_idle_then_resume() {
        let processes = vec![proc("P1", 2, 2, 1), proc("P2", 6, 1, 1)];
        let result = priority_scheduling(&processes, true).unwrap();
        let segments = result.timeline.segments();
        assert!(segments[0].is_idle());
        assert!(segments[2].is_idle());
        assert_eq!((segments[2].start_time, segments[2].end_time), (4, 6));
        assert_eq!(result.timeline.makespan(), 7);
    }

    #[test]
    fn test_starvation_is_not_prevented() {
        let processes = vec![
            proc("low", 0, 2, 9),
            proc("h1", 0, 3, 1),
            proc("h2", 3, 3, 1),
            proc("h3", 6, 3, 1),
        ];
        let result = priority_scheduling(&processes, true).unwrap();
        let low = result.metrics.get(&ProcessId::new("low")).unwrap();
        assert_eq!(low.response_time, 9);
        assert_eq!(low.completion_time, 11);
    }

    #[test]
    fn test_missing_priority_rejected() {
        let processes = vec![Process::new(0, 3).with_id("P1"), proc("P2", 0, 1, 1)];
        let errors = priority_scheduling(&processes, false).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidParameter);
        assert!(errors[0].message.contains("'P1'"));
    }

    #[test]
    fn test_reports_process_and_priority_errors() {
        let processes = vec![proc("P1", -1, 3, 1), proc("P2", 0, 1, -2)];
        let errors = priority_scheduling(&processes, true).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidProcess);
        assert!(errors[1].message.contains("'P2'"));
    }

    #[test]
    fn test_policy_names() {
        assert_eq!(PriorityScheduling::new(true).name(), "Priority (preemptive)");
        assert_eq!(PriorityScheduling::new(false).name(), "Priority");
    }
}
