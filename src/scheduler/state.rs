//! Run-local simulation state shared by all policies.
//!
//! Holds the clock, remaining work, completion times and the timeline
//! under construction. Each invocation builds its own `RunState`; nothing
//! here outlives a run.

use crate::models::{ExecutionSegment, Process, RunResult, Timeline};

pub(crate) struct RunState<'a> {
    processes: &'a [Process],
    remaining: Vec<i64>,
    completion: Vec<Option<i64>>,
    clock: i64,
    timeline: Timeline,
}

impl<'a> RunState<'a> {
    /// Starts a run at t=0 over normalized processes.
    pub(crate) fn new(processes: &'a [Process]) -> Self {
        Self {
            processes,
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            completion: vec![None; processes.len()],
            clock: 0,
            timeline: Timeline::new(),
        }
    }

    pub(crate) fn processes(&self) -> &'a [Process] {
        self.processes
    }

    pub(crate) fn clock(&self) -> i64 {
        self.clock
    }

    pub(crate) fn remaining(&self, i: usize) -> i64 {
        self.remaining[i]
    }

    pub(crate) fn is_finished(&self, i: usize) -> bool {
        self.remaining[i] == 0
    }

    pub(crate) fn all_finished(&self) -> bool {
        self.remaining.iter().all(|&r| r == 0)
    }

    /// Unfinished processes that have arrived by the current clock.
    pub(crate) fn ready(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.processes.len())
            .filter(move |&i| !self.is_finished(i) && self.processes[i].arrival_time <= self.clock)
    }

    /// Earliest arrival strictly after the clock among unfinished processes,
    /// ignoring `except`.
    pub(crate) fn next_arrival_after_clock(&self, except: Option<usize>) -> Option<i64> {
        (0..self.processes.len())
            .filter(|&i| Some(i) != except && !self.is_finished(i))
            .map(|i| self.processes[i].arrival_time)
            .filter(|&a| a > self.clock)
            .min()
    }

    /// Emits an idle segment up to the next arrival and advances the clock.
    ///
    /// # Panics
    /// If no unfinished process arrives later, or if the clock would not
    /// move forward. Callers only idle when nothing is ready and work
    /// remains, so either case is a logic error.
    pub(crate) fn idle_until_next_arrival(&mut self) -> i64 {
        let next = (0..self.processes.len())
            .filter(|&i| !self.is_finished(i))
            .map(|i| self.processes[i].arrival_time)
            .min();
        let Some(next) = next else {
            unreachable!("idle requested at t={} with no work left", self.clock);
        };
        assert!(
            next > self.clock,
            "idle skip must advance the clock (t={}, next arrival {next})",
            self.clock
        );
        self.timeline.push(ExecutionSegment::idle(self.clock, next));
        self.clock = next;
        next
    }

    /// Runs process `i` for `duration` ticks as a new segment.
    ///
    /// Returns `true` when the process completed.
    pub(crate) fn execute(&mut self, i: usize, duration: i64) -> bool {
        let segment = self.slice(i, duration);
        self.timeline.push(segment);
        self.advance(i, duration)
    }

    /// Runs process `i` for `duration` ticks, extending the previous
    /// segment when it belongs to the same process.
    pub(crate) fn execute_merged(&mut self, i: usize, duration: i64) -> bool {
        let segment = self.slice(i, duration);
        self.timeline.push_merged(segment);
        self.advance(i, duration)
    }

    fn slice(&self, i: usize, duration: i64) -> ExecutionSegment {
        assert!(
            duration > 0 && duration <= self.remaining[i],
            "invalid slice of {duration} for {} with {} remaining",
            self.processes[i].pid(),
            self.remaining[i]
        );
        ExecutionSegment::running(
            self.processes[i].pid().clone(),
            self.clock,
            self.clock + duration,
        )
    }

    fn advance(&mut self, i: usize, duration: i64) -> bool {
        self.clock += duration;
        self.remaining[i] -= duration;
        if self.remaining[i] == 0 {
            self.completion[i] = Some(self.clock);
            log::debug!("{} completed at t={}", self.processes[i].pid(), self.clock);
            true
        } else {
            false
        }
    }

    /// Closes the run and derives metrics.
    ///
    /// # Panics
    /// If any process did not complete.
    pub(crate) fn finish(self) -> RunResult {
        let completion: Vec<i64> = self
            .completion
            .iter()
            .zip(self.processes)
            .map(|(c, p)| match c {
                Some(t) => *t,
                None => unreachable!("run finished with {} incomplete", p.pid()),
            })
            .collect();
        RunResult::new(self.processes, &completion, self.timeline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subject;

    fn processes() -> Vec<Process> {
        vec![
            Process::new(2, 3).with_id("P1"),
            Process::new(4, 1).with_id("P2"),
        ]
    }

    #[test]
    fn test_idle_then_execute() {
        let ps = processes();
        let mut state = RunState::new(&ps);
        assert_eq!(state.ready().count(), 0);
        assert_eq!(state.idle_until_next_arrival(), 2);
        assert_eq!(state.ready().collect::<Vec<_>>(), vec![0]);
        assert!(state.execute(0, 3));
        assert_eq!(state.clock(), 5);
        assert!(state.is_finished(0));
        assert!(state.execute(1, 1));
        assert!(state.all_finished());

        let result = state.finish();
        assert_eq!(result.timeline.concise(), "P1:2-5,P2:5-6");
        assert_eq!(result.timeline.segments()[0].subject, Subject::Idle);
    }

    #[test]
    fn test_next_arrival_after_clock() {
        let ps = processes();
        let state = RunState::new(&ps);
        assert_eq!(state.next_arrival_after_clock(None), Some(2));
        assert_eq!(state.next_arrival_after_clock(Some(0)), Some(4));
    }

    #[test]
    fn test_execute_merged() {
        let ps = vec![Process::new(0, 4).with_id("P1")];
        let mut state = RunState::new(&ps);
        assert!(!state.execute_merged(0, 1));
        assert_eq!(state.remaining(0), 3);
        assert!(state.execute_merged(0, 3));
        assert_eq!(state.finish().timeline.len(), 1);
    }

    #[test]
    #[should_panic(expected = "invalid slice")]
    fn test_execute_beyond_remaining() {
        let ps = vec![Process::new(0, 2).with_id("P1")];
        let mut state = RunState::new(&ps);
        state.execute(0, 3);
    }

    #[test]
    #[should_panic(expected = "advance the clock")]
    fn test_idle_without_progress() {
        let ps = vec![Process::new(0, 2).with_id("P1")];
        let mut state = RunState::new(&ps);
        state.idle_until_next_arrival();
    }
}
