//! Execution timeline model.
//!
//! A timeline is the ordered sequence of CPU segments produced by one
//! simulation run, idle gaps included. Segments tile `[0, makespan)`
//! exactly: each one starts where the previous one ended.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ProcessId;

/// What the CPU is doing during a segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    /// No process was ready.
    Idle,
    /// The process with this id was running.
    Process(ProcessId),
}

impl Subject {
    /// The running process, if any.
    pub fn process_id(&self) -> Option<&ProcessId> {
        match self {
            Subject::Idle => None,
            Subject::Process(id) => Some(id),
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subject::Idle => f.write_str("Idle"),
            Subject::Process(id) => write!(f, "{id}"),
        }
    }
}

/// A contiguous interval `[start_time, end_time)` of CPU time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Process that ran, or idle.
    pub subject: Subject,
    /// Start time (inclusive).
    pub start_time: i64,
    /// End time (exclusive). Always greater than `start_time`.
    pub end_time: i64,
}

impl ExecutionSegment {
    /// Creates a segment for a running process.
    pub fn running(id: ProcessId, start_time: i64, end_time: i64) -> Self {
        Self {
            subject: Subject::Process(id),
            start_time,
            end_time,
        }
    }

    /// Creates an idle segment.
    pub fn idle(start_time: i64, end_time: i64) -> Self {
        Self {
            subject: Subject::Idle,
            start_time,
            end_time,
        }
    }

    /// Length of the segment.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end_time - self.start_time
    }

    /// Whether the CPU was idle.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.subject == Subject::Idle
    }
}

/// Ordered execution segments of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timeline {
    segments: Vec<ExecutionSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment.
    ///
    /// # Panics
    /// If the segment is empty or does not start where the timeline ends.
    pub(crate) fn push(&mut self, segment: ExecutionSegment) {
        assert!(
            segment.end_time > segment.start_time,
            "empty segment {}..{} for {}",
            segment.start_time,
            segment.end_time,
            segment.subject
        );
        assert_eq!(
            segment.start_time,
            self.makespan(),
            "segment for {} leaves a gap or overlaps",
            segment.subject
        );
        log::trace!(
            "segment {}: {}-{}",
            segment.subject,
            segment.start_time,
            segment.end_time
        );
        self.segments.push(segment);
    }

    /// Appends a segment, or extends the last one when it belongs to the
    /// same subject.
    pub(crate) fn push_merged(&mut self, segment: ExecutionSegment) {
        match self.segments.last_mut() {
            Some(last) if last.subject == segment.subject && last.end_time == segment.start_time => {
                assert!(segment.end_time > segment.start_time, "empty merged slice");
                log::trace!(
                    "extend {}: {}-{}",
                    last.subject,
                    last.start_time,
                    segment.end_time
                );
                last.end_time = segment.end_time;
            }
            _ => self.push(segment),
        }
    }

    /// All segments in time order.
    pub fn segments(&self) -> &[ExecutionSegment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the timeline has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End of the last segment (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.segments.last().map_or(0, |s| s.end_time)
    }

    /// Total time spent running processes.
    pub fn busy_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| !s.is_idle())
            .map(ExecutionSegment::duration)
            .sum()
    }

    /// Total time the CPU was idle.
    pub fn idle_time(&self) -> i64 {
        self.segments
            .iter()
            .filter(|s| s.is_idle())
            .map(ExecutionSegment::duration)
            .sum()
    }

    /// Segments in which the given process ran.
    pub fn segments_for(&self, id: &ProcessId) -> Vec<&ExecutionSegment> {
        self.segments
            .iter()
            .filter(|s| s.subject.process_id() == Some(id))
            .collect()
    }

    /// First instant at which the given process ran.
    pub fn first_start_of(&self, id: &ProcessId) -> Option<i64> {
        self.segments
            .iter()
            .find(|s| s.subject.process_id() == Some(id))
            .map(|s| s.start_time)
    }

    /// Whether segments start at 0 and each starts where the previous ended.
    pub fn is_contiguous(&self) -> bool {
        let mut cursor = 0;
        for s in &self.segments {
            if s.start_time != cursor || s.end_time <= s.start_time {
                return false;
            }
            cursor = s.end_time;
        }
        true
    }

    /// Concise textual form: `id:start-end` for every non-idle segment,
    /// sorted by start time and joined with commas.
    ///
    /// ```
    /// use u_cpusched::models::Process;
    /// use u_cpusched::scheduler::fcfs;
    ///
    /// let processes = vec![
    ///     Process::new(2, 3).with_id("P1"),
    ///     Process::new(0, 2).with_id("P2"),
    /// ];
    /// let result = fcfs(&processes).unwrap();
    /// assert_eq!(result.timeline.concise(), "P2:0-2,P1:2-5");
    /// ```
    pub fn concise(&self) -> String {
        let mut parts: Vec<&ExecutionSegment> =
            self.segments.iter().filter(|s| !s.is_idle()).collect();
        parts.sort_by_key(|s| s.start_time);
        parts
            .iter()
            .map(|s| format!("{}:{}-{}", s.subject, s.start_time, s.end_time))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionSegment;
    type IntoIter = std::slice::Iter<'a, ExecutionSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
