//! Process model.
//!
//! A process is a unit of CPU work: it becomes eligible at its arrival
//! time and needs `burst_time` units of CPU to complete.
//!
//! # Time Representation
//! All times are integer simulation ticks relative to t=0. The consumer
//! decides what one tick means.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Identifier of a process.
///
/// # Ordering
/// Ids compare in natural order: the non-digit prefix first, then the
/// trailing number, then the raw string. `P2` sorts before `P10`, which is
/// what the sequential ids assigned by input forms expect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessId(String);

impl ProcessId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The sequential id used for the `n`-th process (1-based): `P{n}`.
    pub fn sequential(n: usize) -> Self {
        Self(format!("P{n}"))
    }

    /// Returns the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits into (prefix, numeric suffix).
    fn natural_key(&self) -> (&str, Option<u64>) {
        let split = self.0.trim_end_matches(|c: char| c.is_ascii_digit()).len();
        let (prefix, digits) = self.0.split_at(split);
        (prefix, digits.parse().ok())
    }
}

impl Ord for ProcessId {
    fn cmp(&self, other: &Self) -> Ordering {
        let (pa, na) = self.natural_key();
        let (pb, nb) = other.natural_key();
        pa.cmp(pb)
            .then_with(|| na.cmp(&nb))
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for ProcessId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProcessId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ProcessId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A process to be scheduled.
///
/// Immutable once a simulation starts: every entry point copies the input
/// into a run-local, normalized set before simulating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier. `None` = assigned by the normalizer.
    #[serde(default)]
    pub id: Option<ProcessId>,
    /// Instant at which the process becomes eligible to run (>= 0).
    pub arrival_time: i64,
    /// Total CPU time required (> 0).
    pub burst_time: i64,
    /// Scheduling priority (lower = more important). Only read by
    /// priority scheduling.
    #[serde(default)]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process without an id or priority.
    pub fn new(arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id: None,
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the process id.
    pub fn with_id(mut self, id: impl Into<ProcessId>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns the assigned id.
    ///
    /// # Panics
    /// If the process has not been normalized. Every scheduler normalizes
    /// its input before simulating.
    pub(crate) fn pid(&self) -> &ProcessId {
        match &self.id {
            Some(id) => id,
            None => unreachable!("process id read before normalization"),
        }
    }

    /// Deterministic arrival order key: arrival time, then id.
    pub(crate) fn arrival_order(&self, other: &Self) -> Ordering {
        self.arrival_time
            .cmp(&other.arrival_time)
            .then_with(|| self.pid().cmp(other.pid()))
    }
}
