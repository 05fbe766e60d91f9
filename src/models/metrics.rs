//! Per-process metrics and the run result.
//!
//! # Derivation
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion - arrival |
//! | Waiting | turnaround - burst |
//! | Response | first start - arrival |
//!
//! The same derivation is applied after every scheduling algorithm; the
//! algorithms only decide completion times and the timeline.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Process, ProcessId, Timeline};

/// Performance figures for one process after a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process identifier.
    pub id: ProcessId,
    /// Arrival time.
    pub arrival_time: i64,
    /// CPU time required.
    pub burst_time: i64,
    /// Priority, if the process carried one.
    pub priority: Option<i32>,
    /// Instant the last unit of work finished.
    pub completion_time: i64,
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// First start minus arrival.
    pub response_time: i64,
}

impl ProcessMetrics {
    /// Derives metrics from a process, its completion time and first start.
    ///
    /// # Panics
    /// If the figures violate `turnaround >= burst` or put the first start
    /// before arrival; either means the algorithm broke its contract.
    pub(crate) fn derive(process: &Process, completion_time: i64, first_start: i64) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        let waiting_time = turnaround_time - process.burst_time;
        let response_time = first_start - process.arrival_time;
        assert!(
            waiting_time >= 0 && response_time >= 0,
            "process {} completed at {completion_time} (first start {first_start}) \
             before it could have",
            process.pid()
        );
        Self {
            id: process.pid().clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            completion_time,
            turnaround_time,
            waiting_time,
            response_time,
        }
    }
}

/// Metrics for every process of a run, keyed by id in natural order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricsTable {
    rows: BTreeMap<ProcessId, ProcessMetrics>,
}

impl MetricsTable {
    /// Builds the table from normalized processes, their completion times
    /// (same order), and the run's timeline.
    pub(crate) fn derive(processes: &[Process], completion: &[i64], timeline: &Timeline) -> Self {
        assert_eq!(processes.len(), completion.len());
        let rows = processes
            .iter()
            .zip(completion)
            .map(|(p, &done)| {
                let first_start = match timeline.first_start_of(p.pid()) {
                    Some(t) => t,
                    None => unreachable!("process {} never ran", p.pid()),
                };
                let m = ProcessMetrics::derive(p, done, first_start);
                (m.id.clone(), m)
            })
            .collect();
        Self { rows }
    }

    /// Metrics for one process.
    pub fn get(&self, id: &ProcessId) -> Option<&ProcessMetrics> {
        self.rows.get(id)
    }

    /// Rows in id order.
    pub fn rows(&self) -> impl Iterator<Item = &ProcessMetrics> {
        self.rows.values()
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Mean turnaround time (0.0 when empty).
    pub fn average_turnaround_time(&self) -> f64 {
        self.mean_of(|m| m.turnaround_time)
    }

    /// Mean waiting time (0.0 when empty).
    pub fn average_waiting_time(&self) -> f64 {
        self.mean_of(|m| m.waiting_time)
    }

    /// Mean response time (0.0 when empty).
    pub fn average_response_time(&self) -> f64 {
        self.mean_of(|m| m.response_time)
    }

    /// Largest waiting time of any single process.
    pub fn max_waiting_time(&self) -> i64 {
        self.rows.values().map(|m| m.waiting_time).max().unwrap_or(0)
    }

    fn mean_of(&self, f: impl Fn(&ProcessMetrics) -> i64) -> f64 {
        if self.rows.is_empty() {
            return 0.0;
        }
        let total: i128 = self.rows.values().map(|m| i128::from(f(m))).sum();
        total as f64 / self.rows.len() as f64
    }
}

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunResult {
    /// Execution segments in time order.
    pub timeline: Timeline,
    /// Per-process metrics.
    pub metrics: MetricsTable,
}

impl RunResult {
    /// Pairs a finished timeline with the metrics derived from it.
    pub(crate) fn new(processes: &[Process], completion: &[i64], timeline: Timeline) -> Self {
        let metrics = MetricsTable::derive(processes, completion, &timeline);
        Self { timeline, metrics }
    }
}
