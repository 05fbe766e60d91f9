//! Run quality metrics (KPIs).
//!
//! Summarizes a finished run for side-by-side comparison of algorithms.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | End of the last segment |
//! | Busy / Idle time | Sum of process / idle segment lengths |
//! | CPU Utilization | busy / makespan |
//! | Throughput | processes / makespan |
//! | Avg Turnaround | Mean(completion - arrival) |
//! | Avg Waiting | Mean(turnaround - burst) |
//! | Avg Response | Mean(first start - arrival) |
//! | Max Waiting | Largest single waiting time |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use crate::models::RunResult;

/// Summary indicators for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunKpi {
    /// End of the last segment.
    pub makespan: i64,
    /// Time spent running processes.
    pub busy_time: i64,
    /// Time the CPU sat idle.
    pub idle_time: i64,
    /// Fraction of the makespan spent busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Largest waiting time of any process.
    pub max_waiting_time: i64,
    /// Number of timeline segments, idle included.
    pub segment_count: usize,
}

impl RunKpi {
    /// Computes KPIs from a run result.
    pub fn calculate(result: &RunResult) -> Self {
        let timeline = &result.timeline;
        let metrics = &result.metrics;
        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();

        let (cpu_utilization, throughput) = if makespan > 0 {
            (
                busy_time as f64 / makespan as f64,
                metrics.len() as f64 / makespan as f64,
            )
        } else {
            (0.0, 0.0)
        };

        Self {
            makespan,
            busy_time,
            idle_time: timeline.idle_time(),
            cpu_utilization,
            throughput,
            avg_turnaround_time: metrics.average_turnaround_time(),
            avg_waiting_time: metrics.average_waiting_time(),
            avg_response_time: metrics.average_response_time(),
            max_waiting_time: metrics.max_waiting_time(),
            segment_count: timeline.len(),
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::scheduler::{fcfs, round_robin};

    #[test]
    fn test_kpi_basic() {
        let processes = vec![
            Process::new(0, 5).with_id("P1"),
            Process::new(1, 3).with_id("P2"),
            Process::new(2, 8).with_id("P3"),
        ];
        let kpi = RunKpi::calculate(&fcfs(&processes).unwrap());
        assert_eq!(kpi.makespan, 16);
        assert_eq!(kpi.busy_time, 16);
        assert_eq!(kpi.idle_time, 0);
        assert!((kpi.cpu_utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 3.0 / 16.0).abs() < 1e-10);
        assert!((kpi.avg_waiting_time - 10.0 / 3.0).abs() < 1e-10);
        assert!((kpi.avg_turnaround_time - 26.0 / 3.0).abs() < 1e-10);
        assert_eq!(kpi.max_waiting_time, 6);
        assert_eq!(kpi.segment_count, 3);
    }

    #[test]
    fn test_kpi_with_idle() {
        let processes = vec![
            Process::new(2, 2).with_id("P1"),
            Process::new(8, 4).with_id("P2"),
        ];
        let kpi = RunKpi::calculate(&fcfs(&processes).unwrap());
        assert_eq!(kpi.makespan, 12);
        assert_eq!(kpi.idle_time, 6);
        assert!((kpi.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((kpi.avg_waiting_time - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_response_time_round_robin() {
        let processes = vec![
            Process::new(0, 4).with_id("P1"),
            Process::new(0, 4).with_id("P2"),
        ];
        let kpi = RunKpi::calculate(&round_robin(&processes, 1).unwrap());
        // P1 starts at 0, P2 at 1
        assert!((kpi.avg_response_time - 0.5).abs() < 1e-10);
        assert_eq!(kpi.segment_count, 8);
    }

    #[test]
    fn test_meets_thresholds() {
        let processes = vec![Process::new(1, 1).with_id("P1")];
        let kpi = RunKpi::calculate(&fcfs(&processes).unwrap());
        assert!(kpi.meets_thresholds(0.0, 0.5));
        assert!(!kpi.meets_thresholds(0.0, 0.6));
    }
}
