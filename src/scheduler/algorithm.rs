//! Algorithm selection and simulation requests.
//!
//! [`Algorithm`] is the serializable tag a front end stores; it dispatches
//! to the matching [`SchedulingPolicy`]. [`SimulationRequest`] bundles a
//! process snapshot with the chosen algorithm.

use serde::{Deserialize, Serialize};

use super::{
    Fcfs, PriorityScheduling, RoundRobin, RunKpi, SchedulingPolicy, SimulationResult, Sjf,
};
use crate::models::{Process, RunResult};
use crate::validation::ValidationResult;

/// A scheduling algorithm and its parameters.
///
/// # Serialized form
/// ```
/// use u_cpusched::scheduler::Algorithm;
///
/// let rr: Algorithm = serde_json::from_str(r#"{"type":"round_robin","time_quantum":2}"#).unwrap();
/// assert_eq!(rr, Algorithm::RoundRobin { time_quantum: 2 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Serve.
    Fcfs,
    /// Shortest Job First, non-preemptive.
    Sjf,
    /// Round Robin with a fixed quantum.
    RoundRobin {
        /// Time quantum (> 0).
        time_quantum: i64,
    },
    /// Priority scheduling.
    Priority {
        /// Whether arrivals may preempt the running process.
        #[serde(default)]
        preemptive: bool,
    },
}

impl Algorithm {
    /// Short display name of the algorithm.
    pub fn name(&self) -> &'static str {
        self.with_policy(|p| p.name())
    }

    /// Simulates this algorithm over `processes`.
    pub fn run(&self, processes: &[Process]) -> SimulationResult {
        self.with_policy(|p| p.simulate(processes))
    }

    fn with_policy<T>(&self, f: impl FnOnce(&dyn SchedulingPolicy) -> T) -> T {
        match *self {
            Algorithm::Fcfs => f(&Fcfs),
            Algorithm::Sjf => f(&Sjf),
            Algorithm::RoundRobin { time_quantum } => f(&RoundRobin::new(time_quantum)),
            Algorithm::Priority { preemptive } => f(&PriorityScheduling::new(preemptive)),
        }
    }
}

/// A process snapshot plus the algorithm to run over it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Algorithm to use.
    pub algorithm: Algorithm,
}

impl SimulationRequest {
    /// Creates a new request.
    pub fn new(processes: Vec<Process>, algorithm: Algorithm) -> Self {
        Self {
            processes,
            algorithm,
        }
    }

    /// Runs the request.
    pub fn run(&self) -> SimulationResult {
        self.algorithm.run(&self.processes)
    }
}

/// Outcome of one algorithm inside a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    /// Algorithm that produced the result.
    pub algorithm: Algorithm,
    /// Timeline and metrics.
    pub result: RunResult,
    /// Summary indicators.
    pub kpi: RunKpi,
}

/// Runs several algorithms over the same process set.
///
/// Every run works on its own copy of the input. Fails on the first
/// algorithm whose validation fails.
pub fn compare(processes: &[Process], algorithms: &[Algorithm]) -> ValidationResult<Vec<Comparison>> {
    algorithms
        .iter()
        .map(|&algorithm| -> ValidationResult<Comparison> {
            let result = algorithm.run(processes)?;
            let kpi = RunKpi::calculate(&result);
            log::debug!(
                "{}: avg waiting {:.2}, avg turnaround {:.2}",
                algorithm.name(),
                kpi.avg_waiting_time,
                kpi.avg_turnaround_time
            );
            Ok(Comparison {
                algorithm,
                result,
                kpi,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new(0, 6).with_id("P1").with_priority(3),
            Process::new(0, 8).with_id("P2").with_priority(1),
            Process::new(0, 7).with_id("P3").with_priority(4),
            Process::new(0, 3).with_id("P4").with_priority(2),
        ]
    }

    #[test]
    fn test_algorithm_dispatch() {
        let processes = sample_processes();
        assert_eq!(
            Algorithm::Sjf.run(&processes).unwrap(),
            crate::scheduler::sjf(&processes).unwrap()
        );
        assert_eq!(
            Algorithm::Priority { preemptive: false }
                .run(&processes)
                .unwrap()
                .timeline
                .concise(),
            "P2:0-8,P4:8-11,P1:11-17,P3:17-24"
        );
    }

    #[test]
    fn test_algorithm_names() {
        assert_eq!(Algorithm::Fcfs.name(), "FCFS");
        assert_eq!(Algorithm::RoundRobin { time_quantum: 2 }.name(), "RR");
        assert_eq!(
            Algorithm::Priority { preemptive: true }.name(),
            "Priority (preemptive)"
        );
    }

    #[test]
    fn test_request_from_json() {
        let json = r#"{
            "processes": [
                {"id": "P1", "arrival_time": 0, "burst_time": 5},
                {"id": "P2", "arrival_time": 1, "burst_time": 3},
                {"id": "P3", "arrival_time": 2, "burst_time": 8}
            ],
            "algorithm": {"type": "fcfs"}
        }"#;
        let request: SimulationRequest = serde_json::from_str(json).unwrap();
        let result = request.run().unwrap();
        assert_eq!(result.timeline.concise(), "P1:0-5,P2:5-8,P3:8-16");
    }

    #[test]
    fn test_priority_preemptive_defaults_to_false() {
        let algo: Algorithm = serde_json::from_str(r#"{"type":"priority"}"#).unwrap();
        assert_eq!(algo, Algorithm::Priority { preemptive: false });
    }

    #[test]
    fn test_request_roundtrip_through_json() {
        let request = SimulationRequest::new(
            sample_processes(),
            Algorithm::RoundRobin { time_quantum: 4 },
        );
        let json = serde_json::to_string(&request).unwrap();
        let back: SimulationRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.run().unwrap(), request.run().unwrap());
    }

    #[test]
    fn test_result_serializes() {
        let result = Algorithm::Fcfs.run(&sample_processes()).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["metrics"]["P4"]["waiting_time"], 21);
        assert_eq!(json["timeline"][0]["subject"]["process"], "P1");
    }

    #[test]
    fn test_compare_algorithms() {
        let processes = sample_processes();
        let algorithms = [
            Algorithm::Fcfs,
            Algorithm::Sjf,
            Algorithm::RoundRobin { time_quantum: 4 },
            Algorithm::Priority { preemptive: true },
        ];
        let comparisons = compare(&processes, &algorithms).unwrap();
        assert_eq!(comparisons.len(), 4);

        // SJF minimizes mean waiting time for a batch arriving together
        let sjf_wait = comparisons[1].kpi.avg_waiting_time;
        for c in &comparisons {
            assert!(sjf_wait <= c.kpi.avg_waiting_time + 1e-10);
            assert_eq!(c.kpi.makespan, 24);
        }
    }

    #[test]
    fn test_compare_propagates_validation() {
        let processes = vec![Process::new(0, 3)];
        let errors = compare(&processes, &[Algorithm::Fcfs, Algorithm::Priority { preemptive: false }])
            .unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidParameter);
    }
}
