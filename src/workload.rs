//! Random process-set generation.
//!
//! Produces reproducible workloads for batch comparisons and property
//! checks. The same seed always yields the same process set.
//!
//! # Usage
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use u_cpusched::workload::{WorkloadConfig, random_processes};
//!
//! let config = WorkloadConfig::new(5).with_max_arrival(10);
//! let mut rng = SmallRng::seed_from_u64(7);
//! let processes = random_processes(&config, &mut rng);
//! assert_eq!(processes.len(), 5);
//! ```

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::models::{Process, ProcessId};

/// Shape of a generated workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Number of processes.
    pub count: usize,
    /// Latest arrival time (arrivals are uniform in `0..=max_arrival`).
    pub max_arrival: i64,
    /// Inclusive burst time range; the lower bound is at least 1.
    pub burst_range: (i64, i64),
    /// Inclusive priority range.
    pub priority_range: (i32, i32),
}

impl WorkloadConfig {
    /// Creates a config for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst time range.
    pub fn with_burst_range(mut self, min: i64, max: i64) -> Self {
        self.burst_range = (min, max);
        self
    }

    /// Sets the priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.priority_range = (min, max);
        self
    }
}

impl Default for WorkloadConfig {
    fn default() -> Self {
        Self {
            count: 8,
            max_arrival: 20,
            burst_range: (1, 10),
            priority_range: (1, 5),
        }
    }
}

/// Generates a process set with ids `P1..Pn`, arrival times, burst times
/// and priorities drawn uniformly from the configured ranges.
///
/// Ranges are clamped so the result always passes validation: arrivals
/// are >= 0, bursts >= 1, priorities >= 0.
pub fn random_processes<R: Rng>(config: &WorkloadConfig, rng: &mut R) -> Vec<Process> {
    let max_arrival = config.max_arrival.max(0);
    let burst_lo = config.burst_range.0.max(1);
    let burst_hi = config.burst_range.1.max(burst_lo);
    let prio_lo = config.priority_range.0.max(0);
    let prio_hi = config.priority_range.1.max(prio_lo);

    (1..=config.count)
        .map(|n| {
            Process::new(
                rng.random_range(0..=max_arrival),
                rng.random_range(burst_lo..=burst_hi),
            )
            .with_id(ProcessId::sequential(n))
            .with_priority(rng.random_range(prio_lo..=prio_hi))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{validate_priorities, validate_processes};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_generated_processes_are_valid() {
        let config = WorkloadConfig::new(50)
            .with_max_arrival(30)
            .with_burst_range(2, 6)
            .with_priority_range(0, 3);
        let mut rng = SmallRng::seed_from_u64(42);
        let processes = random_processes(&config, &mut rng);

        assert_eq!(processes.len(), 50);
        assert!(validate_processes(&processes).is_ok());
        assert!(validate_priorities(&processes).is_ok());
        for p in &processes {
            assert!((0..=30).contains(&p.arrival_time));
            assert!((2..=6).contains(&p.burst_time));
        }
        assert_eq!(processes[49].id, Some(ProcessId::new("P50")));
    }

    #[test]
    fn test_same_seed_same_workload() {
        let config = WorkloadConfig::default();
        let a = random_processes(&config, &mut SmallRng::seed_from_u64(1));
        let b = random_processes(&config, &mut SmallRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_ranges_are_clamped() {
        let config = WorkloadConfig::new(10)
            .with_max_arrival(-5)
            .with_burst_range(0, -1)
            .with_priority_range(-3, -4);
        let processes = random_processes(&config, &mut SmallRng::seed_from_u64(3));
        assert!(validate_processes(&processes).is_ok());
        assert!(validate_priorities(&processes).is_ok());
        assert!(processes.iter().all(|p| p.arrival_time == 0 && p.burst_time == 1));
    }

    #[test]
    fn test_empty_workload() {
        let processes = random_processes(&WorkloadConfig::new(0), &mut SmallRng::seed_from_u64(0));
        assert!(processes.is_empty());
    }
}
