//! Deterministic CPU scheduling simulator.
//!
//! Simulates classic single-CPU scheduling policies over a static process
//! set and reports, per run, the execution timeline (idle gaps included)
//! and per-process completion, turnaround, waiting and response times.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Timeline`, `ExecutionSegment`,
//!   `ProcessMetrics`, `MetricsTable`, `RunResult`
//! - **`validation`**: Input checks and id normalization
//! - **`scheduler`**: FCFS, SJF, Round Robin and Priority policies, the
//!   `Algorithm` selector, KPIs and multi-policy comparison
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::Process;
//! use u_cpusched::scheduler::sjf;
//!
//! let processes = vec![
//!     Process::new(0, 6).with_id("P1"),
//!     Process::new(0, 8).with_id("P2"),
//!     Process::new(0, 7).with_id("P3"),
//!     Process::new(0, 3).with_id("P4"),
//! ];
//! let result = sjf(&processes).unwrap();
//! assert_eq!(result.timeline.concise(), "P4:0-3,P1:3-9,P3:9-16,P2:16-24");
//! assert_eq!(result.metrics.average_waiting_time(), 7.0);
//! ```
//!
//! # Model
//!
//! Time is discrete (integer ticks), decisions are instantaneous, and there
//! is no context-switch cost. All processes are known before the run starts.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
