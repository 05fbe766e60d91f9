//! CPU scheduling domain models.
//!
//! Provides the data types consumed and produced by the scheduling engine.
//! Renderers (Gantt charts, tables) read only these types.
//!
//! # Data Flow
//!
//! | Stage | Type |
//! |-------|------|
//! | Input | `Process` |
//! | Timeline | `ExecutionSegment`, `Subject`, `Timeline` |
//! | Metrics | `ProcessMetrics`, `MetricsTable` |
//! | Output | `RunResult` |

mod metrics;
mod process;
mod timeline;

pub use metrics::{MetricsTable, ProcessMetrics, RunResult};
pub use process::{Process, ProcessId};
pub use timeline::{ExecutionSegment, Subject, Timeline};
