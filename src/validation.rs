//! Input validation and normalization for simulation runs.
//!
//! Checks a process set before any simulation state is built. Detects:
//! - Empty input
//! - Negative arrival times and non-positive burst times
//! - Duplicate or empty ids
//! - Invalid algorithm parameters (time quantum, priorities)
//!
//! All problems are collected, not just the first one. Normalization then
//! produces the run-local copy the schedulers work on, with every process
//! carrying an id.

use std::collections::HashSet;
use std::fmt;

use crate::models::{Process, ProcessId};

/// Validation result.
pub type ValidationResult<T = ()> = Result<T, Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The process set is empty.
    EmptyInput,
    /// An algorithm parameter is out of range or missing.
    InvalidParameter,
    /// A process record is malformed.
    InvalidProcess,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Describes a process in messages, by id or by position.
fn label(index: usize, process: &Process) -> String {
    match &process.id {
        Some(id) => format!("'{id}'"),
        None => format!("#{}", index + 1),
    }
}

/// Validates a process set.
///
/// Checks:
/// 1. The set is not empty (if it is, nothing else is checked)
/// 2. Arrival times are >= 0
/// 3. Burst times are > 0
/// 4. Caller-supplied ids are non-empty and unique
/// 5. The latest arrival plus the total burst fits in an `i64` clock
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    if processes.is_empty() {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "Process set is empty",
        )]);
    }

    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (i, p) in processes.iter().enumerate() {
        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcess,
                format!(
                    "Process {} has negative arrival time {}",
                    label(i, p),
                    p.arrival_time
                ),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidProcess,
                format!(
                    "Process {} has non-positive burst time {}",
                    label(i, p),
                    p.burst_time
                ),
            ));
        }

        if let Some(id) = &p.id {
            if id.as_str().is_empty() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidProcess,
                    format!("Process #{} has an empty id", i + 1),
                ));
            } else if !ids.insert(id) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidProcess,
                    format!("Duplicate process ID: {id}"),
                ));
            }
        }
    }

    if errors.is_empty() && time_horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidProcess,
            "Time horizon overflows: latest arrival plus total burst exceeds i64::MAX",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest instant any run over `processes` can reach, or `None` on overflow.
fn time_horizon(processes: &[Process]) -> Option<i64> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max()?;
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
}

/// Validates a round-robin time quantum (> 0).
pub fn validate_quantum(time_quantum: i64) -> ValidationResult {
    if time_quantum <= 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidParameter,
            format!("Time quantum must be positive, got {time_quantum}"),
        )]);
    }
    Ok(())
}

/// Validates that every process carries a usable priority (present, >= 0).
pub fn validate_priorities(processes: &[Process]) -> ValidationResult {
    let errors: Vec<ValidationError> = processes
        .iter()
        .enumerate()
        .filter_map(|(i, p)| match p.priority {
            None => Some(ValidationError::new(
                ValidationErrorKind::InvalidParameter,
                format!("Process {} has no priority", label(i, p)),
            )),
            Some(prio) if prio < 0 => Some(ValidationError::new(
                ValidationErrorKind::InvalidParameter,
                format!("Process {} has negative priority {prio}", label(i, p)),
            )),
            Some(_) => None,
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a process set and returns the run-local copy with ids filled in.
///
/// A process without an id gets `P{position}` (1-based). When that id is
/// already taken by a caller-supplied one, the next free number is used.
pub fn normalize_processes(processes: &[Process]) -> ValidationResult<Vec<Process>> {
    validate_processes(processes)?;

    let mut taken: HashSet<ProcessId> = processes.iter().filter_map(|p| p.id.clone()).collect();
    let normalized = processes
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let mut p = p.clone();
            if p.id.is_none() {
                let mut n = i + 1;
                while taken.contains(&ProcessId::sequential(n)) {
                    n += 1;
                }
                let id = ProcessId::sequential(n);
                taken.insert(id.clone());
                p.id = Some(id);
            }
            p
        })
        .collect();

    Ok(normalized)
}

/// Normalizes a process set and runs an algorithm-specific parameter check
/// alongside it, reporting the errors of both.
///
/// An empty set reports `EmptyInput` alone; `check` is not run.
pub fn normalize_with(
    processes: &[Process],
    check: impl FnOnce(&[Process]) -> ValidationResult,
) -> ValidationResult<Vec<Process>> {
    let normalized = normalize_processes(processes);
    if processes.is_empty() {
        return normalized;
    }
    match (normalized, check(processes)) {
        (Ok(normalized), Ok(())) => Ok(normalized),
        (normalized, checked) => Err(normalized
            .err()
            .into_iter()
            .chain(checked.err())
            .flatten()
            .collect()),
    }
}
