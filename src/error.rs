use std::path::PathBuf;

use thiserror::Error;

/// The one hard failure: the store directory itself cannot be enumerated.
/// Everything below this level is recorded in the run report instead.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read problem store {}: {}", path.display(), source)]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Why a descriptor never reached execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResolveError {
    #[error("No solution registered for problem '{id}'")]
    MissingSolution { id: String },
    #[error("Solution for '{id}' does not export a function named '{function}'")]
    MissingFunction { id: String, function: String },
}

/// A fault raised by a solution while executing a single test case.
///
/// Solutions return `Result<Value, InvocationFault>`; a fault is recorded
/// against that test case and never aborts the rest of the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct InvocationFault {
    pub message: String,
}

impl InvocationFault {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
