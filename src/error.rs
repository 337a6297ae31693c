//! Error types for scheduling.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors returned by the scheduler.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScheduleError {
    /// The problem instance violates a structural invariant.
    ///
    /// Detected before any scheduling work starts. Carries every violation
    /// found, not just the first.
    #[error("malformed problem instance: {}", join_messages(.0))]
    MalformedInstance(Vec<ValidationError>),

    /// A book was claimed twice or a library selected twice.
    ///
    /// Indicates a scheduler bug, never bad input.
    #[error("internal consistency violated: {0}")]
    InternalConsistency(String),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
