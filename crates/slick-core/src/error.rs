//! Error types for pipeline stage execution.
//!
//! Startup-time configuration errors live with the pipeline builder in
//! `slick-stage`; the enums here cover per-step execution.

use crate::id::FieldId;
use std::error::Error;
use std::fmt;

/// Errors from an individual stage's `step()`.
///
/// Wrapped in [`StepError::StageFailed`] by the pipeline runner.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StageError {
    /// A field the stage declared was not readable or writable at runtime.
    FieldUnavailable {
        /// The missing field.
        field: FieldId,
    },
    /// The stage's computation failed.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldUnavailable { field } => {
                write!(f, "field {field} not available")
            }
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
        }
    }
}

impl Error for StageError {}

/// Errors from the pipeline runner during a step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A stage returned an error during execution.
    StageFailed {
        /// Name of the failing stage.
        name: String,
        /// The underlying stage error.
        reason: StageError,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StageFailed { name, reason } => {
                write!(f, "stage '{name}' failed: {reason}")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::StageFailed { reason, .. } => Some(reason),
        }
    }
}
