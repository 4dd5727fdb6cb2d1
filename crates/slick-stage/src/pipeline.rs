//! Startup pipeline validation.
//!
//! [`validate_pipeline`] runs once when the pipeline is built. It checks the
//! stage list for structural errors and records each stage's write modes in
//! a [`StagePlan`] so the per-step runner has no conditionals to evaluate.

use indexmap::IndexMap;
use slick_core::{FieldId, FieldSet};

use crate::stage::{Stage, WriteMode};

use std::error::Error;
use std::fmt;

/// Per-stage write-mode table built by [`validate_pipeline`].
///
/// The runner consults this plan to allocate each stage's staging buffers
/// and to seed [`WriteMode::Incremental`] buffers from the current value.
#[derive(Debug)]
#[must_use]
pub struct StagePlan {
    /// `write_modes[stage_index]` maps `FieldId → WriteMode`.
    write_modes: Vec<IndexMap<FieldId, WriteMode>>,
}

impl StagePlan {
    /// Number of stages in the plan.
    pub fn len(&self) -> usize {
        self.write_modes.len()
    }

    /// Whether the plan covers zero stages.
    pub fn is_empty(&self) -> bool {
        self.write_modes.is_empty()
    }

    /// All `(field, mode)` pairs for a stage's writes.
    pub fn write_modes_for(&self, stage_index: usize) -> Option<&IndexMap<FieldId, WriteMode>> {
        self.write_modes.get(stage_index)
    }
}

/// A detected write-write conflict between two stages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteConflict {
    /// The contested field.
    pub field_id: FieldId,
    /// Name of the first writer (earlier in pipeline order).
    pub first_writer: String,
    /// Name of the second writer (later in pipeline order).
    pub second_writer: String,
}

/// Errors from pipeline validation (startup-time, not per-step).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// No stages registered.
    EmptyPipeline,

    /// Two or more stages write the same field.
    WriteConflict(Vec<WriteConflict>),

    /// A stage references a field not defined in the store.
    UndefinedField {
        /// Which stage.
        stage: String,
        /// The missing field.
        field_id: FieldId,
    },

    /// A stage declares a write to a field registered as
    /// [`FieldMutability::Static`](slick_core::FieldMutability::Static).
    StaticFieldWrite {
        /// Which stage.
        stage: String,
        /// The static field.
        field_id: FieldId,
    },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPipeline => write!(f, "pipeline has no stages"),
            Self::WriteConflict(conflicts) => {
                write!(f, "write-write conflicts: ")?;
                for (i, c) in conflicts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(
                        f,
                        "field {} written by '{}' and '{}'",
                        c.field_id, c.first_writer, c.second_writer,
                    )?;
                }
                Ok(())
            }
            Self::UndefinedField { stage, field_id } => {
                write!(f, "stage '{stage}' references undefined field {field_id}")
            }
            Self::StaticFieldWrite { stage, field_id } => {
                write!(f, "stage '{stage}' writes static field {field_id}")
            }
        }
    }
}

impl Error for PipelineError {}

/// Validate a stage pipeline and build the [`StagePlan`].
///
/// Checks performed (all at startup, not per step):
///
/// 1. Pipeline is non-empty.
/// 2. No write-write conflicts (two stages writing the same field).
/// 3. All referenced field IDs exist in `defined_fields`.
/// 4. No stage writes a field in `static_fields` (fields registered
///    `Static` belong to the host and are never rewritten per step).
pub fn validate_pipeline(
    stages: &[Box<dyn Stage>],
    defined_fields: &FieldSet,
    static_fields: &FieldSet,
) -> Result<StagePlan, PipelineError> {
    // 1. Non-empty
    if stages.is_empty() {
        return Err(PipelineError::EmptyPipeline);
    }

    // 2. Write-write conflicts
    {
        let mut last_writer: IndexMap<FieldId, usize> = IndexMap::new();
        let mut conflicts: Vec<WriteConflict> = Vec::new();

        for (i, stage) in stages.iter().enumerate() {
            for (field_id, _mode) in stage.writes() {
                if let Some(&j) = last_writer.get(&field_id) {
                    conflicts.push(WriteConflict {
                        field_id,
                        first_writer: stages[j].name().to_string(),
                        second_writer: stage.name().to_string(),
                    });
                } else {
                    last_writer.insert(field_id, i);
                }
            }
        }

        if !conflicts.is_empty() {
            return Err(PipelineError::WriteConflict(conflicts));
        }
    }

    // 3. Undefined fields
    for stage in stages {
        for field_id in stage.reads().iter() {
            if !defined_fields.contains(field_id) {
                return Err(PipelineError::UndefinedField {
                    stage: stage.name().to_string(),
                    field_id,
                });
            }
        }
        for (field_id, _mode) in stage.writes() {
            if !defined_fields.contains(field_id) {
                return Err(PipelineError::UndefinedField {
                    stage: stage.name().to_string(),
                    field_id,
                });
            }
            if static_fields.contains(field_id) {
                return Err(PipelineError::StaticFieldWrite {
                    stage: stage.name().to_string(),
                    field_id,
                });
            }
        }
    }

    let write_modes = stages
        .iter()
        .map(|stage| stage.writes().into_iter().collect())
        .collect();

    Ok(StagePlan { write_modes })
}
