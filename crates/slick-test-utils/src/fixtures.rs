//! Reusable stage test fixtures.
//!
//! Three standard stages for pipeline validation and runner testing:
//!
//! - [`IdentityStage`] — copies input field to output field (Full mode).
//! - [`ConstStage`] — writes a constant value (Full mode, no reads).
//! - [`FailingStage`] — always fails, for error propagation tests.

use slick_core::{FieldId, FieldSet, StageError};
use slick_stage::{Stage, StepContext, WriteMode};

/// Reads one field and copies it to another (Full write mode).
///
/// Useful for testing runner plumbing: if the output matches the input,
/// stage-to-stage commits are working correctly.
pub struct IdentityStage {
    pub name: String,
    pub input: FieldId,
    pub output: FieldId,
}

impl IdentityStage {
    pub fn new(name: impl Into<String>, input: FieldId, output: FieldId) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl Stage for IdentityStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn reads(&self) -> FieldSet {
        [self.input].into_iter().collect()
    }

    fn writes(&self) -> Vec<(FieldId, WriteMode)> {
        vec![(self.output, WriteMode::Full)]
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), StageError> {
        let input = ctx
            .reads()
            .read(self.input)
            .ok_or(StageError::FieldUnavailable { field: self.input })?
            .to_vec();
        let output = ctx
            .writes()
            .write(self.output)
            .ok_or(StageError::FieldUnavailable { field: self.output })?;
        if output.len() != input.len() {
            return Err(StageError::ExecutionFailed {
                reason: format!(
                    "size mismatch: input field {} has {} slots, output field {} has {}",
                    self.input,
                    input.len(),
                    self.output,
                    output.len(),
                ),
            });
        }
        output.copy_from_slice(&input);
        Ok(())
    }
}

/// Writes a constant value to all slots (Full write mode, no reads).
pub struct ConstStage {
    pub name: String,
    pub output: FieldId,
    pub value: f32,
}

impl ConstStage {
    pub fn new(name: impl Into<String>, output: FieldId, value: f32) -> Self {
        Self {
            name: name.into(),
            output,
            value,
        }
    }
}

impl Stage for ConstStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn reads(&self) -> FieldSet {
        FieldSet::empty()
    }

    fn writes(&self) -> Vec<(FieldId, WriteMode)> {
        vec![(self.output, WriteMode::Full)]
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), StageError> {
        let output = ctx
            .writes()
            .write(self.output)
            .ok_or(StageError::FieldUnavailable { field: self.output })?;
        output.fill(self.value);
        Ok(())
    }
}

/// Always fails, for testing error propagation through the runner.
pub struct FailingStage {
    pub name: String,
    pub output: FieldId,
}

impl FailingStage {
    pub fn new(name: impl Into<String>, output: FieldId) -> Self {
        Self {
            name: name.into(),
            output,
        }
    }
}

impl Stage for FailingStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn reads(&self) -> FieldSet {
        FieldSet::empty()
    }

    fn writes(&self) -> Vec<(FieldId, WriteMode)> {
        vec![(self.output, WriteMode::Full)]
    }

    fn step(&self, _ctx: &mut StepContext<'_>) -> Result<(), StageError> {
        Err(StageError::ExecutionFailed {
            reason: "deterministic test failure".into(),
        })
    }
}
