//! The [`Stage`] trait and [`WriteMode`] enum.
//!
//! Stages are modular, stateless operators executed in declared order each
//! solver step. They declare field dependencies at registration, enabling
//! the pipeline to validate the dependency graph once at startup.

use crate::context::StepContext;
use slick_core::{FieldId, FieldSet, StageError};

/// Write initialization strategy for a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WriteMode {
    /// Fresh zeroed buffer. The stage MUST fill every slot.
    Full,

    /// Buffer seeded from the field's current value. The stage modifies
    /// only the slots it needs to change (the thin-film corrector's
    /// conditional in-place overwrite of the outer fraction).
    Incremental,
}

/// A modular, stateless operator in the per-step property pipeline.
///
/// # Contract
///
/// - `step()` MUST be deterministic: same inputs produce identical outputs.
/// - `&self` — stages are stateless; all mutable state goes through fields.
/// - `reads()` and `writes()` are called once at startup, not per step.
///
/// # Object safety
///
/// This trait is object-safe; pipelines store stages as
/// `Vec<Box<dyn Stage>>`.
///
/// # Examples
///
/// A minimal stage that fills a field with a constant value:
///
/// ```
/// use slick_stage::{Stage, StepContext, WriteMode};
/// use slick_core::{FieldId, FieldSet, StageError};
///
/// struct ConstantFill {
///     field: FieldId,
///     value: f32,
/// }
///
/// impl Stage for ConstantFill {
///     fn name(&self) -> &str { "constant_fill" }
///
///     fn reads(&self) -> FieldSet { FieldSet::empty() }
///
///     fn writes(&self) -> Vec<(FieldId, WriteMode)> {
///         vec![(self.field, WriteMode::Full)]
///     }
///
///     fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), StageError> {
///         let buf = ctx
///             .writes()
///             .write(self.field)
///             .ok_or(StageError::FieldUnavailable { field: self.field })?;
///         buf.fill(self.value);
///         Ok(())
///     }
/// }
///
/// let stage = ConstantFill { field: FieldId(0), value: 42.0 };
/// assert_eq!(stage.name(), "constant_fill");
/// ```
pub trait Stage: Send + 'static {
    /// Human-readable name for error reporting.
    fn name(&self) -> &str;

    /// Fields this stage reads.
    ///
    /// Reads see values committed by earlier stages in the current step,
    /// or the step-start value for fields no earlier stage writes.
    fn reads(&self) -> FieldSet;

    /// Fields this stage writes, with their initialization mode.
    ///
    /// Called once at pipeline construction, not per step.
    fn writes(&self) -> Vec<(FieldId, WriteMode)>;

    /// Execute the stage for one solver step.
    ///
    /// Called once per step in declared order. The [`StepContext`] provides
    /// read access to committed fields, write access to declared outputs,
    /// and the mesh topology.
    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), StageError>;
}
