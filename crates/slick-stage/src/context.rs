//! Execution context passed to stages during a solver step.

use slick_core::{FieldReader, FieldWriter, StepId};
use slick_mesh::Mesh;

/// Execution context passed to each stage's `step()` method.
///
/// Uses dynamic dispatch (`&dyn FieldReader`, `&mut dyn FieldWriter`) to
/// keep the [`Stage`](crate::Stage) trait object-safe while supporting
/// mock-based testing.
///
/// Reads see fields as committed by earlier stages this step; writes go to
/// staging buffers the runner commits after the stage returns. A stage's
/// own [`WriteMode::Incremental`](crate::WriteMode) buffers arrive
/// pre-seeded with the field's current value.
pub struct StepContext<'a> {
    reads: &'a dyn FieldReader,
    writes: &'a mut dyn FieldWriter,
    mesh: &'a dyn Mesh,
    step_id: StepId,
}

impl<'a> StepContext<'a> {
    /// Construct a new step context.
    ///
    /// Typically called by the pipeline runner, not by stages directly.
    /// For testing, construct with mock readers/writers from
    /// `slick-test-utils`.
    pub fn new(
        reads: &'a dyn FieldReader,
        writes: &'a mut dyn FieldWriter,
        mesh: &'a dyn Mesh,
        step_id: StepId,
    ) -> Self {
        Self {
            reads,
            writes,
            mesh,
            step_id,
        }
    }

    /// Committed field reader.
    pub fn reads(&self) -> &dyn FieldReader {
        self.reads
    }

    /// Mutable field writer for the current stage's declared outputs.
    pub fn writes(&mut self) -> &mut dyn FieldWriter {
        self.writes
    }

    /// Mesh topology. Use `mesh().downcast_ref::<T>()` for backend-specific
    /// fast paths, and `mesh().refinement()` for the adaptive hook surface.
    pub fn mesh(&self) -> &dyn Mesh {
        self.mesh
    }

    /// Current solver step.
    pub fn step_id(&self) -> StepId {
        self.step_id
    }
}
