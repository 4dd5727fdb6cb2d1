//! Field storage and the sequential pipeline runner.
//!
//! [`FieldStore`] owns one flat f32 buffer per registered field, sized from
//! the field's centering and the mesh. [`Pipeline`] executes stages in
//! declared order, staging each stage's writes and committing them before
//! the next stage runs — every stage therefore sees fully written outputs
//! of all earlier stages, which is the barrier the smearing → mixing
//! hand-off requires.

use indexmap::IndexMap;
use slick_core::{
    FieldDef, FieldId, FieldMutability, FieldReader, FieldSet, FieldWriter, StepError, StepId,
};
use slick_mesh::Mesh;

use crate::context::StepContext;
use crate::pipeline::{validate_pipeline, PipelineError, StagePlan};
use crate::stage::{Stage, WriteMode};

/// Owns the committed buffer for every registered field.
///
/// Buffers are sized at construction as
/// `cell_count * centering.slots(ndim)` and never reallocated. The host
/// initializes externally owned fields (raw fractions, mesh metrics)
/// through [`values_mut`](FieldStore::values_mut) and reads results back
/// through [`FieldReader::read`].
pub struct FieldStore {
    fields: IndexMap<FieldId, Vec<f32>>,
    static_fields: FieldSet,
}

impl FieldStore {
    /// Allocate buffers for the given field definitions on a mesh.
    pub fn new(defs: &[(FieldId, FieldDef)], mesh: &dyn Mesh) -> Self {
        let n = mesh.cell_count();
        let ndim = mesh.ndim();
        let fields = defs
            .iter()
            .map(|(id, def)| (*id, vec![0.0; n * def.centering.slots(ndim)]))
            .collect();
        let static_fields = defs
            .iter()
            .filter(|(_, def)| def.mutability == FieldMutability::Static)
            .map(|(id, _)| *id)
            .collect();
        Self {
            fields,
            static_fields,
        }
    }

    /// The set of registered field IDs, for pipeline validation.
    pub fn defined_fields(&self) -> FieldSet {
        self.fields.keys().copied().collect()
    }

    /// The subset of registered fields marked [`FieldMutability::Static`].
    ///
    /// Static fields belong to the host; validation rejects any stage that
    /// declares a write to one.
    pub fn static_fields(&self) -> FieldSet {
        self.static_fields
    }

    /// Whether a field is registered.
    pub fn contains(&self, field: FieldId) -> bool {
        self.fields.contains_key(&field)
    }

    /// Committed data for a field.
    pub fn values(&self, field: FieldId) -> Option<&[f32]> {
        self.fields.get(&field).map(|v| v.as_slice())
    }

    /// Mutable access to a field's committed data, for host-side
    /// initialization and the external transport solver's updates.
    pub fn values_mut(&mut self, field: FieldId) -> Option<&mut [f32]> {
        self.fields.get_mut(&field).map(|v| v.as_mut_slice())
    }

    /// Fill a field with a constant. Returns `false` if unregistered.
    pub fn fill(&mut self, field: FieldId, value: f32) -> bool {
        match self.fields.get_mut(&field) {
            Some(buf) => {
                buf.fill(value);
                true
            }
            None => false,
        }
    }
}

impl FieldReader for FieldStore {
    fn read(&self, field: FieldId) -> Option<&[f32]> {
        self.values(field)
    }
}

/// Staging buffers for one stage's declared writes.
struct StagedWrites {
    bufs: IndexMap<FieldId, Vec<f32>>,
}

impl FieldWriter for StagedWrites {
    fn write(&mut self, field: FieldId) -> Option<&mut [f32]> {
        self.bufs.get_mut(&field).map(|v| v.as_mut_slice())
    }
}

/// An ordered, validated list of stages.
///
/// Built once at binding time; [`run_step`](Pipeline::run_step) is the
/// single per-step entry point the host scheduler invokes.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
    plan: StagePlan,
}

impl Pipeline {
    /// Validate the stage list against the store's registered fields and
    /// build the pipeline.
    pub fn new(stages: Vec<Box<dyn Stage>>, store: &FieldStore) -> Result<Self, PipelineError> {
        let plan = validate_pipeline(&stages, &store.defined_fields(), &store.static_fields())?;
        Ok(Self { stages, plan })
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Execute one solver step.
    ///
    /// Stages run in declared order. Each stage's writes are staged
    /// ([`WriteMode::Full`] buffers zeroed, [`WriteMode::Incremental`]
    /// buffers seeded from the committed value) and committed into the
    /// store before the next stage reads.
    pub fn run_step(
        &self,
        store: &mut FieldStore,
        mesh: &dyn Mesh,
        step_id: StepId,
    ) -> Result<(), StepError> {
        for (i, stage) in self.stages.iter().enumerate() {
            let mut staged = StagedWrites {
                bufs: IndexMap::new(),
            };
            if let Some(modes) = self.plan.write_modes_for(i) {
                for (&field, &mode) in modes {
                    // Validation guarantees the field is registered.
                    let current = match store.values(field) {
                        Some(v) => v,
                        None => continue,
                    };
                    let buf = match mode {
                        WriteMode::Full => vec![0.0; current.len()],
                        WriteMode::Incremental => current.to_vec(),
                    };
                    staged.bufs.insert(field, buf);
                }
            }

            {
                let mut ctx = StepContext::new(store, &mut staged, mesh, step_id);
                stage.step(&mut ctx).map_err(|reason| StepError::StageFailed {
                    name: stage.name().to_string(),
                    reason,
                })?;
            }

            for (field, buf) in staged.bufs {
                if let Some(dst) = store.values_mut(field) {
                    dst.copy_from_slice(&buf);
                }
            }
        }
        Ok(())
    }
}
