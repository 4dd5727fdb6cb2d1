//! Face- and cell-centered property synthesis.

use crate::blend::{ArithmeticBlend, Blend};
use crate::fields::{
    FractionSource, CELL_METRIC, DENSITY, ELASTIC_MODULUS, FACE_METRIC, RELAXATION_TIME,
    SPECIFIC_VOLUME, VISCOSITY,
};
use slick_core::{occupancy, FieldId, FieldSet, Materials, StageError};
use slick_mesh::Prolongation;
use slick_stage::{Stage, StepContext, WriteMode};

/// Computes the solver-facing property fields from the fraction pair.
///
/// Face pass: for each cell face, the two straddling cells' fractions are
/// arithmetically averaged, then `specific_volume = face_metric /
/// rho(ff1, ff2)` and (when some phase is viscous) `viscosity =
/// face_metric * mu(ff1, ff2)`, with `rho`/`mu` supplied by the injected
/// [`Blend`] strategy. A face whose lower neighbour is absorbed at a
/// domain edge samples the boundary cell's own fractions, the same value
/// a zero-gradient ghost cell would supply — at domain-boundary faces
/// `Absorb` and `Clamp` meshes agree by construction.
///
/// Cell pass: `density = cell_metric * rho(f1, f2)`; elastic modulus and
/// relaxation time accumulate per phase, but only phases whose clamped
/// occupancy strictly exceeds the configured tolerance contribute — a
/// noise-floor cutoff, so a cell whose dominant occupancy sits at or below
/// the tolerance legitimately ends with zero modulus.
///
/// The fraction pair is the smoothed copies when smoothing is enabled and
/// the raw fields otherwise (see [`FractionSource`]); this stage does not
/// care which. On a refinement-capable mesh it reinstalls conservative
/// prolongation for the fraction pair afterwards — downstream consumers
/// read the fractions after further mesh changes and need conservative
/// refinement, not the smearing stage's bilinear choice.
pub struct PropertyMixer {
    materials: Materials,
    fractions: FractionSource,
    blend: Box<dyn Blend>,
    viscous: bool,
}

impl PropertyMixer {
    /// Create a mixer with the default arithmetic blending.
    pub fn new(materials: Materials, fractions: FractionSource) -> Self {
        let viscous = materials.any_viscous();
        Self {
            materials,
            fractions,
            blend: Box::new(ArithmeticBlend),
            viscous,
        }
    }

    /// Substitute an alternative blending strategy.
    pub fn with_blend(mut self, blend: Box<dyn Blend>) -> Self {
        self.blend = blend;
        self
    }
}

impl Stage for PropertyMixer {
    fn name(&self) -> &str {
        "mix_properties"
    }

    fn reads(&self) -> FieldSet {
        [self.fractions.f1, self.fractions.f2, CELL_METRIC, FACE_METRIC]
            .into_iter()
            .collect()
    }

    fn writes(&self) -> Vec<(FieldId, WriteMode)> {
        let mut writes = vec![
            (SPECIFIC_VOLUME, WriteMode::Full),
            (DENSITY, WriteMode::Full),
            (ELASTIC_MODULUS, WriteMode::Full),
            (RELAXATION_TIME, WriteMode::Full),
        ];
        if self.viscous {
            writes.push((VISCOSITY, WriteMode::Full));
        }
        writes
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), StageError> {
        let n = ctx.mesh().cell_count();
        let d = ctx.mesh().ndim();

        let read_cell = |ctx: &StepContext<'_>, id: FieldId| -> Result<Vec<f32>, StageError> {
            let data = ctx
                .reads()
                .read(id)
                .ok_or(StageError::FieldUnavailable { field: id })?;
            if data.len() != n {
                return Err(StageError::ExecutionFailed {
                    reason: format!("field {id} has {} slots, expected {n}", data.len()),
                });
            }
            Ok(data.to_vec())
        };

        let f1 = read_cell(ctx, self.fractions.f1)?;
        let f2 = read_cell(ctx, self.fractions.f2)?;
        let cell_metric = read_cell(ctx, CELL_METRIC)?;

        let face_metric = ctx
            .reads()
            .read(FACE_METRIC)
            .ok_or(StageError::FieldUnavailable { field: FACE_METRIC })?
            .to_vec();
        if face_metric.len() != n * d {
            return Err(StageError::ExecutionFailed {
                reason: format!(
                    "face metric has {} slots, expected {}",
                    face_metric.len(),
                    n * d
                ),
            });
        }

        // Face pass: average the fractions of the two cells straddling
        // each lower face, then blend.
        let mut specific_volume = vec![0.0f32; n * d];
        let mut viscosity = if self.viscous {
            vec![0.0f32; n * d]
        } else {
            Vec::new()
        };
        for i in 0..n {
            for axis in 0..d {
                let j = ctx.mesh().shift(i, axis, -1).unwrap_or(i);
                let ff1 = 0.5 * (f1[i] + f1[j]);
                let ff2 = 0.5 * (f2[i] + f2[j]);
                let slot = i * d + axis;
                specific_volume[slot] =
                    face_metric[slot] / self.blend.density(ff1, ff2, &self.materials);
                if self.viscous {
                    viscosity[slot] =
                        face_metric[slot] * self.blend.viscosity(ff1, ff2, &self.materials);
                }
            }
        }

        // Cell pass: density plus tolerance-gated viscoelastic moduli.
        let tol = self.materials.tol_elastic();
        let moduli = self.materials.elastic_moduli();
        let relaxation = self.materials.relaxation_times();
        let mut density = vec![0.0f32; n];
        let mut elastic_modulus = vec![0.0f32; n];
        let mut relaxation_time = vec![0.0f32; n];
        for i in 0..n {
            density[i] = cell_metric[i] * self.blend.density(f1[i], f2[i], &self.materials);
            let occ = occupancy(f1[i], f2[i]);
            for phase in 0..3 {
                if occ[phase] > tol {
                    elastic_modulus[i] += moduli[phase] * occ[phase];
                    relaxation_time[i] += relaxation[phase] * occ[phase];
                }
            }
        }

        let write = |ctx: &mut StepContext<'_>,
                     id: FieldId,
                     data: &[f32]|
         -> Result<(), StageError> {
            let dst = ctx
                .writes()
                .write(id)
                .ok_or(StageError::FieldUnavailable { field: id })?;
            dst.copy_from_slice(data);
            Ok(())
        };

        write(ctx, SPECIFIC_VOLUME, &specific_volume)?;
        if self.viscous {
            write(ctx, VISCOSITY, &viscosity)?;
        }
        write(ctx, DENSITY, &density)?;
        write(ctx, ELASTIC_MODULUS, &elastic_modulus)?;
        write(ctx, RELAXATION_TIME, &relaxation_time)?;

        if let Some(refinement) = ctx.mesh().refinement() {
            for field in [self.fractions.f1, self.fractions.f2] {
                refinement.install_prolongation(field, Prolongation::Conservative);
                refinement.mark_boundary_stale(field);
            }
        }
        Ok(())
    }
}
