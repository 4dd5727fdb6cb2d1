//! Thin-film correction of the raw fraction fields.

use crate::fields::{F1, F2};
use slick_core::{FieldId, FieldSet, StageError};
use slick_stage::{Stage, StepContext, WriteMode};

/// Presence threshold below which a fraction is treated as numerical noise.
const FILM_EPS: f32 = 1e-2;

/// Restores nesting consistency between the two raw fraction fields.
///
/// The inner phase only exists inside the outer phase, but discrete
/// advection can leave a numerically fragmented, sub-resolved film of the
/// outer phase where the inner phase is already present in bulk. Per cell:
/// if `f2 > 1e-2` and `f1 < 1 - 1e-2`, overwrite `f1 := f2` (inner phase
/// present implies the outer phase is full there). The write is in place
/// on the raw field and therefore visible to the external transport
/// solver on the next step. `f2` is never corrected — the rule is
/// deliberately one-sided.
///
/// Skipped while `StepId <= 1`: the fields are not meaningfully advected
/// yet and the initial condition must not be disturbed. Idempotent —
/// re-applying the rule to its own output is a no-op.
pub struct ThinFilmCorrector;

impl ThinFilmCorrector {
    /// Create the corrector.
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThinFilmCorrector {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for ThinFilmCorrector {
    fn name(&self) -> &str {
        "thin_film_correction"
    }

    fn reads(&self) -> FieldSet {
        [F2].into_iter().collect()
    }

    fn writes(&self) -> Vec<(FieldId, WriteMode)> {
        // Incremental: the buffer arrives seeded with the current f1, and
        // only cells matching the guard are touched.
        vec![(F1, WriteMode::Incremental)]
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), StageError> {
        if ctx.step_id().0 <= 1 {
            return Ok(());
        }

        let f2 = ctx
            .reads()
            .read(F2)
            .ok_or(StageError::FieldUnavailable { field: F2 })?
            .to_vec();
        let f1 = ctx
            .writes()
            .write(F1)
            .ok_or(StageError::FieldUnavailable { field: F1 })?;

        for (f1, &f2) in f1.iter_mut().zip(&f2) {
            if f2 > FILM_EPS && *f1 < 1.0 - FILM_EPS {
                *f1 = f2;
            }
        }
        Ok(())
    }
}
