//! Spatial smearing of the fraction fields.

use crate::fields::{F1, F2, SF1, SF2};
use slick_core::{FieldId, FieldSet, StageError};
use slick_mesh::Prolongation;
use slick_stage::{Stage, StepContext, WriteMode};

/// Discrete low-pass filter over the fraction fields.
///
/// Sharp fraction fields at cell resolution produce spurious jumps in the
/// blended properties; smearing replaces each value with a normalized
/// weighted average over the cell and its full stencil neighbourhood.
/// A neighbour offset along `m` axes carries weight `2^(d-m)` (the center
/// counts as `m = 0`), giving the 9-point 4/2/1 kernel over 16 in 2-D and
/// the 27-point 8/4/2/1 kernel over 64 in 3-D. The weights sum to the
/// divisor, so a uniform field is a fixed point of the filter.
///
/// Each smoothed field is paired with exactly one raw field (`sf1` with
/// `f1`, `sf2` with `f2`); the filter never mixes one fraction's
/// neighbourhood into the other's smoothed copy.
///
/// On a refinement-capable mesh, the stage installs bilinear prolongation
/// for the smoothed fields and marks their boundary data stale, so newly
/// created child cells follow the filter's smooth profile rather than the
/// mesh's default fraction refinement.
pub struct SmearFractions;

/// Raw/smoothed pairing, first with first, second with second.
const PAIRS: [(FieldId, FieldId); 2] = [(F1, SF1), (F2, SF2)];

impl SmearFractions {
    /// Create the smearing stage.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SmearFractions {
    fn default() -> Self {
        Self::new()
    }
}

impl Stage for SmearFractions {
    fn name(&self) -> &str {
        "smear_fractions"
    }

    fn reads(&self) -> FieldSet {
        PAIRS.iter().map(|&(raw, _)| raw).collect()
    }

    fn writes(&self) -> Vec<(FieldId, WriteMode)> {
        PAIRS
            .iter()
            .map(|&(_, smoothed)| (smoothed, WriteMode::Full))
            .collect()
    }

    fn step(&self, ctx: &mut StepContext<'_>) -> Result<(), StageError> {
        let n = ctx.mesh().cell_count();
        let center_weight = (1u32 << ctx.mesh().ndim()) as f32;

        for (raw_id, smoothed_id) in PAIRS {
            let raw = ctx
                .reads()
                .read(raw_id)
                .ok_or(StageError::FieldUnavailable { field: raw_id })?
                .to_vec();
            if raw.len() != n {
                return Err(StageError::ExecutionFailed {
                    reason: format!(
                        "fraction field {raw_id} has {} slots, expected {n}",
                        raw.len()
                    ),
                });
            }

            let mut smoothed = vec![0.0f32; n];
            for (i, out) in smoothed.iter_mut().enumerate() {
                let mut acc = center_weight * raw[i];
                let mut weight_sum = center_weight;
                for nb in ctx.mesh().stencil(i) {
                    let w = (1u32 << (ctx.mesh().ndim() as u32 - nb.offset_axes)) as f32;
                    acc += w * raw[nb.rank];
                    weight_sum += w;
                }
                // weight_sum is 4^d for a full stencil; smaller only under
                // Absorb edges, where the kernel renormalizes.
                *out = acc / weight_sum;
            }

            let dst = ctx
                .writes()
                .write(smoothed_id)
                .ok_or(StageError::FieldUnavailable { field: smoothed_id })?;
            dst.copy_from_slice(&smoothed);
        }

        if let Some(refinement) = ctx.mesh().refinement() {
            for (_, smoothed_id) in PAIRS {
                refinement.install_prolongation(smoothed_id, Prolongation::Bilinear);
                refinement.mark_boundary_stale(smoothed_id);
            }
        }
        Ok(())
    }
}
