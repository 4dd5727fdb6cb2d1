//! The three-phase occupancy encoder.
//!
//! Two volume fractions jointly encode three immiscible phases: `f1` marks
//! the outer phase and `f2` the inner phase nested within it (the inner
//! phase only exists where the outer phase does, modeling a precursor
//! film). The encoder decodes the pair into per-phase occupancies.

/// Clamp a fraction to the unit interval.
///
/// The transport solver that produces fraction fields does not strictly
/// enforce [0,1], so every consumer clamps before blending.
pub fn clamp_unit(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Decode a fraction pair into the three clamped phase occupancies.
///
/// Returns `[phase1, phase2, phase3]` where
///
/// - `phase1 = clamp(f1 * (1 - f2))` — outer phase excluding the inner,
/// - `phase2 = clamp(f1 * f2)` — inner phase,
/// - `phase3 = clamp(1 - f1)` — surrounding bulk.
///
/// For `f1, f2` in [0,1] the occupancies partition unity exactly in real
/// arithmetic; clamping only activates for out-of-range inputs.
pub fn occupancy(f1: f32, f2: f32) -> [f32; 3] {
    [
        clamp_unit(f1 * (1.0 - f2)),
        clamp_unit(f1 * f2),
        clamp_unit(1.0 - f1),
    ]
}
