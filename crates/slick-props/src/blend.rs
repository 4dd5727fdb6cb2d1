//! Property blending strategies.
//!
//! The density and viscosity mixing formulas are injected into the
//! property mixer as a strategy object so an alternative average can be
//! substituted without touching the rest of the pipeline. The arithmetic
//! average is the default, matching the reference formulation.

use slick_core::{occupancy, Materials};

/// Strategy for blending per-phase coefficients at a fraction pair.
pub trait Blend: Send + Sync {
    /// Blended density for the fraction pair `(f1, f2)`.
    fn density(&self, f1: f32, f2: f32, materials: &Materials) -> f32;

    /// Blended dynamic viscosity for the fraction pair `(f1, f2)`.
    fn viscosity(&self, f1: f32, f2: f32, materials: &Materials) -> f32;
}

fn weighted_sum(occ: [f32; 3], coeffs: [f32; 3]) -> f32 {
    occ[0] * coeffs[0] + occ[1] * coeffs[1] + occ[2] * coeffs[2]
}

/// Occupancy-weighted arithmetic average (the default).
#[derive(Clone, Copy, Debug, Default)]
pub struct ArithmeticBlend;

impl Blend for ArithmeticBlend {
    fn density(&self, f1: f32, f2: f32, materials: &Materials) -> f32 {
        weighted_sum(occupancy(f1, f2), materials.densities())
    }

    fn viscosity(&self, f1: f32, f2: f32, materials: &Materials) -> f32 {
        weighted_sum(occupancy(f1, f2), materials.viscosities())
    }
}

fn harmonic_mean(occ: [f32; 3], coeffs: [f32; 3]) -> f32 {
    let mut denom = 0.0f32;
    for i in 0..3 {
        if occ[i] == 0.0 {
            continue;
        }
        if coeffs[i] == 0.0 {
            // Any occupied phase with a zero coefficient drives the
            // harmonic mean to zero.
            return 0.0;
        }
        denom += occ[i] / coeffs[i];
    }
    if denom > 0.0 {
        1.0 / denom
    } else {
        0.0
    }
}

/// Occupancy-weighted harmonic average.
///
/// Preferred for viscosity across high-contrast interfaces; an occupied
/// phase with zero coefficient yields zero.
#[derive(Clone, Copy, Debug, Default)]
pub struct HarmonicBlend;

impl Blend for HarmonicBlend {
    fn density(&self, f1: f32, f2: f32, materials: &Materials) -> f32 {
        harmonic_mean(occupancy(f1, f2), materials.densities())
    }

    fn viscosity(&self, f1: f32, f2: f32, materials: &Materials) -> f32 {
        harmonic_mean(occupancy(f1, f2), materials.viscosities())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slick_core::PhaseCoefficients;

    fn materials() -> Materials {
        Materials::new([
            PhaseCoefficients {
                density: 1000.0,
                viscosity: 1.0,
                ..Default::default()
            },
            PhaseCoefficients {
                density: 800.0,
                viscosity: 0.5,
                ..Default::default()
            },
            PhaseCoefficients {
                density: 1.0,
                viscosity: 0.01,
                ..Default::default()
            },
        ])
    }

    #[test]
    fn arithmetic_pure_phases() {
        let m = materials();
        let b = ArithmeticBlend;
        assert_eq!(b.density(1.0, 0.0, &m), 1000.0);
        assert_eq!(b.density(1.0, 1.0, &m), 800.0);
        assert_eq!(b.density(0.0, 0.0, &m), 1.0);
        assert_eq!(b.viscosity(1.0, 0.0, &m), 1.0);
    }

    #[test]
    fn arithmetic_interface_average() {
        let m = materials();
        let b = ArithmeticBlend;
        // f1=0.5, f2=0: half phase 1, half phase 3.
        let rho = b.density(0.5, 0.0, &m);
        assert!((rho - 500.5).abs() < 1e-3, "{rho}");
    }

    #[test]
    fn harmonic_pure_phases_agree_with_arithmetic() {
        let m = materials();
        let h = HarmonicBlend;
        assert!((h.density(1.0, 0.0, &m) - 1000.0).abs() < 1e-3);
        assert!((h.density(1.0, 1.0, &m) - 800.0).abs() < 1e-3);
        assert!((h.density(0.0, 0.0, &m) - 1.0).abs() < 1e-4);
    }

    #[test]
    fn harmonic_mixture_below_arithmetic() {
        let m = materials();
        let a = ArithmeticBlend.viscosity(0.5, 0.0, &m);
        let h = HarmonicBlend.viscosity(0.5, 0.0, &m);
        assert!(h < a, "harmonic {h} should undercut arithmetic {a}");
    }

    #[test]
    fn harmonic_zero_coefficient_dominates() {
        let m = Materials::default(); // all viscosities zero
        assert_eq!(HarmonicBlend.viscosity(0.5, 0.5, &m), 0.0);
    }
}
