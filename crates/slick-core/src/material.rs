//! Immutable material configuration for the three phases.
//!
//! Replaces per-phase global scalars with a single structure built once
//! before the run and handed to each stage at construction.

/// Physical coefficients for a single phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhaseCoefficients {
    /// Density (rho).
    pub density: f32,
    /// Dynamic viscosity (mu).
    pub viscosity: f32,
    /// Elastic modulus (G).
    pub elastic_modulus: f32,
    /// Relaxation time (lambda).
    pub relaxation_time: f32,
}

impl Default for PhaseCoefficients {
    /// Unit density, everything else zero: an inviscid, inelastic phase.
    fn default() -> Self {
        Self {
            density: 1.0,
            viscosity: 0.0,
            elastic_modulus: 0.0,
            relaxation_time: 0.0,
        }
    }
}

/// Coefficients for all three phases plus the elastic activation tolerance.
///
/// Phase 1 is the outer phase, phase 2 the inner phase nested within it,
/// phase 3 the surrounding bulk. Built once before simulation start and
/// read-only thereafter; unset coefficients keep their zero defaults and
/// silently contribute nothing rather than failing, so callers must
/// validate the configuration before use.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Materials {
    phases: [PhaseCoefficients; 3],
    tol_elastic: f32,
}

impl Materials {
    /// Default noise-floor cutoff for elastic contributions.
    pub const DEFAULT_TOL_ELASTIC: f32 = 0.1;

    /// Build a configuration from explicit per-phase coefficients.
    pub fn new(phases: [PhaseCoefficients; 3]) -> Self {
        Self {
            phases,
            tol_elastic: Self::DEFAULT_TOL_ELASTIC,
        }
    }

    /// Override the elastic activation tolerance.
    pub fn with_tol_elastic(mut self, tol: f32) -> Self {
        self.tol_elastic = tol;
        self
    }

    /// Coefficients for phase `i` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `i >= 3`.
    pub fn phase(&self, i: usize) -> &PhaseCoefficients {
        &self.phases[i]
    }

    /// The three phase densities, in phase order.
    pub fn densities(&self) -> [f32; 3] {
        self.phases.map(|p| p.density)
    }

    /// The three phase viscosities, in phase order.
    pub fn viscosities(&self) -> [f32; 3] {
        self.phases.map(|p| p.viscosity)
    }

    /// The three elastic moduli, in phase order.
    pub fn elastic_moduli(&self) -> [f32; 3] {
        self.phases.map(|p| p.elastic_modulus)
    }

    /// The three relaxation times, in phase order.
    pub fn relaxation_times(&self) -> [f32; 3] {
        self.phases.map(|p| p.relaxation_time)
    }

    /// Occupancies at or below this threshold contribute nothing to the
    /// elastic modulus or relaxation time.
    pub fn tol_elastic(&self) -> f32 {
        self.tol_elastic
    }

    /// `true` if any phase has non-zero viscosity. Face-centered viscosity
    /// storage is only allocated in that case.
    pub fn any_viscous(&self) -> bool {
        self.phases.iter().any(|p| p.viscosity != 0.0)
    }
}

impl Default for Materials {
    fn default() -> Self {
        Self::new([PhaseCoefficients::default(); 3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_values() {
        let m = Materials::default();
        assert_eq!(m.densities(), [1.0, 1.0, 1.0]);
        assert_eq!(m.viscosities(), [0.0, 0.0, 0.0]);
        assert_eq!(m.elastic_moduli(), [0.0, 0.0, 0.0]);
        assert_eq!(m.relaxation_times(), [0.0, 0.0, 0.0]);
        assert_eq!(m.tol_elastic(), 0.1);
        assert!(!m.any_viscous());
    }

    #[test]
    fn any_viscous_detects_single_phase() {
        let mut phases = [PhaseCoefficients::default(); 3];
        phases[2].viscosity = 1e-3;
        assert!(Materials::new(phases).any_viscous());
    }

    #[test]
    fn tol_override() {
        let m = Materials::default().with_tol_elastic(0.05);
        assert_eq!(m.tol_elastic(), 0.05);
    }
}
