//! One-time binding of the three-phase stages to a mesh.

use crate::fields::{
    self, FractionSource, CELL_METRIC, DENSITY, ELASTIC_MODULUS, FACE_METRIC,
    RELAXATION_TIME, SPECIFIC_VOLUME, VISCOSITY,
};
use crate::mixer::PropertyMixer;
use crate::smear::SmearFractions;
use crate::thin_film::ThinFilmCorrector;
use slick_core::{FieldDef, FieldId, Materials};
use slick_mesh::Mesh;
use slick_stage::{FieldStore, Pipeline, PipelineError, Stage};

/// Handles to the solver-facing property fields produced each step.
///
/// `viscosity` is `None` when every phase is inviscid; no face-centered
/// viscosity storage exists in that case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertyFields {
    /// Face-centered specific volume (`face_metric / rho`).
    pub specific_volume: FieldId,
    /// Face-centered dynamic viscosity, when some phase is viscous.
    pub viscosity: Option<FieldId>,
    /// Cell-centered density (`cell_metric * rho`).
    pub density: FieldId,
    /// Cell-centered elastic modulus.
    pub elastic_modulus: FieldId,
    /// Cell-centered relaxation time.
    pub relaxation_time: FieldId,
}

/// Configuration and factory for the three-phase property pipeline.
///
/// Construct once before the run, then [`bind`](Self::bind) to a mesh to
/// obtain a validated [`Pipeline`] and its backing [`FieldStore`]. The
/// host solver fills the fraction fields and the metric fields, calls
/// [`Pipeline::run_step`] once per solver step, and reads the fields
/// named by [`property_fields`](Self::property_fields) afterwards.
#[derive(Clone, Copy, Debug)]
pub struct ThreePhase {
    materials: Materials,
    smoothing: bool,
}

impl ThreePhase {
    /// Configure the module with smoothing disabled.
    pub fn new(materials: Materials) -> Self {
        Self {
            materials,
            smoothing: false,
        }
    }

    /// Enable or disable the smearing filter.
    pub fn with_smoothing(mut self, smoothing: bool) -> Self {
        self.smoothing = smoothing;
        self
    }

    /// The configured material coefficients.
    pub fn materials(&self) -> &Materials {
        &self.materials
    }

    /// Whether the smearing filter is part of the pipeline.
    pub fn smoothing(&self) -> bool {
        self.smoothing
    }

    /// The fraction pair the mixer consumes: the smoothed copies when
    /// smoothing is enabled, otherwise the raw fields themselves.
    pub fn fraction_source(&self) -> FractionSource {
        if self.smoothing {
            FractionSource::smoothed()
        } else {
            FractionSource::raw()
        }
    }

    /// Field definitions this configuration requires, including the raw
    /// fractions and metric fields the host is expected to fill.
    pub fn field_defs(&self) -> Vec<(FieldId, FieldDef)> {
        fields::field_defs(&self.materials, self.smoothing)
    }

    /// Handles to the property fields the pipeline produces.
    pub fn property_fields(&self) -> PropertyFields {
        PropertyFields {
            specific_volume: SPECIFIC_VOLUME,
            viscosity: self.materials.any_viscous().then_some(VISCOSITY),
            density: DENSITY,
            elastic_modulus: ELASTIC_MODULUS,
            relaxation_time: RELAXATION_TIME,
        }
    }

    /// The stages in execution order: thin-film correction, then the
    /// optional smearing filter, then property mixing.
    pub fn stages(&self) -> Vec<Box<dyn Stage>> {
        let mut stages: Vec<Box<dyn Stage>> = vec![Box::new(ThinFilmCorrector::new())];
        if self.smoothing {
            stages.push(Box::new(SmearFractions::new()));
        }
        stages.push(Box::new(PropertyMixer::new(
            self.materials,
            self.fraction_source(),
        )));
        stages
    }

    /// Register the fields on `mesh`, seed both metric fields with unit
    /// values, and build the validated pipeline.
    pub fn bind(&self, mesh: &dyn Mesh) -> Result<(Pipeline, FieldStore), PipelineError> {
        let mut store = FieldStore::new(&self.field_defs(), mesh);
        store.fill(CELL_METRIC, 1.0);
        store.fill(FACE_METRIC, 1.0);
        let pipeline = Pipeline::new(self.stages(), &store)?;
        Ok((pipeline, store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{F1, F2, SF1, SF2};
    use slick_core::PhaseCoefficients;
    use slick_mesh::{Cartesian2D, EdgeBehavior};

    fn viscous_materials() -> Materials {
        let mut phases = [PhaseCoefficients::default(); 3];
        phases[0].viscosity = 1.0;
        Materials::new(phases)
    }

    #[test]
    fn stage_order_without_smoothing() {
        let module = ThreePhase::new(Materials::default());
        let names: Vec<_> = module.stages().iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec!["thin_film_correction", "mix_properties"]);
    }

    #[test]
    fn stage_order_with_smoothing() {
        let module = ThreePhase::new(Materials::default()).with_smoothing(true);
        let names: Vec<_> = module.stages().iter().map(|s| s.name().to_string()).collect();
        assert_eq!(
            names,
            vec!["thin_film_correction", "smear_fractions", "mix_properties"]
        );
    }

    #[test]
    fn fraction_source_follows_smoothing_flag() {
        let raw = ThreePhase::new(Materials::default()).fraction_source();
        assert_eq!((raw.f1, raw.f2), (F1, F2));
        let smoothed = ThreePhase::new(Materials::default())
            .with_smoothing(true)
            .fraction_source();
        assert_eq!((smoothed.f1, smoothed.f2), (SF1, SF2));
    }

    #[test]
    fn bind_seeds_unit_metrics() {
        let mesh = Cartesian2D::new(4, 4, EdgeBehavior::Clamp).unwrap();
        let module = ThreePhase::new(viscous_materials());
        let (_pipeline, store) = module.bind(&mesh).unwrap();
        assert!(store.values(CELL_METRIC).unwrap().iter().all(|&v| v == 1.0));
        assert!(store.values(FACE_METRIC).unwrap().iter().all(|&v| v == 1.0));
        assert_eq!(store.values(FACE_METRIC).unwrap().len(), 16 * 2);
    }

    #[test]
    fn bind_validates_smoothed_configuration() {
        let mesh = Cartesian2D::new(4, 4, EdgeBehavior::Clamp).unwrap();
        let module = ThreePhase::new(viscous_materials()).with_smoothing(true);
        let (pipeline, store) = module.bind(&mesh).unwrap();
        assert_eq!(pipeline.stage_names().len(), 3);
        assert!(store.contains(SF1));
        assert!(store.contains(SF2));
    }

    #[test]
    fn viscosity_handle_tracks_materials() {
        assert!(ThreePhase::new(Materials::default())
            .property_fields()
            .viscosity
            .is_none());
        assert_eq!(
            ThreePhase::new(viscous_materials()).property_fields().viscosity,
            Some(crate::fields::VISCOSITY)
        );
    }
}
