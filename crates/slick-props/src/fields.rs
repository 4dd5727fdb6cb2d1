//! Field constants and definitions for the three-phase property module.

use slick_core::{Centering, FieldDef, FieldId, FieldMutability, Materials};

/// Outer-phase volume fraction (raw, owned by the transport solver).
pub const F1: FieldId = FieldId(0);
/// Inner-phase volume fraction, nested within [`F1`] (raw, owned by the
/// transport solver).
pub const F2: FieldId = FieldId(1);
/// Smoothed copy of [`F1`]. Registered only when smoothing is enabled.
pub const SF1: FieldId = FieldId(2);
/// Smoothed copy of [`F2`]. Registered only when smoothing is enabled.
pub const SF2: FieldId = FieldId(3);
/// Per-cell geometric scale factor (1 on plain Cartesian grids).
pub const CELL_METRIC: FieldId = FieldId(4);
/// Per-face geometric scale factor (1 on plain Cartesian grids).
pub const FACE_METRIC: FieldId = FieldId(5);
/// Face-centered inverse density (specific volume).
pub const SPECIFIC_VOLUME: FieldId = FieldId(6);
/// Face-centered dynamic viscosity. Allocated only when some phase is
/// viscous.
pub const VISCOSITY: FieldId = FieldId(7);
/// Cell-centered density.
pub const DENSITY: FieldId = FieldId(8);
/// Cell-centered elastic modulus.
pub const ELASTIC_MODULUS: FieldId = FieldId(9);
/// Cell-centered relaxation time.
pub const RELAXATION_TIME: FieldId = FieldId(10);

/// The fraction pair the property mixer reads.
///
/// With smoothing enabled this names the smoothed fields; with smoothing
/// disabled it names the raw fields directly — the zero-cost aliasing the
/// original expresses by making the smoothed symbols literal aliases of
/// the raw ones. The mixer's code path is identical either way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FractionSource {
    /// Outer-phase fraction field the mixer reads.
    pub f1: FieldId,
    /// Inner-phase fraction field the mixer reads.
    pub f2: FieldId,
}

impl FractionSource {
    /// Read the raw fractions directly (smoothing disabled).
    pub fn raw() -> Self {
        Self { f1: F1, f2: F2 }
    }

    /// Read the smoothed copies (smoothing enabled).
    pub fn smoothed() -> Self {
        Self { f1: SF1, f2: SF2 }
    }
}

fn fraction_def(name: &str) -> FieldDef {
    FieldDef {
        name: name.into(),
        centering: Centering::Cell,
        mutability: FieldMutability::PerStep,
        units: None,
        bounds: Some((0.0, 1.0)),
    }
}

fn cell_def(name: &str, units: &str) -> FieldDef {
    FieldDef {
        name: name.into(),
        centering: Centering::Cell,
        mutability: FieldMutability::PerStep,
        units: Some(units.into()),
        bounds: None,
    }
}

fn face_def(name: &str, units: &str) -> FieldDef {
    FieldDef {
        name: name.into(),
        centering: Centering::Face,
        mutability: FieldMutability::PerStep,
        units: Some(units.into()),
        bounds: None,
    }
}

/// The field definitions for the module, in [`FieldId`] order.
///
/// Smoothed copies appear only when `smoothing` is enabled; face-centered
/// viscosity only when some phase is viscous.
pub fn field_defs(materials: &Materials, smoothing: bool) -> Vec<(FieldId, FieldDef)> {
    let mut defs = vec![
        (F1, fraction_def("f1")),
        (F2, fraction_def("f2")),
    ];
    if smoothing {
        defs.push((SF1, fraction_def("sf1")));
        defs.push((SF2, fraction_def("sf2")));
    }
    defs.push((
        CELL_METRIC,
        FieldDef {
            name: "cell_metric".into(),
            centering: Centering::Cell,
            mutability: FieldMutability::Static,
            units: None,
            bounds: None,
        },
    ));
    defs.push((
        FACE_METRIC,
        FieldDef {
            name: "face_metric".into(),
            centering: Centering::Face,
            mutability: FieldMutability::Static,
            units: None,
            bounds: None,
        },
    ));
    defs.push((SPECIFIC_VOLUME, face_def("specific_volume", "m^3/kg")));
    if materials.any_viscous() {
        defs.push((VISCOSITY, face_def("viscosity", "Pa*s")));
    }
    defs.push((DENSITY, cell_def("density", "kg/m^3")));
    defs.push((ELASTIC_MODULUS, cell_def("elastic_modulus", "Pa")));
    defs.push((RELAXATION_TIME, cell_def("relaxation_time", "s")));
    defs
}
