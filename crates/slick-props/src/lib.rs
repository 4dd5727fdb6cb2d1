//! Three-phase property resolution stages for slick.
//!
//! Two volume-fraction fields jointly encode three immiscible phases (one
//! nested inside the other, modeling a precursor film). The stages here
//! derive, at every cell and face, the local density, dynamic viscosity,
//! elastic modulus, and relaxation time, keeping them consistent under
//! optional smoothing and mesh refinement.
//!
//! # Pipeline order (each solver step)
//!
//! 1. [`ThinFilmCorrector`] — resolves degenerate overlap between the raw
//!    fraction fields (in place, on the outer fraction).
//! 2. [`SmearFractions`] — optional low-pass filter producing smoothed
//!    copies of the fractions; installs bilinear refinement interpolation.
//! 3. [`PropertyMixer`] — face- and cell-centered property synthesis from
//!    the (smoothed) fractions; reinstalls conservative refinement
//!    interpolation for downstream consumers.
//!
//! [`ThreePhase`] performs the one-time binding: field registration,
//! stage construction in the order above, and the read-only property
//! handles the host's momentum/stress solve consumes.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod blend;
pub mod fields;
pub mod mixer;
pub mod module;
pub mod smear;
pub mod thin_film;

pub use blend::{ArithmeticBlend, Blend, HarmonicBlend};
pub use fields::{
    FractionSource, CELL_METRIC, DENSITY, ELASTIC_MODULUS, F1, F2, FACE_METRIC,
    RELAXATION_TIME, SF1, SF2, SPECIFIC_VOLUME, VISCOSITY,
};
pub use mixer::PropertyMixer;
pub use module::{PropertyFields, ThreePhase};
pub use smear::SmearFractions;
pub use thin_film::ThinFilmCorrector;
