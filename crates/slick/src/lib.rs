//! Slick: three-phase material property resolution for Eulerian flow solvers.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all slick sub-crates. For most users, adding `slick` as a single
//! dependency is sufficient.
//!
//! Two volume-fraction fields encode three immiscible phases: an outer
//! phase, an inner phase nested within it, and the surrounding bulk. Each
//! solver step the bound pipeline corrects degenerate thin-film overlap,
//! optionally smooths the fractions, and mixes per-phase coefficients into
//! the density, viscosity, elastic modulus, and relaxation time fields the
//! host's momentum and stress solves consume.
//!
//! # Quick start
//!
//! ```rust
//! use slick::prelude::*;
//! use slick::props::F1;
//!
//! // Outer phase: water-like, viscous and elastic.
//! let mut phases = [PhaseCoefficients::default(); 3];
//! phases[0] = PhaseCoefficients {
//!     density: 1000.0,
//!     viscosity: 1.0,
//!     elastic_modulus: 10.0,
//!     relaxation_time: 1.0,
//! };
//!
//! let mesh = Cartesian2D::new(8, 8, EdgeBehavior::Clamp).unwrap();
//! let module = ThreePhase::new(Materials::new(phases)).with_smoothing(true);
//! let (pipeline, mut store) = module.bind(&mesh).unwrap();
//!
//! // The host owns the fraction fields; fill with pure outer phase here.
//! store.fill(F1, 1.0);
//! pipeline.run_step(&mut store, &mesh, StepId(1)).unwrap();
//!
//! let props = module.property_fields();
//! for &rho in store.values(props.density).unwrap() {
//!     assert!((rho - 1000.0).abs() < 1e-2);
//! }
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `slick-core` | IDs, field definitions, materials, core traits |
//! | [`mesh`] | `slick-mesh` | Cartesian meshes, edge behavior, refinement hooks |
//! | [`stage`] | `slick-stage` | Stage trait, pipeline validation, field store |
//! | [`props`] | `slick-props` | The three-phase stages and the [`props::ThreePhase`] binding |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and IDs (`slick-core`).
///
/// Contains field definitions, material coefficients, error types, the
/// occupancy decomposition, and the fundamental traits
/// ([`types::FieldReader`], [`types::FieldWriter`]).
pub use slick_core as types;

/// Mesh backends and refinement hooks (`slick-mesh`).
///
/// Provides the [`mesh::Mesh`] trait, the [`mesh::Cartesian2D`] and
/// [`mesh::Cartesian3D`] backends, and the [`mesh::AdaptiveMesh`] wrapper
/// exposing prolongation hooks.
pub use slick_mesh as mesh;

/// Stage trait, pipeline validation, and field storage (`slick-stage`).
///
/// The [`stage::Stage`] trait is the extension point for additional
/// per-step logic alongside the built-in stages.
pub use slick_stage as stage;

/// The three-phase property stages (`slick-props`).
///
/// [`props::ThreePhase`] is the usual entry point; the individual stages
/// ([`props::ThinFilmCorrector`], [`props::SmearFractions`],
/// [`props::PropertyMixer`]) are public for custom pipelines.
pub use slick_props as props;

/// Common imports for typical slick usage.
///
/// ```rust
/// use slick::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use slick_core::{
        Centering, FieldDef, FieldId, FieldMutability, FieldReader, FieldSet, FieldWriter,
        Materials, PhaseCoefficients, StepId,
    };

    // Errors
    pub use slick_core::{StageError, StepError};

    // Mesh
    pub use slick_mesh::{AdaptiveMesh, Cartesian2D, Cartesian3D, EdgeBehavior, Mesh};

    // Stages and pipeline
    pub use slick_stage::{FieldStore, Pipeline, Stage, StepContext, WriteMode};

    // Three-phase module
    pub use slick_props::{Blend, PropertyFields, ThreePhase};
}
