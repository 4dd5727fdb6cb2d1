//! Structured mesh topology for slick.
//!
//! This crate defines the [`Mesh`] trait — the spatial abstraction the
//! property pipeline iterates over — along with uniform Cartesian backends
//! and the adaptive-refinement hook surface.
//!
//! # Backends
//!
//! - [`Cartesian2D`]: uniform 2D grid, row-major, configurable [`EdgeBehavior`]
//! - [`Cartesian3D`]: uniform 3D grid, layer-major analog
//! - [`AdaptiveMesh`]: wrapper adding the [`Refinement`] capability to any
//!   backend; the refinement mechanics themselves stay with the host solver,
//!   only the per-field prolongation choice and boundary staleness live here
//!
//! Cells are addressed by flat rank in canonical (row-major) order; stages
//! use [`Mesh::shift`] for face adjacency and [`Mesh::stencil`] for the full
//! corner-including neighbourhood.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cartesian;
pub mod edge;
pub mod error;
mod lattice;
pub mod mesh;
pub mod refine;

pub use cartesian::{Cartesian2D, Cartesian3D};
pub use edge::EdgeBehavior;
pub use error::MeshError;
pub use mesh::{Mesh, StencilNeighbour};
pub use refine::{AdaptiveMesh, Prolongation, Refinement};
