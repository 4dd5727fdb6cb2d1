//! Core types and traits for the slick multiphase property module.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! fundamental abstractions used throughout the slick workspace: typed IDs,
//! field descriptors, error types, the immutable material configuration, and
//! the three-phase occupancy encoder.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod id;
pub mod material;
pub mod phase;
pub mod traits;

pub use error::{StageError, StepError};
pub use field::{Centering, FieldDef, FieldMutability, FieldSet};
pub use id::{FieldId, StepId};
pub use material::{Materials, PhaseCoefficients};
pub use phase::{clamp_unit, occupancy};
pub use traits::{FieldReader, FieldWriter};
