//! Error types for mesh construction.

use std::fmt;

/// Errors arising from mesh construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// Attempted to construct a mesh with zero cells.
    EmptyMesh,
    /// An axis extent exceeds the addressable maximum.
    ExtentTooLarge {
        /// Which axis.
        axis: &'static str,
        /// The offending extent.
        value: u32,
        /// The maximum supported extent.
        max: u32,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyMesh => write!(f, "mesh must have at least one cell"),
            Self::ExtentTooLarge { axis, value, max } => {
                write!(f, "{axis} extent {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for MeshError {}
