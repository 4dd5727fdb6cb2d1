//! The core `Mesh` trait and `dyn Mesh` downcast support.

use crate::refine::Refinement;
use smallvec::SmallVec;
use std::any::Any;

/// A neighbour in the full corner-including stencil of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StencilNeighbour {
    /// Flat rank of the neighbouring cell.
    pub rank: usize,
    /// Number of axes along which the neighbour is offset (1 for a
    /// face neighbour, 2 for an edge/corner neighbour in 2D, up to 3
    /// for a 3D corner). Stencil weights derive from this.
    pub offset_axes: u32,
}

/// Structured spatial topology the property pipeline iterates over.
///
/// Cells are addressed by flat rank in canonical row-major order. The
/// trait exposes exactly the adjacency the pipeline needs: single-axis
/// shifts for face-straddling averages and the `3^d - 1` stencil for the
/// smearing filter. Everything else about the host grid (traversal,
/// boundary conditions, refinement mechanics) stays with the host.
///
/// # Object safety
///
/// Designed for use as `dyn Mesh`; use `downcast_ref` for backend-specific
/// fast paths.
///
/// # Thread safety
///
/// `Sync` is required because step contexts hold `&dyn Mesh` and the host
/// may dispatch cell loops across threads.
pub trait Mesh: Any + Send + Sync + 'static {
    /// Number of spatial dimensions.
    fn ndim(&self) -> usize;

    /// Total number of cells.
    fn cell_count(&self) -> usize;

    /// Number of cells along `axis`.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= ndim()`.
    fn extent(&self, axis: usize) -> u32;

    /// Rank of the cell `delta` steps from `rank` along `axis`, resolved
    /// under the mesh's edge behavior.
    ///
    /// Returns `None` only when the neighbour is absorbed at a domain
    /// edge; `Clamp` and `Wrap` always resolve.
    fn shift(&self, rank: usize, axis: usize, delta: i32) -> Option<usize>;

    /// The full `3^d - 1` neighbourhood of a cell (face, edge, and corner
    /// neighbours), with each neighbour's offset-axis count.
    ///
    /// Neighbours absorbed at a domain edge are omitted.
    fn stencil(&self, rank: usize) -> SmallVec<[StencilNeighbour; 26]>;

    /// Adaptive-refinement hook surface, if this mesh supports it.
    ///
    /// Uniform meshes return `None` and the pipeline skips hook
    /// installation entirely.
    fn refinement(&self) -> Option<&dyn Refinement> {
        None
    }
}

impl dyn Mesh {
    /// Attempt to downcast a trait object to a concrete mesh type.
    ///
    /// Enables opt-in specialization: code working with `&dyn Mesh` can
    /// check for a known backend and use index arithmetic directly.
    pub fn downcast_ref<T: Mesh>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }
}
