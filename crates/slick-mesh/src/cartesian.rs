//! Uniform Cartesian mesh backends.

use crate::edge::EdgeBehavior;
use crate::error::MeshError;
use crate::lattice;
use crate::mesh::{Mesh, StencilNeighbour};
use smallvec::SmallVec;

/// Maximum extent along any axis: coordinates use `i32` internally.
const MAX_EXTENT: u32 = i32::MAX as u32;

fn check_extent(axis: &'static str, value: u32) -> Result<(), MeshError> {
    if value == 0 {
        return Err(MeshError::EmptyMesh);
    }
    if value > MAX_EXTENT {
        return Err(MeshError::ExtentTooLarge {
            axis,
            value,
            max: MAX_EXTENT,
        });
    }
    Ok(())
}

/// A uniform two-dimensional Cartesian mesh.
///
/// Cells rank in row-major order: `rank = row * cols + col`. Axis 0 runs
/// over rows, axis 1 over columns.
#[derive(Debug, Clone)]
pub struct Cartesian2D {
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
}

impl Cartesian2D {
    /// Create a `rows * cols` mesh with the given edge behavior.
    ///
    /// Returns `Err(MeshError::EmptyMesh)` if either extent is 0.
    pub fn new(rows: u32, cols: u32, edge: EdgeBehavior) -> Result<Self, MeshError> {
        check_extent("rows", rows)?;
        check_extent("cols", cols)?;
        Ok(Self { rows, cols, edge })
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    fn dims(&self) -> [u32; 2] {
        [self.rows, self.cols]
    }
}

impl Mesh for Cartesian2D {
    fn ndim(&self) -> usize {
        2
    }

    fn cell_count(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    fn extent(&self, axis: usize) -> u32 {
        self.dims()[axis]
    }

    fn shift(&self, rank: usize, axis: usize, delta: i32) -> Option<usize> {
        lattice::shift_rank(rank, axis, delta, &self.dims(), self.edge)
    }

    fn stencil(&self, rank: usize) -> SmallVec<[StencilNeighbour; 26]> {
        lattice::stencil_rank(rank, &self.dims(), self.edge)
    }
}

/// A uniform three-dimensional Cartesian mesh.
///
/// Cells rank in layer-major order: `rank = (layer * rows + row) * cols +
/// col`. Axis 0 runs over layers, axis 1 over rows, axis 2 over columns.
#[derive(Debug, Clone)]
pub struct Cartesian3D {
    layers: u32,
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
}

impl Cartesian3D {
    /// Create a `layers * rows * cols` mesh with the given edge behavior.
    ///
    /// Returns `Err(MeshError::EmptyMesh)` if any extent is 0.
    pub fn new(layers: u32, rows: u32, cols: u32, edge: EdgeBehavior) -> Result<Self, MeshError> {
        check_extent("layers", layers)?;
        check_extent("rows", rows)?;
        check_extent("cols", cols)?;
        Ok(Self {
            layers,
            rows,
            cols,
            edge,
        })
    }

    /// Number of layers.
    pub fn layers(&self) -> u32 {
        self.layers
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    fn dims(&self) -> [u32; 3] {
        [self.layers, self.rows, self.cols]
    }
}

impl Mesh for Cartesian3D {
    fn ndim(&self) -> usize {
        3
    }

    fn cell_count(&self) -> usize {
        self.layers as usize * self.rows as usize * self.cols as usize
    }

    fn extent(&self, axis: usize) -> u32 {
        self.dims()[axis]
    }

    fn shift(&self, rank: usize, axis: usize, delta: i32) -> Option<usize> {
        lattice::shift_rank(rank, axis, delta, &self.dims(), self.edge)
    }

    fn stencil(&self, rank: usize) -> SmallVec<[StencilNeighbour; 26]> {
        lattice::stencil_rank(rank, &self.dims(), self.edge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_mesh() {
        assert_eq!(
            Cartesian2D::new(0, 4, EdgeBehavior::Clamp).unwrap_err(),
            MeshError::EmptyMesh
        );
        assert_eq!(
            Cartesian3D::new(2, 2, 0, EdgeBehavior::Clamp).unwrap_err(),
            MeshError::EmptyMesh
        );
    }

    #[test]
    fn shift_2d_interior() {
        let m = Cartesian2D::new(4, 5, EdgeBehavior::Clamp).unwrap();
        let rank = 1 * 5 + 2;
        assert_eq!(m.shift(rank, 0, -1), Some(2)); // row 0, col 2
        assert_eq!(m.shift(rank, 1, -1), Some(1 * 5 + 1));
        assert_eq!(m.shift(rank, 1, 1), Some(1 * 5 + 3));
    }

    #[test]
    fn shift_2d_clamp_self_at_edge() {
        let m = Cartesian2D::new(4, 5, EdgeBehavior::Clamp).unwrap();
        assert_eq!(m.shift(0, 0, -1), Some(0));
        assert_eq!(m.shift(0, 1, -1), Some(0));
    }

    #[test]
    fn shift_2d_wrap() {
        let m = Cartesian2D::new(4, 5, EdgeBehavior::Wrap).unwrap();
        assert_eq!(m.shift(0, 1, -1), Some(4)); // row 0 wraps to col 4
        assert_eq!(m.shift(0, 0, -1), Some(3 * 5));
    }

    #[test]
    fn shift_2d_absorb() {
        let m = Cartesian2D::new(4, 5, EdgeBehavior::Absorb).unwrap();
        assert_eq!(m.shift(0, 0, -1), None);
        assert_eq!(m.shift(0, 0, 1), Some(5));
    }

    #[test]
    fn shift_3d_axes() {
        let m = Cartesian3D::new(3, 4, 5, EdgeBehavior::Clamp).unwrap();
        let rank = (1 * 4 + 2) * 5 + 3;
        assert_eq!(m.shift(rank, 0, -1), Some((0 * 4 + 2) * 5 + 3));
        assert_eq!(m.shift(rank, 1, -1), Some((1 * 4 + 1) * 5 + 3));
        assert_eq!(m.shift(rank, 2, -1), Some((1 * 4 + 2) * 5 + 2));
    }

    #[test]
    fn downcast_from_dyn() {
        let m = Cartesian2D::new(2, 2, EdgeBehavior::Clamp).unwrap();
        let dynref: &dyn Mesh = &m;
        assert!(dynref.downcast_ref::<Cartesian2D>().is_some());
        assert!(dynref.downcast_ref::<Cartesian3D>().is_none());
    }

    #[test]
    fn uniform_mesh_has_no_refinement() {
        let m = Cartesian2D::new(2, 2, EdgeBehavior::Clamp).unwrap();
        assert!(m.refinement().is_none());
    }
}
