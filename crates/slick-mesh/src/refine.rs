//! Adaptive-refinement hook surface.
//!
//! The pipeline never refines the mesh itself; it only needs to keep its
//! smoothed fraction fields consistent when the host refines. It does so
//! by installing a per-field prolongation operator (the rule used to
//! populate newly created child cells) and marking the field's boundary
//! data stale so boundary conditions are recomputed before next use.

use crate::mesh::{Mesh, StencilNeighbour};
use slick_core::FieldId;
use smallvec::SmallVec;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

#[derive(Default)]
struct HookState {
    prolongation: HashMap<FieldId, Prolongation>,
    stale: HashSet<FieldId>,
}

/// Prolongation operator used when the host creates child cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prolongation {
    /// Smooth bilinear (trilinear in 3D) interpolation from the parent
    /// neighbourhood. Installed after smearing so refined regions keep
    /// the filter's smooth profile.
    Bilinear,
    /// Conservative volume-fraction refinement preserving the parent's
    /// phase content. Installed after property mixing for downstream
    /// consumers.
    Conservative,
}

/// Capability trait for meshes that support refinement hooks.
///
/// Obtained through [`Mesh::refinement`]; uniform meshes return `None`
/// and the pipeline skips installation. Methods take `&self` because
/// stages hold `&dyn Mesh`; implementations use interior mutability.
pub trait Refinement: Send + Sync {
    /// Install the prolongation operator for a field, replacing any
    /// previously installed choice.
    fn install_prolongation(&self, field: FieldId, op: Prolongation);

    /// Mark a field's boundary data stale so the host recomputes boundary
    /// conditions before the field is next read.
    fn mark_boundary_stale(&self, field: FieldId);

    /// The currently installed prolongation operator for a field, if any.
    fn prolongation(&self, field: FieldId) -> Option<Prolongation>;

    /// Whether a field's boundary data is currently marked stale.
    fn is_boundary_stale(&self, field: FieldId) -> bool;

    /// Host acknowledgement that a field's boundary conditions have been
    /// recomputed.
    fn clear_boundary_stale(&self, field: FieldId);
}

/// Wrapper adding the [`Refinement`] capability to any mesh backend.
///
/// Records the per-field prolongation choice and boundary staleness for
/// the host to consult when it refines; topology queries delegate to the
/// wrapped mesh unchanged.
pub struct AdaptiveMesh<M: Mesh> {
    inner: M,
    hooks: Mutex<HookState>,
}

impl<M: Mesh> AdaptiveMesh<M> {
    /// Wrap a mesh backend with refinement hook tracking.
    pub fn new(inner: M) -> Self {
        Self {
            inner,
            hooks: Mutex::new(HookState::default()),
        }
    }

    /// The wrapped mesh backend.
    pub fn inner(&self) -> &M {
        &self.inner
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HookState> {
        // Poisoning can only result from a panic in one of the short
        // accessors below, which do not panic.
        self.hooks.lock().expect("refinement hook state poisoned")
    }
}

impl<M: Mesh> Mesh for AdaptiveMesh<M> {
    fn ndim(&self) -> usize {
        self.inner.ndim()
    }

    fn cell_count(&self) -> usize {
        self.inner.cell_count()
    }

    fn extent(&self, axis: usize) -> u32 {
        self.inner.extent(axis)
    }

    fn shift(&self, rank: usize, axis: usize, delta: i32) -> Option<usize> {
        self.inner.shift(rank, axis, delta)
    }

    fn stencil(&self, rank: usize) -> SmallVec<[StencilNeighbour; 26]> {
        self.inner.stencil(rank)
    }

    fn refinement(&self) -> Option<&dyn Refinement> {
        Some(self)
    }
}

impl<M: Mesh> Refinement for AdaptiveMesh<M> {
    fn install_prolongation(&self, field: FieldId, op: Prolongation) {
        self.lock().prolongation.insert(field, op);
    }

    fn mark_boundary_stale(&self, field: FieldId) {
        self.lock().stale.insert(field);
    }

    fn prolongation(&self, field: FieldId) -> Option<Prolongation> {
        self.lock().prolongation.get(&field).copied()
    }

    fn is_boundary_stale(&self, field: FieldId) -> bool {
        self.lock().stale.contains(&field)
    }

    fn clear_boundary_stale(&self, field: FieldId) {
        self.lock().stale.remove(&field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cartesian::Cartesian2D;
    use crate::edge::EdgeBehavior;

    fn adaptive() -> AdaptiveMesh<Cartesian2D> {
        AdaptiveMesh::new(Cartesian2D::new(4, 4, EdgeBehavior::Clamp).unwrap())
    }

    #[test]
    fn capability_is_exposed() {
        let m = adaptive();
        let dynref: &dyn Mesh = &m;
        assert!(dynref.refinement().is_some());
    }

    #[test]
    fn topology_delegates() {
        let m = adaptive();
        assert_eq!(m.ndim(), 2);
        assert_eq!(m.cell_count(), 16);
        assert_eq!(m.shift(0, 1, 1), Some(1));
    }

    #[test]
    fn install_replaces_previous_operator() {
        let m = adaptive();
        let field = FieldId(2);
        assert_eq!(m.prolongation(field), None);
        m.install_prolongation(field, Prolongation::Bilinear);
        assert_eq!(m.prolongation(field), Some(Prolongation::Bilinear));
        m.install_prolongation(field, Prolongation::Conservative);
        assert_eq!(m.prolongation(field), Some(Prolongation::Conservative));
    }

    #[test]
    fn stale_mark_and_clear() {
        let m = adaptive();
        let field = FieldId(2);
        assert!(!m.is_boundary_stale(field));
        m.mark_boundary_stale(field);
        assert!(m.is_boundary_stale(field));
        m.clear_boundary_stale(field);
        assert!(!m.is_boundary_stale(field));
    }
}
