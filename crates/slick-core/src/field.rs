//! Field definitions, centering, and the [`FieldSet`] bitset.

use crate::id::FieldId;

/// Where a field's values live on the mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Centering {
    /// One value per cell, at the cell center.
    Cell,
    /// One value per cell face, indexed by axis. Component `a` of cell `i`
    /// is the face shared with cell `i`'s lower neighbour along axis `a`.
    Face,
}

impl Centering {
    /// Number of f32 storage slots this centering requires per cell on a
    /// mesh with `ndim` spatial dimensions.
    pub fn slots(&self, ndim: usize) -> usize {
        match self {
            Self::Cell => 1,
            Self::Face => ndim,
        }
    }
}

/// How a field's contents evolve across solver steps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldMutability {
    /// Set once at binding time and never written by the pipeline
    /// (mesh metric fields, externally supplied). Pipeline validation
    /// rejects any stage that declares a write to a static field.
    Static,
    /// Recomputed or updated by a pipeline stage every step.
    PerStep,
}

/// Definition of a field registered with the module.
///
/// Fields are the unit of per-cell (or per-face) state. Each field has a
/// centering, a mutability class, and optional annotations. Registration
/// order fixes the [`FieldId`] assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDef {
    /// Human-readable name for error reporting.
    pub name: String,
    /// Cell- or face-centered storage.
    pub centering: Centering,
    /// Whether the pipeline rewrites the field each step.
    pub mutability: FieldMutability,
    /// Optional unit annotation (e.g., `"kg/m^3"`).
    pub units: Option<String>,
    /// Optional nominal `(min, max)` bounds. Advisory only: producers are
    /// not trusted to respect them, so consumers clamp regardless.
    pub bounds: Option<(f32, f32)>,
}

/// A set of field IDs implemented as a single-word bitset.
///
/// Used by stages to declare which fields they read and write, enabling
/// startup validation of the pipeline. The module's field registry is
/// small and closed, so IDs are capped at [`FieldSet::CAPACITY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FieldSet {
    bits: u64,
}

impl FieldSet {
    /// Maximum number of distinct field IDs a set can hold.
    pub const CAPACITY: u32 = u64::BITS;

    /// Create an empty field set.
    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Insert a field ID into the set.
    ///
    /// # Panics
    ///
    /// Panics if `field.0 >= FieldSet::CAPACITY`.
    pub fn insert(&mut self, field: FieldId) {
        assert!(
            field.0 < Self::CAPACITY,
            "field id {field} exceeds FieldSet capacity {}",
            Self::CAPACITY
        );
        self.bits |= 1u64 << field.0;
    }

    /// Check whether the set contains a field ID.
    pub fn contains(&self, field: FieldId) -> bool {
        field.0 < Self::CAPACITY && (self.bits & (1u64 << field.0)) != 0
    }

    /// Return the union of two sets (`self | other`).
    pub fn union(&self, other: &Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Return the intersection of two sets (`self & other`).
    pub fn intersection(&self, other: &Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Return the set difference (`self - other`).
    pub fn difference(&self, other: &Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Check whether `self` is a subset of `other`.
    pub fn is_subset(&self, other: &Self) -> bool {
        self.bits & !other.bits == 0
    }

    /// Returns `true` if the set contains no fields.
    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Returns the number of fields in the set.
    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate over the field IDs in the set, in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = FieldId> {
        let bits = self.bits;
        (0..Self::CAPACITY).filter_map(move |i| {
            if bits & (1u64 << i) != 0 {
                Some(FieldId(i))
            } else {
                None
            }
        })
    }
}

impl FromIterator<FieldId> for FieldSet {
    fn from_iter<I: IntoIterator<Item = FieldId>>(iter: I) -> Self {
        let mut set = Self::empty();
        for field in iter {
            set.insert(field);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_field_set() -> impl Strategy<Value = FieldSet> {
        prop::collection::vec(0u32..FieldSet::CAPACITY, 0..24)
            .prop_map(|ids| ids.into_iter().map(FieldId).collect::<FieldSet>())
    }

    proptest! {
        #[test]
        fn union_commutative(a in arb_field_set(), b in arb_field_set()) {
            prop_assert_eq!(a.union(&b), b.union(&a));
        }

        #[test]
        fn intersection_commutative(a in arb_field_set(), b in arb_field_set()) {
            prop_assert_eq!(a.intersection(&b), b.intersection(&a));
        }

        #[test]
        fn union_associative(
            a in arb_field_set(),
            b in arb_field_set(),
            c in arb_field_set(),
        ) {
            prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
        }

        #[test]
        fn union_identity(a in arb_field_set()) {
            prop_assert_eq!(a.union(&FieldSet::empty()), a);
        }

        #[test]
        fn difference_removes_common(a in arb_field_set(), b in arb_field_set()) {
            let diff = a.difference(&b);
            for field in diff.iter() {
                prop_assert!(a.contains(field), "diff element {field:?} not in a");
                prop_assert!(!b.contains(field), "diff element {field:?} in b");
            }
        }

        #[test]
        fn subset_reflexive(a in arb_field_set()) {
            prop_assert!(a.is_subset(&a));
        }

        #[test]
        fn empty_is_subset(a in arb_field_set()) {
            prop_assert!(FieldSet::empty().is_subset(&a));
        }

        #[test]
        fn insert_contains(id in 0u32..FieldSet::CAPACITY) {
            let mut set = FieldSet::empty();
            set.insert(FieldId(id));
            prop_assert!(set.contains(FieldId(id)));
            prop_assert_eq!(set.len(), 1);
        }

        #[test]
        fn len_matches_iter_count(a in arb_field_set()) {
            prop_assert_eq!(a.len(), a.iter().count());
        }
    }

    #[test]
    #[should_panic(expected = "exceeds FieldSet capacity")]
    fn insert_past_capacity_panics() {
        let mut set = FieldSet::empty();
        set.insert(FieldId(FieldSet::CAPACITY));
    }

    #[test]
    fn centering_slots() {
        assert_eq!(Centering::Cell.slots(2), 1);
        assert_eq!(Centering::Cell.slots(3), 1);
        assert_eq!(Centering::Face.slots(2), 2);
        assert_eq!(Centering::Face.slots(3), 3);
    }
}
