//! Shared rank arithmetic for Cartesian backends.

use crate::edge::EdgeBehavior;
use crate::mesh::StencilNeighbour;
use smallvec::SmallVec;

/// Resolve a single axis value under the given edge behavior.
/// Returns `Some(resolved_value)` or `None` for Absorb out-of-bounds.
pub(crate) fn resolve_axis(val: i32, len: u32, edge: EdgeBehavior) -> Option<i32> {
    let n = len as i32;
    if val >= 0 && val < n {
        return Some(val);
    }
    match edge {
        EdgeBehavior::Absorb => None,
        EdgeBehavior::Clamp => Some(val.clamp(0, n - 1)),
        EdgeBehavior::Wrap => Some(((val % n) + n) % n),
    }
}

/// Decompose a flat rank into per-axis coordinates (row-major: last axis
/// varies fastest).
pub(crate) fn decompose(rank: usize, dims: &[u32]) -> SmallVec<[i32; 3]> {
    let mut coords: SmallVec<[i32; 3]> = SmallVec::from_elem(0, dims.len());
    let mut rem = rank;
    for (axis, &len) in dims.iter().enumerate().rev() {
        coords[axis] = (rem % len as usize) as i32;
        rem /= len as usize;
    }
    coords
}

/// Recompose per-axis coordinates into a flat rank.
pub(crate) fn recompose(coords: &[i32], dims: &[u32]) -> usize {
    let mut rank = 0usize;
    for (axis, &len) in dims.iter().enumerate() {
        rank = rank * len as usize + coords[axis] as usize;
    }
    rank
}

/// Shift a rank by `delta` along one axis, resolving the edge behavior.
pub(crate) fn shift_rank(
    rank: usize,
    axis: usize,
    delta: i32,
    dims: &[u32],
    edge: EdgeBehavior,
) -> Option<usize> {
    let mut coords = decompose(rank, dims);
    coords[axis] = resolve_axis(coords[axis] + delta, dims[axis], edge)?;
    Some(recompose(&coords, dims))
}

/// Enumerate the full `3^d - 1` stencil neighbourhood of a rank.
///
/// Offsets are generated in lexicographic order over `{-1, 0, +1}^d` with
/// the all-zero offset skipped. Absorbed neighbours are omitted.
pub(crate) fn stencil_rank(
    rank: usize,
    dims: &[u32],
    edge: EdgeBehavior,
) -> SmallVec<[StencilNeighbour; 26]> {
    let d = dims.len();
    let coords = decompose(rank, dims);
    let mut out: SmallVec<[StencilNeighbour; 26]> = SmallVec::new();

    let combos = 3usize.pow(d as u32);
    'combo: for code in 0..combos {
        let mut rem = code;
        let mut nb: SmallVec<[i32; 3]> = SmallVec::from_elem(0, d);
        let mut offset_axes = 0u32;
        for axis in (0..d).rev() {
            let delta = (rem % 3) as i32 - 1;
            rem /= 3;
            if delta != 0 {
                offset_axes += 1;
            }
            match resolve_axis(coords[axis] + delta, dims[axis], edge) {
                Some(v) => nb[axis] = v,
                None => continue 'combo,
            }
        }
        if offset_axes == 0 {
            continue;
        }
        out.push(StencilNeighbour {
            rank: recompose(&nb, dims),
            offset_axes,
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_dims() -> impl Strategy<Value = Vec<u32>> {
        prop::collection::vec(1u32..16, 1..=3)
    }

    fn pick_rank(dims: &[u32], seed: usize) -> usize {
        let total: usize = dims.iter().map(|&d| d as usize).product();
        seed % total
    }

    proptest! {
        #[test]
        fn decompose_recompose_roundtrip_any_dims(
            dims in arb_dims(),
            seed in any::<usize>(),
        ) {
            let rank = pick_rank(&dims, seed);
            let coords = decompose(rank, &dims);
            prop_assert_eq!(recompose(&coords, &dims), rank);
        }

        #[test]
        fn wrap_shift_is_invertible(
            dims in arb_dims(),
            seed in any::<usize>(),
            axis_seed in any::<usize>(),
            delta in 1i32..4,
        ) {
            let rank = pick_rank(&dims, seed);
            let axis = axis_seed % dims.len();
            let there =
                shift_rank(rank, axis, delta, &dims, EdgeBehavior::Wrap).unwrap();
            let back =
                shift_rank(there, axis, -delta, &dims, EdgeBehavior::Wrap).unwrap();
            prop_assert_eq!(back, rank);
        }

        #[test]
        fn clamp_and_wrap_stencils_are_full(
            dims in arb_dims(),
            seed in any::<usize>(),
        ) {
            let rank = pick_rank(&dims, seed);
            let full = 3usize.pow(dims.len() as u32) - 1;
            for edge in [EdgeBehavior::Clamp, EdgeBehavior::Wrap] {
                let st = stencil_rank(rank, &dims, edge);
                prop_assert_eq!(st.len(), full, "edge {:?}", edge);
            }
        }

        #[test]
        fn absorb_stencil_stays_in_bounds(
            dims in arb_dims(),
            seed in any::<usize>(),
        ) {
            let rank = pick_rank(&dims, seed);
            let total: usize = dims.iter().map(|&d| d as usize).product();
            let st = stencil_rank(rank, &dims, EdgeBehavior::Absorb);
            prop_assert!(st.len() <= 3usize.pow(dims.len() as u32) - 1);
            for nb in st {
                prop_assert!(nb.rank < total, "rank {} out of {total}", nb.rank);
                prop_assert!(nb.offset_axes >= 1 && nb.offset_axes <= dims.len() as u32);
            }
        }
    }

    #[test]
    fn resolve_axis_in_bounds() {
        assert_eq!(resolve_axis(2, 5, EdgeBehavior::Absorb), Some(2));
    }

    #[test]
    fn resolve_axis_clamp() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Clamp), Some(0));
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Clamp), Some(4));
    }

    #[test]
    fn resolve_axis_wrap() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Wrap), Some(4));
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Wrap), Some(0));
    }

    #[test]
    fn resolve_axis_absorb() {
        assert_eq!(resolve_axis(-1, 5, EdgeBehavior::Absorb), None);
        assert_eq!(resolve_axis(5, 5, EdgeBehavior::Absorb), None);
    }

    #[test]
    fn decompose_recompose_roundtrip() {
        let dims = [3u32, 4, 5];
        for rank in 0..60usize {
            let coords = decompose(rank, &dims);
            assert_eq!(recompose(&coords, &dims), rank);
        }
    }

    #[test]
    fn interior_stencil_counts() {
        // 5x5 grid, center cell: 8 neighbours, 4 face + 4 corner.
        let dims = [5u32, 5];
        let center = 2 * 5 + 2;
        let st = stencil_rank(center, &dims, EdgeBehavior::Absorb);
        assert_eq!(st.len(), 8);
        assert_eq!(st.iter().filter(|n| n.offset_axes == 1).count(), 4);
        assert_eq!(st.iter().filter(|n| n.offset_axes == 2).count(), 4);
    }

    #[test]
    fn corner_stencil_absorb() {
        let dims = [5u32, 5];
        let st = stencil_rank(0, &dims, EdgeBehavior::Absorb);
        assert_eq!(st.len(), 3);
    }

    #[test]
    fn corner_stencil_wrap_is_full() {
        let dims = [5u32, 5];
        let st = stencil_rank(0, &dims, EdgeBehavior::Wrap);
        assert_eq!(st.len(), 8);
    }

    #[test]
    fn stencil_3d_counts() {
        let dims = [3u32, 3, 3];
        let center = (1 * 3 + 1) * 3 + 1;
        let st = stencil_rank(center, &dims, EdgeBehavior::Absorb);
        assert_eq!(st.len(), 26);
        assert_eq!(st.iter().filter(|n| n.offset_axes == 1).count(), 6);
        assert_eq!(st.iter().filter(|n| n.offset_axes == 2).count(), 12);
        assert_eq!(st.iter().filter(|n| n.offset_axes == 3).count(), 8);
    }
}
