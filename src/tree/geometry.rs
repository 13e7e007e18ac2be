//! Tree-shape derivation.
//!
//! Everything about a CSS-tree's shape follows from two numbers: the key
//! count and the per-node slot count. This module derives the four scalars
//! the builder and searcher need, using integer arithmetic only. The height
//! search runs by repeated multiplication instead of floating-point
//! logarithms, which keeps the result exact for any input that fits in
//! memory and turns capacity overflow into a construction error instead of
//! a rounding bug.

use eyre::{bail, Result};

/// Shape of the implicit multiway tree, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Geometry {
    /// Levels of internal nodes above the leaf groups.
    pub height: usize,
    /// Count of materialized internal nodes.
    pub internal_nodes: usize,
    /// Breadth-first child-index threshold: children below it map onto the
    /// second half of the leaf array (wrap-around), children at or above it
    /// onto the first half.
    pub half_marker: usize,
    /// Internal nodes whose entire subtree of leaves is absent.
    pub vacant_subtrees: usize,
}

impl Geometry {
    /// Derives the shape for `leaf_count` keys with `slots` keys per node.
    ///
    /// The height is the smallest `h` with `(slots+1)^h >= ceil(leaf_count /
    /// slots)`. With fewer leaf groups than two, the tree has no internal
    /// nodes at all and lookup degenerates to a scan of the leaves.
    pub(crate) fn compute(leaf_count: usize, slots: usize) -> Result<Self> {
        debug_assert!(slots >= 1);

        let leaf_nodes = leaf_count.div_ceil(slots);
        if leaf_nodes <= 1 {
            return Ok(Self {
                height: 0,
                internal_nodes: 0,
                half_marker: 0,
                vacant_subtrees: 0,
            });
        }

        let branch = slots + 1;
        let mut height = 0;
        // Capacity of a full tree of the current height, (slots+1)^height.
        let mut capacity = 1usize;
        while capacity < leaf_nodes {
            capacity = match capacity.checked_mul(branch) {
                Some(next) => next,
                None => bail!(
                    "tree capacity overflows usize for {} keys with {} slots per node",
                    leaf_count,
                    slots
                ),
            };
            height += 1;
        }

        let half_marker = (capacity - 1) / slots;
        let vacant_subtrees = (capacity - leaf_nodes) / slots;

        // internal_nodes * slots <= capacity - 1, so the internal buffer
        // length fits whenever the capacity does.
        Ok(Self {
            height,
            internal_nodes: half_marker - vacant_subtrees,
            half_marker,
            vacant_subtrees,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_leaf_group_has_no_internal_nodes() {
        let geo = Geometry::compute(6, 8).unwrap();
        assert_eq!(geo.height, 0);
        assert_eq!(geo.internal_nodes, 0);
        assert_eq!(geo.half_marker, 0);
        assert_eq!(geo.vacant_subtrees, 0);
    }

    #[test]
    fn empty_input_degenerates() {
        let geo = Geometry::compute(0, 4).unwrap();
        assert_eq!(geo.height, 0);
        assert_eq!(geo.internal_nodes, 0);

        let geo = Geometry::compute(1, 1).unwrap();
        assert_eq!(geo.height, 0);
        assert_eq!(geo.internal_nodes, 0);
    }

    #[test]
    fn binary_shape_five_keys() {
        // 5 keys, 1 slot per node: 5 leaf groups, full capacity 8 at
        // height 3, 3 vacant subtrees.
        let geo = Geometry::compute(5, 1).unwrap();
        assert_eq!(geo.height, 3);
        assert_eq!(geo.vacant_subtrees, 3);
        assert_eq!(geo.internal_nodes, 4);
        assert_eq!(geo.half_marker, 7);
    }

    #[test]
    fn binary_shape_seventeen_keys() {
        let geo = Geometry::compute(17, 1).unwrap();
        assert_eq!(geo.height, 5);
        assert_eq!(geo.vacant_subtrees, 15);
        assert_eq!(geo.internal_nodes, 16);
        assert_eq!(geo.half_marker, 31);
    }

    #[test]
    fn partial_last_group() {
        // 10 keys, 4 slots per node: 3 leaf groups (last holds 2 keys),
        // one internal node.
        let geo = Geometry::compute(10, 4).unwrap();
        assert_eq!(geo.height, 1);
        assert_eq!(geo.vacant_subtrees, 0);
        assert_eq!(geo.internal_nodes, 1);
        assert_eq!(geo.half_marker, 1);
    }

    #[test]
    fn million_keys_sixteen_slots() {
        // 62500 leaf groups, 17^4 = 83521 full capacity.
        let geo = Geometry::compute(1_000_000, 16).unwrap();
        assert_eq!(geo.height, 4);
        assert_eq!(geo.vacant_subtrees, 1313);
        assert_eq!(geo.half_marker, 5220);
        assert_eq!(geo.internal_nodes, 3907);
    }

    #[test]
    fn height_grows_with_key_count() {
        let mut last = 0;
        for count in [2usize, 10, 100, 10_000, 1_000_000] {
            let geo = Geometry::compute(count, 4).unwrap();
            assert!(geo.height >= last, "height shrank at {} keys", count);
            last = geo.height;
        }
    }

    #[test]
    fn pathological_capacity_is_rejected() {
        assert!(Geometry::compute(usize::MAX, 1).is_err());
    }
}
