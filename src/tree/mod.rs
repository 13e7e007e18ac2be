//! # Implicit Multiway Tree Implementation
//!
//! This module implements the CSS-tree index structure. The design packs
//! every internal node into a single contiguous key buffer and replaces
//! child pointers with breadth-first index arithmetic.
//!
//! ## Node Numbering
//!
//! Nodes of the conceptual full `(s+1)`-ary tree are numbered breadth-first
//! starting from the root at 0, where `s` is the number of keys per node:
//!
//! ```text
//!                      [0]
//!        ┌──────────────┼──────────────┐
//!       [1]            [2]    ...    [s+1]
//!   ┌────┼────┐
//! [s+2]      ...
//! ```
//!
//! Node `n` has children `n*(s+1)+1 ..= n*(s+1)+s+1`. Indices below the
//! materialized internal count `M` are internal nodes living in the buffer;
//! indices at or above `M` are virtual leaf nodes that map onto contiguous
//! groups of `s` keys in the sorted leaf array.
//!
//! ## Packed Layout
//!
//! A fully populated tree of height `h` would have `E = (s+1)^h` leaf
//! nodes. When the input is smaller, the trailing empty leaves are
//! eliminated and the surviving leaf groups wrap around the end of the leaf
//! array. The **half marker** `H = (E-1)/s` records the breadth-first index
//! where the wrap happens: child indices below `H` land in the second half
//! of the leaves, indices at or above `H` in the first half.
//!
//! ## Build Algorithm
//!
//! The internal buffer is filled in reverse slot order. Each slot summarizes
//! one child subtree with the largest key reachable under it:
//!
//! ```text
//! 1. slot i belongs to node i/s and child i%s of that node
//! 2. follow the rightmost branch until the index escapes the internal region
//! 3. map the escaped index to a leaf group via the half marker (signed
//!    arithmetic; a negative offset wraps to the second half)
//! 4. write the group's largest key into slot i
//! ```
//!
//! The reverse order guarantees each slot is computed from final structure
//! only.
//!
//! ## Search Algorithm
//!
//! ```text
//! 1. child = 0
//! 2. while child is internal: count the node's keys strictly less than the
//!    probe (scan or binary search, chosen by NODE_SIZE at compile time)
//!    and descend to child*(s+1) + 1 + count
//! 3. map the final child index to a leaf group (same signed arithmetic as
//!    the build) and scan at most s keys for the probe
//! ```
//!
//! ## Memory
//!
//! Total footprint is `(N + M*s) * size_of::<K>()` plus four shape scalars.
//! Lookup touches `height + 1` node-sized memory regions, each contiguous.

mod geometry;
mod scan;
mod tree;

pub use tree::CssTree;
