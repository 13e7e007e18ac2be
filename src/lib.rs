//! # CSS-Tree: Cache-Sensitive Search Tree
//!
//! A static, read-only multiway search index stored implicitly, without
//! pointers. The layout follows Rao & Ross, *Cache conscious indexing for
//! decision-support in main memory* (1998): all internal nodes are packed
//! into one contiguous buffer sized in multiples of a compile-time node
//! size, and lookup navigates the tree by arithmetic on breadth-first node
//! indices. This implementation prioritizes:
//!
//! - **Zero pointers**: internal nodes are bare key runs, no headers, no
//!   child links. A node's children are computed from its index.
//! - **Cache-line-sized nodes**: `NODE_SIZE` is a const generic, so node
//!   fanout and the in-node search strategy specialize at compile time.
//! - **Zero allocation after build**: the tree owns two `Vec` buffers and
//!   never touches the allocator again.
//!
//! ## Quick Start
//!
//! ```ignore
//! use csstree::CssTree;
//!
//! // 64-byte nodes over u32 keys: 16 keys per node, 17-way branching.
//! let tree = CssTree::<u32, 64>::new(vec![1, 5, 8, 13, 21, 34])?;
//!
//! let pos = tree.find(13).unwrap();
//! assert_eq!(tree.as_slice()[pos], 13);
//! assert_eq!(tree.find(7), None);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │            CssTree<K, NODE_SIZE>            │
//! ├─────────────────────────────────────────────┤
//! │  internal buffer: [node 0][node 1]...[M-1]  │  M*s keys, built once
//! ├─────────────────────────────────────────────┤
//! │  leaves: sorted input keys (private copy)   │  N keys, never moved
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Construction derives the tree shape from the key count and fanout, then
//! fills the internal buffer bottom-up. Lookup descends top-down in
//! `O(height)` node visits, each touching exactly one node-sized run of
//! contiguous keys, and finishes with a bounded scan of one leaf group.
//!
//! ## Module Overview
//!
//! - [`tree`]: the `CssTree` container, its shape derivation, and the
//!   in-node search strategies
//!
//! ## Thread Safety
//!
//! The tree is immutable once built. Share `&CssTree` across as many
//! threads as you like; no operation blocks, suspends, or allocates.

pub mod tree;

pub use tree::CssTree;
