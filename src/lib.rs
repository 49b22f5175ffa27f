//! A weight-balanced binary search tree with amortized partial rebuilding.
//!
//! This crate provides [`AlphaTree`], an ordered container whose balance
//! invariant is expressed in subtree *sizes* rather than heights: for a
//! tunable factor α, no child subtree may hold more than α times the nodes of
//! its parent's subtree. Balance is restored not by rotations but by
//! *partial rebuilding*: the topmost offending subtree is flattened into its
//! sorted node sequence and relinked as a minimum-height tree in time linear
//! in that subtree.
//!
//! # Example
//!
//! ```
//! use alpha_tree::AlphaTree;
//!
//! let mut tree = AlphaTree::new(); // balance factor α = 0.52
//! for key in [5, 3, 8, 1, 4, 7, 9, 2, 6] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.len(), 9);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Amortized O(log n) insertion** - Common-case inserts touch one root-to-leaf path
//! - **Allocation-free rebalancing** - Rebuilds relink existing arena nodes
//! - **Tunable balance** - α near 0.5 rebuilds aggressively toward perfect
//!   balance; α near 1 degenerates toward a plain unbalanced BST
//!
//! # Scope
//!
//! The core is insertion-only: there is no lookup, removal, or iteration
//! entry point. Consumers that need queries should compose this tree with a
//! separate lookup structure rather than expect one here.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;

pub mod alpha_tree;

pub use alpha_tree::{AlphaTree, DEFAULT_ALPHA};
