//! An ordered, in-memory B+tree map.
//!
//! This crate provides [`BPlusTreeMap`], an ordered associative container
//! built as a B+tree: every key/value entry lives in a leaf, the leaves are
//! threaded into a doubly linked chain in ascending key order, and internal
//! nodes hold separator keys that route lookups to the right subtree. The
//! *minimum degree* is chosen at construction time and fixes the capacity of
//! every node for the lifetime of the tree.
//!
//! # Example
//!
//! ```
//! use bptree::BPlusTreeMap;
//!
//! let mut ratings = BPlusTreeMap::new(16)?;
//! ratings.insert("espresso", 9);
//! ratings.insert("filter", 7);
//! ratings.insert("instant", 2);
//!
//! assert_eq!(ratings.get(&"filter"), Some(&7));
//! assert_eq!(ratings.len(), 3);
//!
//! // Entries come back in ascending key order.
//! let keys: Vec<_> = ratings.keys().copied().collect();
//! assert_eq!(keys, ["espresso", "filter", "instant"]);
//!
//! // Range and batched lookups ride the leaf chain.
//! let mid = ratings.get_range(&"e", &"g")?;
//! assert_eq!(mid, [9, 7]);
//! # Ok::<(), bptree::TreeError>(())
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - only requires `alloc`, no standard library
//!   dependency.
//! - **Configurable fan-out** - the minimum degree is a runtime parameter,
//!   so the same type covers testing-friendly tiny nodes and cache-sized
//!   production nodes.
//! - **Linked leaves** - full iteration, range lookups and sorted batched
//!   lookups walk the leaf chain instead of re-descending the tree.
//!
//! # Implementation
//!
//! Nodes live in a slot arena and refer to each other by index handles, so
//! the child graph is strictly owned while the leaf chain's `prev`/`next`
//! links stay non-owning. A node holds at most `2 * degree - 1` entries;
//! one extra slot per node serves as the transient overflow buffer that an
//! insert fills just before the node splits.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

mod raw;

pub mod error;
pub mod map;

pub use error::{Result, TreeError};
pub use map::BPlusTreeMap;
