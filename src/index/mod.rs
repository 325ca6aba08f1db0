//! Index structures.
//!
//! Currently one index type: the fixed-degree B-tree in [`btree`].

pub mod btree;

pub use btree::{BTreeIndex, DeleteOutcome, Entry, InsertOutcome, Iter};
