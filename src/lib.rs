//! lexindex - An order-preserving string index backed by a fixed-degree B-tree.
//!
//! # Architecture
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                        lexindex                           │
//! ├───────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │       Command Interpreter (bin/cli.rs)              │  │
//! │  │   stdin tokens → insert / lookup / delete / save    │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │                            ↓                              │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │           Index Layer (index/btree/)                │  │
//! │  │   BTreeIndex → Node graph (split / borrow / merge)  │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! │                            ↓                              │
//! │  ┌─────────────────────────────────────────────────────┐  │
//! │  │           Storage Layer (storage/)                  │  │
//! │  │   binary file codec + CRC32 integrity trailer       │  │
//! │  └─────────────────────────────────────────────────────┘  │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (config constants, Error)
//! - [`index`] - The B-tree index engine
//! - [`storage`] - Binary serialization format
//!
//! # Quick Start
//! ```
//! use lexindex::{BTreeIndex, InsertOutcome};
//!
//! let mut index = BTreeIndex::new();
//! assert_eq!(index.insert(b"walrus", 7), InsertOutcome::Inserted);
//! assert_eq!(index.insert(b"walrus", 9), InsertOutcome::AlreadyExists);
//! assert_eq!(index.lookup(b"walrus"), Some(7));
//! ```
//!
//! # Thread Safety
//! The index is single-threaded by design: every operation runs to completion
//! before returning and no node is ever shared between trees. Callers needing
//! concurrent access must serialize calls externally.

pub mod common;
pub mod index;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::config::DEFAULT_MIN_DEGREE;
pub use common::{Error, Result};
pub use index::btree::{BTreeIndex, DeleteOutcome, Entry, InsertOutcome, Iter};
