//! Binary serialization for the index.
//!
//! The on-disk layout and its encoder/decoder live in [`format`].

pub mod format;
