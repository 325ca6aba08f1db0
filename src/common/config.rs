//! Configuration constants for lexindex.

/// Default minimum degree (`t`) of the B-tree.
///
/// With `t = 3` every node holds between `t - 1 = 2` and `2t - 1 = 5`
/// entries (root excepted, which may hold fewer). This is the reference
/// configuration; [`BTreeIndex::with_min_degree`] accepts any degree down to
/// [`MIN_SUPPORTED_DEGREE`].
///
/// [`BTreeIndex::with_min_degree`]: crate::BTreeIndex::with_min_degree
pub const DEFAULT_MIN_DEGREE: usize = 3;

/// Smallest legal minimum degree.
///
/// `t = 2` yields a 2-3-4 tree, the smallest structure for which the
/// split/merge arithmetic is well-defined: a full node of `2t - 1 = 3`
/// entries still has a median with `t - 1 = 1` entry on each side.
pub const MIN_SUPPORTED_DEGREE: usize = 2;

/// Maximum entries a node of minimum degree `t` may hold.
#[inline]
pub const fn max_entries(min_degree: usize) -> usize {
    2 * min_degree - 1
}

/// Minimum entries a non-root node of minimum degree `t` must hold.
#[inline]
pub const fn min_entries(min_degree: usize) -> usize {
    min_degree - 1
}
