//! Error types for `bptree`.

use thiserror::Error;

/// Result type alias using [`TreeError`].
pub type Result<T> = core::result::Result<T, TreeError>;

/// Errors reported by [`BPlusTreeMap`](crate::BPlusTreeMap) operations.
///
/// Absent keys are not errors; point lookups report them as `None` and
/// `remove` reports them through its return value.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
pub enum TreeError {
    /// The minimum degree passed to the constructor is below 2.
    #[error("invalid minimum degree {0}: a B+tree requires a degree of at least 2")]
    InvalidDegree(usize),

    /// A range lookup was called with a start key greater than the end key.
    #[error("invalid range: start key is greater than end key")]
    InvalidRange,
}
