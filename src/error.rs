use thiserror::Error;

/// Errors reported by the fallible matrix and vector operations.
///
/// Every failure is surfaced at the offending call. Nothing in this crate
/// retries, logs, or silently recovers; callers decide what a failed
/// construction or access means for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A runtime element list did not hold exactly `rows * cols` elements.
    #[error("expected {expected} elements for a {rows}x{cols} matrix, got {got}")]
    ElementCount {
        rows: usize,
        cols: usize,
        expected: usize,
        got: usize,
    },

    /// Checked element access outside of `[0, rows) x [0, cols)`.
    #[error("index ({row}, {col}) is out of bounds for a {rows}x{cols} matrix")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    /// A vector of length zero was passed to an operation that divides by the
    /// vector's length.
    #[error("cannot normalize a vector of length zero")]
    ZeroLength,
}
