//! Recoverable errors raised while building collections or their configuration.
//!
//! Popping from an empty collection is not an error: those paths return `None`.
//! Indexing a grid out of range is a contract violation and panics.

use thiserror::Error;

/// Errors returned by fallible constructors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CollectionError {
    /// `max_slack_ratio` was not a finite value in `(0.0, 1.0]`.
    #[error("max slack ratio must be in (0.0, 1.0], got {0}")]
    InvalidSlackRatio(f64),
    /// `initial_front_slack` was zero.
    #[error("initial front slack must be at least 1")]
    InvalidFrontSlack,
    /// `growth_factor` was below 2, so front slack would not grow geometrically.
    #[error("growth factor must be at least 2, got {0}")]
    InvalidGrowthFactor(usize),
    /// A grid was built from zero rows or zero columns.
    #[error("grid must have at least one row and one column")]
    EmptyGrid,
    /// A grid row had a different length than the first row.
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Column count of row 0.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
}
