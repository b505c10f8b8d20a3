//! Error types for index construction and queries.

use thiserror::Error;

/// Errors returned while building or querying an index.
///
/// Finding nothing (an empty index) is never an error; queries report that
/// through `None` or `f64::INFINITY` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A point, or a query, does not have the dimension of the index.
    ///
    /// `position` names the offending point during construction and is
    /// `None` for queries.
    #[error(
        "dimension mismatch: expected {expected}, found {found}{}",
        .position.map_or(String::new(), |i| format!(" at point {i}"))
    )]
    DimensionMismatch {
        expected: usize,
        found: usize,
        position: Option<usize>,
    },

    /// Leaves must hold at least one point.
    #[error("leaf size must be positive")]
    InvalidLeafSize,
}

pub type Result<T> = std::result::Result<T, Error>;
