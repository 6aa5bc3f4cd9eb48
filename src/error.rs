//! Error types for label_paths.

use thiserror::Error;

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Errors raised by graph construction and queries.
///
/// Every failure is recoverable by the caller; an unreachable target is not
/// an error but an `Ok(None)` result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A caller-supplied label, vertex, or edge was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
