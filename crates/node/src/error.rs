//! Node-level error types.
//!
//! Two levels, mirroring where a failure is handled:
//! - [`NodeError`] — everything that can go wrong for a single item
//!   (unsupported operation, bad parameter, remote failure).  All three
//!   causes are treated uniformly at the per-item boundary.
//! - [`DispatchError`] — the batch-level abort raised when an item fails
//!   and continue-on-fail is off; carries the failing item's index.

use client::ClientError;
use thiserror::Error;

/// Errors produced while dispatching a single item.
#[derive(Debug, Error)]
pub enum NodeError {
    /// The (resource, operation) pair matches none of the supported
    /// operations.
    #[error("Unsupported operation: {resource}:{operation}")]
    UnsupportedOperation { resource: String, operation: String },

    /// A required parameter is absent (or empty) for this item.
    #[error("missing required parameter '{name}' for item {index}")]
    MissingParameter { name: String, index: usize },

    /// A parameter supplied as a string could not be parsed as JSON.
    #[error("parameter '{name}' for item {index} is not valid JSON: {reason}")]
    MalformedJson {
        name: String,
        index: usize,
        reason: String,
    },

    /// A parameter is present but has an unusable type.
    #[error("parameter '{name}' for item {index} must be {expected}")]
    WrongParameterType {
        name: String,
        index: usize,
        expected: &'static str,
    },

    /// The remote call itself failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Batch-level failure: the dispatch loop aborted.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// An item failed while continue-on-fail was disabled; no outputs are
    /// returned, not even for the items that preceded it.
    #[error("item {index} failed: {source}")]
    ItemFailed {
        index: usize,
        #[source]
        source: NodeError,
    },
}
