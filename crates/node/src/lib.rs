//! `node` crate — the HelixDB operation dispatcher.
//!
//! Given a batch of input items, a per-item parameter view, and a query
//! client, [`run_batch`] dispatches each item's configured
//! (resource, operation) pair as exactly one remote call and returns one
//! output record per input item, order- and index-preserving.

pub mod dispatcher;
pub mod error;
pub mod models;
pub mod operation;
pub mod params;
pub mod request;

pub use dispatcher::run_batch;
pub use error::{DispatchError, NodeError};
pub use models::{ExecutionOptions, ItemOutput};
pub use operation::{Operation, Resource};
pub use params::{MapParameters, ParameterSource, PerItemParameters};
