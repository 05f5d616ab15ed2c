//! The per-item dispatch loop.
//!
//! `run_batch` is the node's host-facing entry point:
//! 1. For each input item, resolve its `resource`/`operation` strings and
//!    build the matching request.
//! 2. Issue exactly one remote call through the shared client, awaiting it
//!    before the next item starts (no concurrent in-flight requests).
//! 3. Collect one output per item, or abort the batch on the first failure
//!    when continue-on-fail is off.
//!
//! No retries, no backoff, no cancellation: if the remote call hangs, the
//! batch hangs.

use client::QueryClient;
use serde_json::Value;
use tracing::{debug, error, info, instrument, warn};

use crate::error::{DispatchError, NodeError};
use crate::models::{ExecutionOptions, ItemOutput};
use crate::operation::Operation;
use crate::params::{required_str, ParameterSource};
use crate::request::QueryRequest;

/// Run one execution batch and return one output record per input item.
///
/// The output sequence has the same length and order as `items`, and each
/// output's pairing index equals its source item's position.  The items
/// themselves are opaque to the node; parameters arrive through `params`,
/// already resolved per item by the host.
///
/// # Errors
/// With `continue_on_fail` off, the first per-item failure aborts the
/// remaining items and returns [`DispatchError::ItemFailed`] carrying the
/// failing index.
#[instrument(skip_all, fields(items = items.len(), continue_on_fail = options.continue_on_fail))]
pub async fn run_batch(
    client: &dyn QueryClient,
    params: &dyn ParameterSource,
    items: &[Value],
    options: ExecutionOptions,
) -> Result<Vec<ItemOutput>, DispatchError> {
    let mut outputs = Vec::with_capacity(items.len());

    for index in 0..items.len() {
        match run_item(client, params, index).await {
            Ok(data) => {
                debug!(index, "item succeeded");
                outputs.push(ItemOutput::Data {
                    data,
                    paired_item: index,
                });
            }
            Err(err) if options.continue_on_fail => {
                warn!(index, %err, "item failed, continuing");
                outputs.push(ItemOutput::Error {
                    error: err.to_string(),
                    paired_item: index,
                });
            }
            Err(err) => {
                error!(index, %err, "item failed, aborting batch");
                return Err(DispatchError::ItemFailed { index, source: err });
            }
        }
    }

    info!(outputs = outputs.len(), "batch complete");
    Ok(outputs)
}

/// Resolve, build, and issue the single remote call for one item.
async fn run_item(
    client: &dyn QueryClient,
    params: &dyn ParameterSource,
    index: usize,
) -> Result<Value, NodeError> {
    let resource = required_str(params, "resource", index)?;
    let operation = required_str(params, "operation", index)?;

    let op = Operation::resolve(&resource, &operation)?;
    let request = QueryRequest::build(op, params, index)?;

    debug!(index, endpoint = %request.endpoint, "dispatching");
    let response = client.query(&request.endpoint, &request.payload).await?;
    Ok(response)
}
