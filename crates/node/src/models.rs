//! Batch input/output types for the dispatch loop.

use serde::Serialize;
use serde_json::Value;

/// One output record, paired with the input item that produced it.
///
/// Serializes to the host's wrapper shape:
/// `{"data": ..., "pairedItem": n}` or `{"error": "...", "pairedItem": n}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ItemOutput {
    Data {
        data: Value,
        #[serde(rename = "pairedItem")]
        paired_item: usize,
    },
    Error {
        error: String,
        #[serde(rename = "pairedItem")]
        paired_item: usize,
    },
}

impl ItemOutput {
    /// Position of the source item in the original input sequence.
    pub fn paired_item(&self) -> usize {
        match self {
            Self::Data { paired_item, .. } | Self::Error { paired_item, .. } => *paired_item,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

/// How the dispatch loop reacts to a per-item failure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecutionOptions {
    /// Record the failure in the output stream and keep going, instead of
    /// aborting the batch at the first failing item.
    pub continue_on_fail: bool,
}
