//! Per-operation request building.
//!
//! Each supported operation reads its own parameters and produces exactly
//! one [`QueryRequest`].  Payload field names are fixed here; their
//! server-side interpretation is the server's business.

use serde_json::{json, Value};

use crate::operation::Operation;
use crate::params::{optional_json, required_json, required_str, u64_or_default, ParameterSource};
use crate::NodeError;

/// Search results returned when the operator leaves `searchLimit` unset.
const DEFAULT_SEARCH_LIMIT: u64 = 10;

/// One remote call: the endpoint name and its JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryRequest {
    pub endpoint: String,
    pub payload: Value,
}

impl QueryRequest {
    /// Build the single remote call for `op` from the item's parameters.
    pub fn build(
        op: Operation,
        params: &dyn ParameterSource,
        index: usize,
    ) -> Result<Self, NodeError> {
        let request = match op {
            Operation::InsertRecord => {
                let table = required_str(params, "tableName", index)?;
                let data = required_json(params, "recordData", index)?;
                Self {
                    endpoint: "insertRecord".into(),
                    payload: json!({ "table": table, "data": data }),
                }
            }
            Operation::GetRecord => {
                let table = required_str(params, "tableName", index)?;
                let id = required_str(params, "recordId", index)?;
                Self {
                    endpoint: "getRecord".into(),
                    payload: json!({ "table": table, "id": id }),
                }
            }
            Operation::UpdateRecord => {
                let table = required_str(params, "tableName", index)?;
                let id = required_str(params, "recordId", index)?;
                let data = required_json(params, "recordData", index)?;
                Self {
                    endpoint: "updateRecord".into(),
                    payload: json!({ "table": table, "id": id, "data": data }),
                }
            }
            Operation::DeleteRecord => {
                let table = required_str(params, "tableName", index)?;
                let id = required_str(params, "recordId", index)?;
                Self {
                    endpoint: "deleteRecord".into(),
                    payload: json!({ "table": table, "id": id }),
                }
            }
            Operation::InsertVector => {
                let collection = required_str(params, "collectionName", index)?;
                let vector = required_json(params, "vectorData", index)?;
                let mut payload = json!({ "collection": collection, "vector": vector });
                // Metadata is pass-through and optional; absent means absent.
                if let Some(metadata) = optional_json(params, "vectorMetadata", index)? {
                    payload["metadata"] = metadata;
                }
                Self {
                    endpoint: "insertVector".into(),
                    payload,
                }
            }
            Operation::SearchVectors => {
                let collection = required_str(params, "collectionName", index)?;
                let vector = required_json(params, "vectorData", index)?;
                let limit = u64_or_default(params, "searchLimit", index, DEFAULT_SEARCH_LIMIT)?;
                Self {
                    endpoint: "searchVectors".into(),
                    payload: json!({ "collection": collection, "vector": vector, "limit": limit }),
                }
            }
            Operation::DeleteVector => {
                let collection = required_str(params, "collectionName", index)?;
                let id = required_str(params, "vectorId", index)?;
                Self {
                    endpoint: "deleteVector".into(),
                    payload: json!({ "collection": collection, "id": id }),
                }
            }
            Operation::RunHelixQl => {
                // The query text itself names the endpoint; parameters are
                // the request body.
                let query = required_str(params, "helixqlQuery", index)?;
                let parameters =
                    optional_json(params, "queryParameters", index)?.unwrap_or_else(|| json!({}));
                Self {
                    endpoint: query,
                    payload: parameters,
                }
            }
        };
        Ok(request)
    }
}
