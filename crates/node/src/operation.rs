//! The closed set of resources and operations this node supports.
//!
//! The host configures both as strings; [`Operation::resolve`] maps the
//! pair onto one enum variant so the dispatcher can match exhaustively
//! instead of branching on a concatenated string key.

use crate::NodeError;

/// Top-level category of entity being operated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Record,
    Vector,
    RawQuery,
}

impl Resource {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "record" => Some(Self::Record),
            "vector" => Some(Self::Vector),
            "rawQuery" => Some(Self::RawQuery),
            _ => None,
        }
    }
}

/// One of the eight supported (resource, operation) pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    InsertRecord,
    GetRecord,
    UpdateRecord,
    DeleteRecord,
    InsertVector,
    SearchVectors,
    DeleteVector,
    RunHelixQl,
}

impl Operation {
    /// Resolve the host-supplied string pair to an operation.
    ///
    /// An operation name is only valid under its own resource; anything
    /// else — unknown resource, unknown operation, or a valid operation
    /// under the wrong resource — is rejected with the same error.
    pub fn resolve(resource: &str, operation: &str) -> Result<Self, NodeError> {
        let op = match (Resource::parse(resource), operation) {
            (Some(Resource::Record), "insert") => Self::InsertRecord,
            (Some(Resource::Record), "get") => Self::GetRecord,
            (Some(Resource::Record), "update") => Self::UpdateRecord,
            (Some(Resource::Record), "delete") => Self::DeleteRecord,
            (Some(Resource::Vector), "insertVector") => Self::InsertVector,
            (Some(Resource::Vector), "searchVectors") => Self::SearchVectors,
            (Some(Resource::Vector), "deleteVector") => Self::DeleteVector,
            (Some(Resource::RawQuery), "runHelixQL") => Self::RunHelixQl,
            _ => {
                return Err(NodeError::UnsupportedOperation {
                    resource: resource.to_owned(),
                    operation: operation.to_owned(),
                })
            }
        };
        Ok(op)
    }
}

// ============================================================
// Unit tests
// ============================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_eight_pairs_resolve() {
        let cases = [
            ("record", "insert", Operation::InsertRecord),
            ("record", "get", Operation::GetRecord),
            ("record", "update", Operation::UpdateRecord),
            ("record", "delete", Operation::DeleteRecord),
            ("vector", "insertVector", Operation::InsertVector),
            ("vector", "searchVectors", Operation::SearchVectors),
            ("vector", "deleteVector", Operation::DeleteVector),
            ("rawQuery", "runHelixQL", Operation::RunHelixQl),
        ];

        for (resource, operation, expected) in cases {
            assert_eq!(
                Operation::resolve(resource, operation).expect("supported pair"),
                expected
            );
        }
    }

    #[test]
    fn unknown_operation_is_rejected_with_the_exact_message() {
        let err = Operation::resolve("record", "bogus").expect_err("unsupported");
        assert_eq!(err.to_string(), "Unsupported operation: record:bogus");
    }

    #[test]
    fn valid_operation_under_the_wrong_resource_is_rejected() {
        assert!(Operation::resolve("vector", "insert").is_err());
        assert!(Operation::resolve("record", "searchVectors").is_err());
    }

    #[test]
    fn unknown_resource_is_rejected() {
        let err = Operation::resolve("graph", "insert").expect_err("unsupported");
        assert_eq!(err.to_string(), "Unsupported operation: graph:insert");
    }
}
