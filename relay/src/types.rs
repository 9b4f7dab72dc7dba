use serde::Serialize;
use std::fmt;

#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            OperationType::Query => "query",
            OperationType::Mutation => "mutation",
            OperationType::Subscription => "subscription"
        };
        write!(f, "{}", keyword)
    }
}

/// Static facts about an operation, produced by the generated code alongside the request body.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationMeta {
    /// Hex SHA-256 of the query document, see [operation_id](../utils/fn.operation_id.html).
    pub operation_id: &'static str,
    pub operation_type: OperationType,
    /// The `__typename`s the operation selects.
    pub involved_types: Vec<&'static str>
}

/// The automatic persisted query extension. Servers that already know the document accept
/// the hash in place of the query text.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PersistedQuery {
    pub version: u8,
    #[serde(rename = "sha256Hash")]
    pub sha256_hash: &'static str
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct QueryExtensions {
    #[serde(rename = "persistedQuery")]
    pub persisted_query: PersistedQuery
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_type_displays_as_keyword() {
        assert_eq!(OperationType::Query.to_string(), "query");
        assert_eq!(OperationType::Mutation.to_string(), "mutation");
        assert_eq!(OperationType::Subscription.to_string(), "subscription");
    }
}
