//! GraphQL wire envelope types.

use serde::{Deserialize, Serialize};

/// A GraphQL request body: `{query, variables}`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphqlRequest<'a, V: Serialize> {
    pub query: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<V>,
}

impl<'a, V: Serialize> GraphqlRequest<'a, V> {
    /// Create a request for the given operation document.
    pub fn new(query: &'a str, variables: Option<V>) -> Self {
        Self { query, variables }
    }
}

/// A GraphQL response envelope: `{data, errors}`.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphqlErrorEntry>,
}

/// One entry from a GraphQL `errors` list.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
    #[serde(default)]
    pub extensions: Option<GraphqlErrorExtensions>,
}

impl GraphqlErrorEntry {
    /// Machine-readable error code, if the server attached one.
    pub fn code(&self) -> Option<&str> {
        self.extensions.as_ref().and_then(|ext| ext.code.as_deref())
    }
}

/// The `extensions` object attached to a GraphQL error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphqlErrorExtensions {
    #[serde(default)]
    pub code: Option<String>,
}
