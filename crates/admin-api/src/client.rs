//! GraphQL executor with credential attachment and failure classification.

use crate::{ApiError, ApiResult, GraphqlErrorEntry, GraphqlRequest, GraphqlResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Header carrying the tenant slug on every scoped request.
pub const TENANT_HEADER: &str = "X-Tenant-Slug";

/// Message used when a 2xx response carries neither data nor errors.
const NO_DATA_MESSAGE: &str = "no data returned";

/// GraphQL client for the admin backend.
#[derive(Clone)]
pub struct ApiClient {
    http_client: reqwest::Client,
    endpoint: String,
}

impl ApiClient {
    /// Create a new client for the given GraphQL endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Endpoint this client posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Execute a GraphQL operation.
    ///
    /// The bearer `Authorization` header is attached iff `token` is given,
    /// and the tenant scope header iff `tenant` is given; an omitted
    /// credential is never substituted with a stale one.
    pub async fn execute<V, T>(
        &self,
        query: &str,
        variables: V,
        token: Option<&str>,
        tenant: Option<&str>,
    ) -> ApiResult<T>
    where
        V: Serialize,
        T: DeserializeOwned,
    {
        let mut request = self
            .http_client
            .post(&self.endpoint)
            .json(&GraphqlRequest::new(query, Some(variables)));

        if let Some(token) = token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }
        if let Some(tenant) = tenant {
            request = request.header(TENANT_HEADER, tenant);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!(error = %err, "request transport failure");
                return Err(ApiError::Network);
            }
        };

        let status = response.status();
        if status.as_u16() == 401 {
            tracing::debug!("request rejected with 401");
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() {
            tracing::warn!(status = %status, "request failed");
            return Err(ApiError::Http(status.as_u16()));
        }

        let envelope: GraphqlResponse<T> = match response.json().await {
            Ok(envelope) => envelope,
            Err(err) => {
                tracing::warn!(error = %err, "unreadable response body");
                return Err(ApiError::Network);
            }
        };

        if let Some(entry) = envelope.errors.into_iter().next() {
            return Err(classify_graphql_error(entry));
        }

        envelope.data.ok_or_else(|| ApiError::Graphql {
            message: NO_DATA_MESSAGE.to_string(),
            code: None,
        })
    }
}

/// Map a protocol-level error entry to an [`ApiError`].
///
/// Authorization failures reported inside a 2xx envelope surface as
/// [`ApiError::Unauthorized`] rather than a generic GraphQL error, so
/// callers see the same kind regardless of how the backend reported it.
fn classify_graphql_error(entry: GraphqlErrorEntry) -> ApiError {
    if is_auth_failure(&entry) {
        return ApiError::Unauthorized;
    }
    let code = entry.code().map(str::to_string);
    ApiError::Graphql {
        message: entry.message,
        code,
    }
}

fn is_auth_failure(entry: &GraphqlErrorEntry) -> bool {
    if let Some(code) = entry.code() {
        if code.eq_ignore_ascii_case("UNAUTHORIZED") || code.eq_ignore_ascii_case("UNAUTHENTICATED")
        {
            return true;
        }
    }
    let message = entry.message.to_lowercase();
    message.contains("unauthorized") || message.contains("authentication required")
}
