//! The closed request error taxonomy.

use thiserror::Error;

/// Classification of a failed backend request.
///
/// Exactly one kind is produced per failure. Callers map each kind to a
/// localized message; none carries backend internals.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The backend rejected the credential attached to the request.
    #[error("unauthorized")]
    Unauthorized,

    /// A sign-in or sign-up attempt was rejected.
    ///
    /// Produced by the login/registration call sites, not by the transport
    /// layer: only they know that a 401 means bad credentials rather than
    /// an expired session.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Non-2xx HTTP status other than 401.
    #[error("request failed with HTTP status {0}")]
    Http(u16),

    /// The server could not be reached or the response was unreadable.
    #[error("network error")]
    Network,

    /// A 2xx response carried a protocol-level error.
    #[error("graphql error: {message}")]
    Graphql {
        message: String,
        /// Machine-readable code from the error extensions, if any.
        code: Option<String>,
    },
}

/// Result type for request pipeline operations.
pub type ApiResult<T> = Result<T, ApiError>;
