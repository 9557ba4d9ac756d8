//! Route-guard helper for reading session cookies server-side.

use admin_storage::{cookie_value, StorageKeys};

/// Token/tenant pair recovered from a `Cookie:` request header.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientAuth {
    pub token: Option<String>,
    pub tenant: Option<String>,
}

impl ClientAuth {
    /// True when a token cookie was present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Recover the session scope from a request's cookie header.
///
/// Route guards run before any page renders and cannot reach durable
/// client storage; the routing cookies are the only surface they see.
pub fn client_auth_from_cookies(header: &str) -> ClientAuth {
    ClientAuth {
        token: cookie_value(header, StorageKeys::TOKEN_COOKIE),
        tenant: cookie_value(header, StorageKeys::TENANT_COOKIE),
    }
}
