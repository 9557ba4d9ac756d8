//! GraphQL operation documents and their response payloads.

use crate::UserProfile;
use serde::Deserialize;

/// Sign-in operation.
pub const LOGIN_MUTATION: &str = r#"
mutation Login($email: String!, $password: String!) {
    login(email: $email, password: $password) {
        token
        user {
            id
            email
            name
            role
            status
            tenantSlug
            createdAt
        }
    }
}
"#;

/// Sign-up operation.
pub const REGISTER_MUTATION: &str = r#"
mutation Register($email: String!, $password: String!, $name: String) {
    register(email: $email, password: $password, name: $name) {
        token
        user {
            id
            email
            name
            role
            status
            tenantSlug
            createdAt
        }
    }
}
"#;

/// Best-effort sign-out operation.
pub const LOGOUT_MUTATION: &str = "mutation Logout { logout }";

/// Current-user query; `me` is null when the token is not usable.
pub const ME_QUERY: &str = r#"
query Me {
    me {
        id
        email
        name
        role
        status
        tenantSlug
        createdAt
    }
}
"#;

/// Token and profile returned by sign-in and sign-up.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub token: String,
    pub user: UserProfile,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LoginData {
    pub login: AuthPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterData {
    pub register: AuthPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LogoutData {
    pub logout: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MeData {
    pub me: Option<UserProfile>,
}
