//! Session and credential management for the RusToK admin client.
//!
//! This crate provides:
//! - The in-memory [`Session`] and its durable mirror, held by the
//!   [`CredentialStore`] with write-through to client storage and the
//!   routing cookies
//! - The [`SessionManager`] lifecycle: login, registration, logout, and
//!   startup session restoration
//! - The GraphQL operation documents the lifecycle executes
//! - A route-guard helper that recovers the session scope from a
//!   `Cookie:` request header

mod guard;
mod manager;
mod operations;
mod session;
mod store;

pub use guard::{client_auth_from_cookies, ClientAuth};
pub use manager::SessionManager;
pub use operations::{
    AuthPayload, LOGIN_MUTATION, LOGOUT_MUTATION, ME_QUERY, REGISTER_MUTATION,
};
pub use session::{Session, SessionRecord, UserProfile};
pub use store::{CredentialStore, SESSION_COOKIE_MAX_AGE_SECS};
