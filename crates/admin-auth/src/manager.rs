//! Session lifecycle orchestration: the only writer of the credential store.

use crate::operations::{LoginData, LogoutData, MeData, RegisterData};
use crate::{
    AuthPayload, CredentialStore, UserProfile, LOGIN_MUTATION, LOGOUT_MUTATION, ME_QUERY,
    REGISTER_MUTATION,
};
use admin_api::{ApiClient, ApiError, ApiResult};
use serde_json::json;
use std::sync::Arc;

/// Drives login, registration, logout, and startup session restoration.
///
/// All credential store writes funnel through this type; everything else
/// only reads the store. Concurrent operations are not serialized: the
/// last completed write wins and memory is canonical for the process.
#[derive(Clone)]
pub struct SessionManager {
    store: Arc<CredentialStore>,
    api: ApiClient,
}

impl SessionManager {
    /// Create a manager over the given store and client.
    pub fn new(store: Arc<CredentialStore>, api: ApiClient) -> Self {
        Self { store, api }
    }

    /// The credential store this manager writes to.
    pub fn store(&self) -> &Arc<CredentialStore> {
        &self.store
    }

    /// Sign in and commit the resulting session.
    ///
    /// A rejected credential surfaces as [`ApiError::InvalidCredentials`];
    /// any other failure is propagated untouched. On failure the store is
    /// left exactly as it was.
    pub async fn login(&self, email: &str, password: &str, tenant: &str) -> ApiResult<UserProfile> {
        let variables = json!({ "email": email, "password": password });
        let data: LoginData = self
            .api
            .execute(LOGIN_MUTATION, variables, None, Some(tenant))
            .await
            .map_err(credential_rejection)?;
        tracing::info!(email = %email, "login succeeded");
        Ok(self.commit(data.login, tenant))
    }

    /// Sign up and commit the resulting session.
    ///
    /// Failure semantics match [`login`](Self::login).
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        tenant: &str,
        name: Option<&str>,
    ) -> ApiResult<UserProfile> {
        let variables = json!({ "email": email, "password": password, "name": name });
        let data: RegisterData = self
            .api
            .execute(REGISTER_MUTATION, variables, None, Some(tenant))
            .await
            .map_err(credential_rejection)?;
        tracing::info!(email = %email, "registration succeeded");
        Ok(self.commit(data.register, tenant))
    }

    /// Sign out.
    ///
    /// The backend call is best-effort; the local session is always
    /// cleared, so logout cannot fail from the caller's point of view.
    pub async fn logout(&self) {
        let session = self.store.get();
        if let Some(token) = session.token.as_deref() {
            let result: ApiResult<LogoutData> = self
                .api
                .execute(LOGOUT_MUTATION, json!({}), Some(token), session.tenant.as_deref())
                .await;
            match result {
                Ok(data) => tracing::debug!(acknowledged = data.logout, "sign-out acknowledged"),
                Err(err) => tracing::debug!(error = %err, "sign-out failed, clearing locally"),
            }
        }
        self.store.clear();
    }

    /// Confirm the current token against the backend.
    ///
    /// No-op without a token. On success only the user field is replaced;
    /// a null user or any failure means the session is no longer valid
    /// and the store is cleared in full. Nothing is surfaced either way:
    /// discovering a stale token lazily is expected, not exceptional.
    pub async fn load_current_user(&self) {
        let session = self.store.get();
        let token = match session.token {
            Some(token) => token,
            None => return,
        };
        let result: ApiResult<MeData> = self
            .api
            .execute(ME_QUERY, json!({}), Some(&token), session.tenant.as_deref())
            .await;
        match result {
            Ok(MeData { me: Some(user) }) => self.store.set_user(user),
            Ok(MeData { me: None }) => {
                tracing::info!("backend reported no user for the stored token, clearing session");
                self.store.clear();
            }
            Err(err) => {
                tracing::info!(error = %err, "stored session rejected, clearing");
                self.store.clear();
            }
        }
    }

    /// Startup path: seed the session from durable storage, then confirm
    /// it with the backend.
    pub async fn restore(&self) {
        if self.store.restore() {
            self.load_current_user().await;
        }
    }

    /// Commit a successful sign-in/sign-up. The tenant the backend
    /// reports on the profile overrides the one that was requested.
    fn commit(&self, payload: AuthPayload, requested_tenant: &str) -> UserProfile {
        let tenant = payload
            .user
            .tenant_slug
            .clone()
            .unwrap_or_else(|| requested_tenant.to_string());
        self.store.set(&payload.token, &tenant, payload.user.clone());
        payload.user
    }
}

/// On a credential-presenting operation a transport-level 401 means the
/// credentials themselves were rejected.
fn credential_rejection(err: ApiError) -> ApiError {
    match err {
        ApiError::Unauthorized => ApiError::InvalidCredentials,
        other => other,
    }
}
