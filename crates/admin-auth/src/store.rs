//! The credential store: in-memory session with write-through persistence.

use crate::{Session, SessionRecord, UserProfile};
use admin_storage::{Cookie, CookieJar, DurableStorage, SameSite, StorageKeys};
use std::sync::{Arc, Mutex};

/// Routing cookie lifetime: 7 days.
pub const SESSION_COOKIE_MAX_AGE_SECS: i64 = 7 * 24 * 60 * 60;

/// Single authoritative holder of the in-memory [`Session`].
///
/// Every write goes through to durable storage and the routing cookies,
/// best-effort: memory is canonical for the current process and the
/// mirrors may transiently disagree (the user can clear cookies on their
/// own). A persistence failure is logged and swallowed, never surfaced.
pub struct CredentialStore {
    session: Mutex<Session>,
    storage: Arc<dyn DurableStorage>,
    cookies: Arc<dyn CookieJar>,
}

impl CredentialStore {
    /// Create an empty store over the given persistence surfaces.
    pub fn new(storage: Arc<dyn DurableStorage>, cookies: Arc<dyn CookieJar>) -> Self {
        Self {
            session: Mutex::new(Session::default()),
            storage,
            cookies,
        }
    }

    /// Current in-memory session. Never touches storage.
    pub fn get(&self) -> Session {
        self.session.lock().unwrap().clone()
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<String> {
        self.session.lock().unwrap().token.clone()
    }

    /// Current tenant, if any.
    pub fn tenant(&self) -> Option<String> {
        self.session.lock().unwrap().tenant.clone()
    }

    /// Replace the whole session atomically and write through to both
    /// mirrors.
    pub fn set(&self, token: &str, tenant: &str, user: UserProfile) {
        {
            let mut session = self.session.lock().unwrap();
            *session = Session {
                token: Some(token.to_string()),
                tenant: Some(tenant.to_string()),
                user: Some(user.clone()),
            };
        }
        self.persist(&SessionRecord {
            token: token.to_string(),
            tenant: tenant.to_string(),
            user: Some(user),
        });
        self.cookies.set(Cookie::new(
            StorageKeys::TOKEN_COOKIE,
            token,
            SESSION_COOKIE_MAX_AGE_SECS,
            SameSite::Lax,
        ));
        self.cookies.set(Cookie::new(
            StorageKeys::TENANT_COOKIE,
            tenant,
            SESSION_COOKIE_MAX_AGE_SECS,
            SameSite::Lax,
        ));
        tracing::debug!(tenant = %tenant, "session committed");
    }

    /// Replace only the user, keeping token and tenant.
    ///
    /// No-op when no token is held; the user invariant requires one.
    pub fn set_user(&self, user: UserProfile) {
        let record = {
            let mut session = self.session.lock().unwrap();
            let (Some(token), Some(tenant)) = (session.token.clone(), session.tenant.clone())
            else {
                return;
            };
            session.user = Some(user.clone());
            SessionRecord {
                token,
                tenant,
                user: Some(user),
            }
        };
        self.persist(&record);
    }

    /// Reset to the empty session, delete the durable record, and expire
    /// the routing cookies. Idempotent.
    pub fn clear(&self) {
        {
            let mut session = self.session.lock().unwrap();
            *session = Session::default();
        }
        if let Err(err) = self.storage.delete(StorageKeys::SESSION_RECORD) {
            tracing::warn!(error = %err, "failed to delete session record");
        }
        self.cookies.expire(StorageKeys::TOKEN_COOKIE);
        self.cookies.expire(StorageKeys::TENANT_COOKIE);
        tracing::debug!("session cleared");
    }

    /// Seed the in-memory session from the durable record, if present.
    ///
    /// The seed is provisional until the backend confirms the token (see
    /// [`SessionManager::restore`](crate::SessionManager::restore)). No
    /// cookies are written; a cookie cleared by the user stays cleared
    /// until the next committed write. Returns true when a record seeded
    /// the session.
    pub fn restore(&self) -> bool {
        let raw = match self.storage.get(StorageKeys::SESSION_RECORD) {
            Ok(Some(raw)) => raw,
            Ok(None) => return false,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read session record");
                return false;
            }
        };
        let record: SessionRecord = match serde_json::from_str(&raw) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!(error = %err, "discarding malformed session record");
                let _ = self.storage.delete(StorageKeys::SESSION_RECORD);
                return false;
            }
        };
        let mut session = self.session.lock().unwrap();
        *session = Session {
            token: Some(record.token),
            tenant: Some(record.tenant),
            user: record.user,
        };
        true
    }

    fn persist(&self, record: &SessionRecord) {
        match serde_json::to_string(record) {
            Ok(json) => {
                if let Err(err) = self.storage.set(StorageKeys::SESSION_RECORD, &json) {
                    tracing::warn!(error = %err, "failed to persist session record");
                }
            }
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode session record");
            }
        }
    }
}
