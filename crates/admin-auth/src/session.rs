//! Session state and the record mirrored to durable storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Immutable profile snapshot returned by the backend.
///
/// Replaced wholesale on every successful fetch, never patched field by
/// field. Field names follow the backend's camelCase wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    pub role: String,
    pub status: String,
    /// Tenant the profile belongs to, when the backend reports it.
    #[serde(default)]
    pub tenant_slug: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.email)
    }
}

/// In-memory authentication context for the current client process.
///
/// A present token with an absent user is a valid transient state: the
/// session was restored from storage and not yet confirmed by the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub token: Option<String>,
    pub tenant: Option<String>,
    pub user: Option<UserProfile>,
}

impl Session {
    /// True when no credential or profile is held.
    pub fn is_empty(&self) -> bool {
        self.token.is_none() && self.tenant.is_none() && self.user.is_none()
    }

    /// True when a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// The durable mirror of a [`Session`], stored as JSON under a fixed key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    pub token: String,
    pub tenant: String,
    #[serde(default)]
    pub user: Option<UserProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: Option<&str>) -> UserProfile {
        UserProfile {
            id: Uuid::nil(),
            email: "admin@rustok.io".to_string(),
            name: name.map(String::from),
            role: "admin".to_string(),
            status: "active".to_string(),
            tenant_slug: Some("acme".to_string()),
            created_at: "2024-01-01T00:00:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn profile_round_trips_through_camel_case_json() {
        let json = serde_json::to_string(&profile(Some("Ada"))).unwrap();
        assert!(json.contains("tenantSlug"));
        assert!(json.contains("createdAt"));

        let parsed: UserProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, profile(Some("Ada")));
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(profile(Some("Ada")).display_name(), "Ada");
        assert_eq!(profile(None).display_name(), "admin@rustok.io");
    }

    #[test]
    fn empty_session_reports_empty() {
        let session = Session::default();
        assert!(session.is_empty());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn record_tolerates_missing_user() {
        let record: SessionRecord =
            serde_json::from_str(r#"{"token": "T", "tenant": "acme"}"#).unwrap();
        assert_eq!(record.token, "T");
        assert!(record.user.is_none());
    }
}
