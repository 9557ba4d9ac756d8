//! The three-surface locale reconciliation pass.

use crate::Locale;
use admin_storage::{Cookie, CookieJar, DurableStorage, SameSite, StorageKeys};
use std::sync::Arc;

/// Locale routing cookie lifetime: one year.
pub const LOCALE_COOKIE_MAX_AGE_SECS: i64 = 365 * 24 * 60 * 60;

/// Resolves disagreements between the persisted locale preference, the
/// routing cookie, and the locale implied by the current URL path.
///
/// Runs once per rendered page. The stored preference wins only when the
/// cookie has never been written; otherwise the page's locale is
/// authoritative and gets persisted to both surfaces.
pub struct LocaleReconciler {
    storage: Arc<dyn DurableStorage>,
    cookies: Arc<dyn CookieJar>,
}

impl LocaleReconciler {
    /// Create a reconciler over the given persistence surfaces.
    pub fn new(storage: Arc<dyn DurableStorage>, cookies: Arc<dyn CookieJar>) -> Self {
        Self { storage, cookies }
    }

    /// Run one reconciliation pass for a page rendered under `page_locale`.
    ///
    /// Returns the path to navigate to when the stored preference wins,
    /// `None` when the page locale is (now) authoritative. Running the
    /// pass twice with the same starting inputs navigates at most once:
    /// the first pass writes the cookie that disarms the second.
    pub fn reconcile(&self, page_locale: Locale, current_path: &str) -> Option<String> {
        let cookie_present = self.cookies.get(StorageKeys::LOCALE_COOKIE).is_some();

        if !cookie_present {
            if let Some(stored) = self.stored_locale() {
                if stored != page_locale {
                    tracing::debug!(
                        stored = %stored,
                        page = %page_locale,
                        "stored locale wins, navigating"
                    );
                    self.persist(stored);
                    return Some(rewrite_locale_path(current_path, page_locale, stored));
                }
            }
        }

        self.persist(page_locale);
        None
    }

    /// Stored preference, if present and valid.
    ///
    /// Storage failures count as absent: the pass proceeds on cookie and
    /// URL state alone and surfaces nothing.
    fn stored_locale(&self) -> Option<Locale> {
        match self.storage.get(StorageKeys::LOCALE) {
            Ok(Some(code)) => Locale::parse(&code),
            Ok(None) => None,
            Err(err) => {
                tracing::debug!(error = %err, "locale storage unreadable");
                None
            }
        }
    }

    fn persist(&self, locale: Locale) {
        if let Err(err) = self.storage.set(StorageKeys::LOCALE, locale.code()) {
            tracing::debug!(error = %err, "locale storage unwritable");
        }
        self.cookies.set(Cookie::new(
            StorageKeys::LOCALE_COOKIE,
            locale.code(),
            LOCALE_COOKIE_MAX_AGE_SECS,
            SameSite::Lax,
        ));
    }
}

/// Rewrite the leading locale segment of `path` from `from` to `to`.
///
/// `/en/users` becomes `/ru/users` and the bare `/en` becomes `/ru`; the
/// rest of the path is preserved verbatim. A path without the expected
/// segment is scoped under the target locale as-is.
pub fn rewrite_locale_path(path: &str, from: Locale, to: Locale) -> String {
    let from_exact = format!("/{}", from.code());
    if path == from_exact {
        return format!("/{}", to.code());
    }
    let from_prefix = format!("/{}/", from.code());
    if let Some(rest) = path.strip_prefix(&from_prefix) {
        return format!("/{}/{}", to.code(), rest);
    }
    if path == "/" || path.is_empty() {
        return format!("/{}", to.code());
    }
    match path.strip_prefix('/') {
        Some(rest) => format!("/{}/{}", to.code(), rest),
        None => format!("/{}/{}", to.code(), path),
    }
}
