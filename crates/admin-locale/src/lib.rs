//! Locale selection and reconciliation for the RusToK admin client.
//!
//! The current locale is mirrored in three places: durable client storage,
//! a routing-visible cookie, and the locale segment of the current URL
//! path. At most one of them is authoritative at reconciliation time; the
//! [`LocaleReconciler`] picks the winner, makes all three agree, and
//! navigates at most once.

mod locale;
mod reconcile;

pub use locale::Locale;
pub use reconcile::{rewrite_locale_path, LocaleReconciler, LOCALE_COOKIE_MAX_AGE_SECS};
