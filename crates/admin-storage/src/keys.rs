//! Storage and cookie key constants.

/// Fixed keys used by the admin client across both persistence surfaces.
pub struct StorageKeys;

impl StorageKeys {
    /// Durable session record (JSON `{token, tenant, user}`)
    pub const SESSION_RECORD: &'static str = "rustok-admin-session";

    /// Routing cookie carrying the bearer token
    pub const TOKEN_COOKIE: &'static str = "rustok-admin-token";

    /// Routing cookie carrying the tenant slug
    pub const TENANT_COOKIE: &'static str = "rustok-admin-tenant";

    /// Durable locale preference
    pub const LOCALE: &'static str = "rustok-admin-locale";

    /// Routing cookie carrying the locale code
    pub const LOCALE_COOKIE: &'static str = "rustok-locale";
}
