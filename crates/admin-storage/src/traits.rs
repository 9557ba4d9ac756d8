//! Storage surface trait definitions.

use crate::cookies::Cookie;
use crate::StorageResult;

/// Trait for durable client-side key-value storage.
pub trait DurableStorage: Send + Sync {
    /// Store a value
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Retrieve a value
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Delete a value, returning whether it existed
    fn delete(&self, key: &str) -> StorageResult<bool>;

    /// Check if a key exists
    fn has(&self, key: &str) -> StorageResult<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Trait for the routing-visible cookie surface.
///
/// The jar is an overwrite-only external resource: writes never fail from
/// the caller's point of view, and the jar's contents may disagree with
/// durable storage at any time (the user can clear cookies independently).
pub trait CookieJar: Send + Sync {
    /// Set a cookie. A non-positive max-age expires it immediately.
    fn set(&self, cookie: Cookie);

    /// Read a cookie value by name.
    fn get(&self, name: &str) -> Option<String>;

    /// Expire a cookie immediately (max-age 0).
    fn expire(&self, name: &str);
}
