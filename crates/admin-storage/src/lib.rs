//! Client-side persistence surfaces for the admin client.
//!
//! Session and locale state is mirrored across two surfaces with different
//! visibility:
//! - [`DurableStorage`]: key-value storage that survives restarts but is
//!   only visible to the client itself (backed by memory or a JSON file).
//! - [`CookieJar`]: routing-visible cookies that server-side route guards
//!   can read before any page renders.
//!
//! The surfaces carry no transactional guarantee between them; callers
//! treat them as eventually-consistent replicas of in-memory state.

mod cookies;
mod file;
mod keys;
mod memory;
mod traits;

pub use cookies::{cookie_value, Cookie, MemoryCookieJar, SameSite};
pub use file::FileStorage;
pub use keys::StorageKeys;
pub use memory::MemoryStorage;
pub use traits::{CookieJar, DurableStorage};

use thiserror::Error;

/// Error type for durable storage operations.
#[derive(Error, Debug)]
pub enum StorageError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding/decoding error
    #[error("Encoding error: {0}")]
    Encoding(String),
}

/// Result type for durable storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
