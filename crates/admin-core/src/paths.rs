//! File system paths for the admin client.

use crate::{CoreError, CoreResult};
use std::path::PathBuf;

/// Config filename under the base directory.
const CONFIG_FILE_NAME: &str = "config.json";
/// Durable session/locale store filename under the base directory.
const STORAGE_FILE_NAME: &str = "client-store.json";

/// Manages file system paths for the admin client.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Base directory for client files (~/.rustok-admin)
    base_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance rooted at `~/.rustok-admin`.
    pub fn new() -> CoreResult<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| CoreError::Path("Could not determine home directory".to_string()))?;

        Ok(Self {
            base_dir: home.join(".rustok-admin"),
        })
    }

    /// Create a new Paths instance with a custom base directory.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.rustok-admin).
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the config file path (~/.rustok-admin/config.json).
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE_NAME)
    }

    /// Get the durable client store path (~/.rustok-admin/client-store.json).
    pub fn storage_file(&self) -> PathBuf {
        self.base_dir.join(STORAGE_FILE_NAME)
    }
}
