//! Credential storage trait and implementations

use async_trait::async_trait;
use log::warn;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

use crate::error::Result;

const KEY_FILE_NAME: &str = ".gemini_api_key";

/// Durable store for the API key.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Read the stored key. Absent when nothing has been stored yet or the
    /// store cannot be read.
    async fn get(&self) -> Option<String>;

    /// Store the key, replacing any previous value.
    async fn set(&self, value: &str) -> Result<()>;
}

/// File-backed credential store. The key is kept as a single trimmed line
/// inside the base directory, so it survives process restarts.
#[derive(Clone)]
pub struct FileCredentialStore {
    base_path: PathBuf,
}

impl FileCredentialStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    fn key_path(&self) -> PathBuf {
        self.base_path.join(KEY_FILE_NAME)
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self) -> Option<String> {
        let path = self.key_path();
        if !path.exists() {
            return None;
        }
        let contents = match fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) => {
                warn!("Failed to read credential file {}: {e}", path.display());
                return None;
            }
        };
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    async fn set(&self, value: &str) -> Result<()> {
        fs::create_dir_all(&self.base_path).await?;
        fs::write(self.key_path(), value.trim()).await?;
        Ok(())
    }
}

/// In-memory store for tests and environments without a usable home dir.
#[derive(Default)]
pub struct MemoryCredentialStore {
    value: RwLock<Option<String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self) -> Option<String> {
        self.value.read().await.clone()
    }

    async fn set(&self, value: &str) -> Result<()> {
        *self.value.write().await = Some(value.trim().to_string());
        Ok(())
    }
}
