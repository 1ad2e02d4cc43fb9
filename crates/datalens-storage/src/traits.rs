//! Storage trait and error types

use std::path::PathBuf;

use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Blob store keyed by a relative file name.
///
/// Writes overwrite silently; keys are validated against path traversal
/// before they touch the filesystem.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist `data` under `key`, replacing any existing file.
    /// Returns the path of the written file.
    async fn write(&self, key: &str, data: &[u8]) -> StorageResult<PathBuf>;

    /// Read the full contents stored under `key`.
    async fn read(&self, key: &str) -> StorageResult<Vec<u8>>;

    async fn exists(&self, key: &str) -> StorageResult<bool>;

    async fn size(&self, key: &str) -> StorageResult<u64>;

    /// Resolve `key` to its filesystem path without touching the file.
    fn path_for(&self, key: &str) -> StorageResult<PathBuf>;
}
