//! Persistence backend: an async key to string blob store.
//!
//! Stores serialize their entire collection into one blob per namespace.
//! There is no schema versioning; a blob that no longer parses is discarded
//! in favor of fixture defaults at hydration time.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use async_trait::async_trait;

/// Storage namespace keys, kept byte-identical to the keys the original app
/// shipped with so existing on-device blobs still hydrate.
pub mod namespaces {
    pub const USER: &str = "snowboard-user-storage";
    pub const TRIPS: &str = "snowboard-trips-storage";
    pub const SESSIONS: &str = "snowboard-sessions-storage";
    pub const CHECKLIST: &str = "snowboard-checklist-storage";
}

/// Asynchronous key to string blob store.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Fetch the blob stored under `key`, or `None` if absent.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous blob.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the blob under `key`; removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Errors from blob store backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to read blob: {0}")]
    Read(String),

    #[error("Failed to write blob: {0}")]
    Write(String),
}
