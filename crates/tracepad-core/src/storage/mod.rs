//! Storage abstraction for progress persistence.
//!
//! The surrounding application injects one of these backends; the scoring
//! engine itself never touches storage.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use crate::progress::ProgressBook;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Progress book not found: {0}")]
    NotFound(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Trait for progress-book storage backends.
///
/// Implementations can keep books in memory, on the filesystem, or behind
/// whatever persistence the host application has.
///
/// Note: On native platforms, implementations must be Send + Sync.
/// On WASM, these bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait Storage: Send + Sync {
    /// Save a progress book under a key.
    fn save(&self, key: &str, book: &ProgressBook) -> BoxFuture<'_, StorageResult<()>>;

    /// Load a progress book.
    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<ProgressBook>>;

    /// Delete a progress book.
    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all stored keys.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check if a progress book exists.
    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

/// Trait for progress-book storage backends (WASM version without
/// Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait Storage {
    /// Save a progress book under a key.
    fn save(&self, key: &str, book: &ProgressBook) -> BoxFuture<'_, StorageResult<()>>;

    /// Load a progress book.
    fn load(&self, key: &str) -> BoxFuture<'_, StorageResult<ProgressBook>>;

    /// Delete a progress book.
    fn delete(&self, key: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all stored keys.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check if a progress book exists.
    fn exists(&self, key: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
