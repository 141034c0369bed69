//! Storage traits and error types
//!
//! This module defines the trait interface for corpus storage backends and
//! associated error types.

use crate::corpus::FaqRecord;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for corpus storage backends
///
/// A backend persists the whole corpus as one snapshot. `save` replaces the
/// previous snapshot, `load` returns the last one written.
pub trait Storage {
    /// Loads the last saved snapshot
    ///
    /// # Returns
    ///
    /// * `Ok(Vec<FaqRecord>)` - The records, empty if nothing was ever saved
    /// * `Err(StorageError)` - The snapshot exists but could not be read
    fn load(&self) -> StorageResult<Vec<FaqRecord>>;

    /// Replaces the stored snapshot with the given records
    fn save(&self, records: &[FaqRecord]) -> StorageResult<()>;
}
