//! Storage module for persisting the FAQ corpus
//!
//! The corpus is stored as a single JSON snapshot that is fully rewritten on
//! every save and reloaded when the next crawler is constructed.

mod json;
mod traits;

pub use json::JsonStorage;
pub use traits::{Storage, StorageError, StorageResult};

use std::path::Path;

/// Opens the JSON corpus store at the given path
///
/// Nothing is read or created until the first `load` or `save`.
pub fn open_storage(path: &Path) -> JsonStorage {
    JsonStorage::new(path)
}
