use crate::corpus::FaqRecord;
use crate::storage::traits::{Storage, StorageResult};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Corpus storage backed by a pretty-printed JSON array
///
/// Saves go to a sibling `.tmp` file that is then renamed over the target, so
/// an interrupted write never replaces the last good snapshot.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Creates a store for the given file path
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the corpus file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> StorageResult<Vec<FaqRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        let records: Vec<FaqRecord> = serde_json::from_str(&content)?;
        tracing::info!(
            "Loaded {} existing FAQs from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn save(&self, records: &[FaqRecord]) -> StorageResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut json = serde_json::to_string_pretty(records)?;
        json.push('\n');

        let temp = self.temp_path();
        {
            let mut file = fs::File::create(&temp)?;
            file.write_all(json.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&temp, &self.path)?;

        tracing::info!("Saved {} FAQs to {}", records.len(), self.path.display());
        Ok(())
    }
}
