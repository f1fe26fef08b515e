//! File-based RewardRepository implementation.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::record::RewardRecord;
use crate::repository::{RepositoryError, Result, RewardRepository};

/// JSON file backing resource.
///
/// # File Format
///
/// A pretty-printed JSON array, one object per record:
///
/// ```text
/// [
///   {
///     "code": "A1",
///     "name": "trial2d",
///     "claimed": false
///   }
/// ]
/// ```
///
/// Writes go to `<file>.tmp` first and are renamed over the target.
///
/// There is no locking. Two processes working on the same file race and the
/// last writer wins.
pub struct FileRewardRepository {
    path: PathBuf,
}

impl FileRewardRepository {
    /// Create a repository for the JSON file at `path`.
    ///
    /// The file does not need to exist yet.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".tmp");
        PathBuf::from(name)
    }
}

impl RewardRepository for FileRewardRepository {
    fn load(&self) -> Result<Option<Vec<RewardRecord>>> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(RepositoryError::Io(err)),
        };
        let records: Vec<RewardRecord> =
            serde_json::from_str(&json).map_err(|e| RepositoryError::Json(e.to_string()))?;

        tracing::debug!(
            "Loaded {} rewards from {}",
            records.len(),
            self.path.display()
        );

        Ok(Some(records))
    }

    fn save(&self, records: &[RewardRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(RepositoryError::Io)?;
        }

        let temp_path = self.temp_path();

        let json =
            serde_json::to_string_pretty(records).map_err(|e| RepositoryError::Json(e.to_string()))?;
        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;

        // Atomic rename
        if let Err(err) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(RepositoryError::Io(err));
        }

        tracing::debug!("Saved {} rewards to {}", records.len(), self.path.display());

        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
