//! In-memory RewardRepository implementation for tests and local runs.

use std::sync::RwLock;

use crate::record::RewardRecord;
use crate::repository::{RepositoryError, Result, RewardRepository};

#[derive(Default)]
struct Inner {
    records: Option<Vec<RewardRecord>>,
    saves: usize,
}

/// In-memory implementation of RewardRepository.
///
/// Tracks how many times it was saved so callers can check that a failed
/// operation wrote nothing.
#[derive(Default)]
pub struct InMemoryRewardRepository {
    inner: RwLock<Inner>,
}

impl InMemoryRewardRepository {
    /// Create an empty repository (nothing stored yet).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository that already holds `records`.
    pub fn with_records(records: Vec<RewardRecord>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                records: Some(records),
                saves: 0,
            }),
        }
    }

    /// Copy of the stored records, if any.
    pub fn snapshot(&self) -> Result<Option<Vec<RewardRecord>>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(inner.records.clone())
    }

    /// Number of completed `save` calls.
    pub fn save_count(&self) -> usize {
        self.inner.read().map(|inner| inner.saves).unwrap_or(0)
    }
}

impl RewardRepository for InMemoryRewardRepository {
    fn load(&self) -> Result<Option<Vec<RewardRecord>>> {
        self.snapshot()
    }

    fn save(&self, records: &[RewardRecord]) -> Result<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        inner.records = Some(records.to_vec());
        inner.saves += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}
