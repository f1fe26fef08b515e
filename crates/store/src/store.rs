//! In-memory reward ledger.
//!
//! [`RewardStore`] owns every record loaded from its repository together with
//! two derived views over the unclaimed records:
//!
//! - unclaimed codes grouped by reward-type name (record order)
//! - unclaimed count per reward-type name
//!
//! Reward types are addressed by a small integer id assigned in order of first
//! appearance among the unclaimed records at load time. Ids are never
//! renumbered while the store is alive. A type that runs out of codes keeps its
//! id and is listed with zero remaining until the store is reloaded.

use std::collections::{HashMap, HashSet};

use crate::error::RewardError;
use crate::record::{RewardRecord, display_name};
use crate::repository::{RepositoryError, RewardRepository};
use crate::Result;

/// One row of the reward-type listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewardSummary {
    pub id: usize,
    pub name: String,
    pub display_name: String,
    pub remaining: usize,
}

/// Views over the unclaimed records, always rebuilt from the record list.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct UnclaimedViews {
    by_name: HashMap<String, Vec<String>>,
    counts: HashMap<String, usize>,
}

impl UnclaimedViews {
    fn build(records: &[RewardRecord]) -> Self {
        let mut views = Self::default();
        for record in records.iter().filter(|record| !record.claimed) {
            views
                .by_name
                .entry(record.name.clone())
                .or_default()
                .push(record.code.clone());
            *views.counts.entry(record.name.clone()).or_insert(0) += 1;
        }
        views
    }

    fn remaining(&self, name: &str) -> usize {
        self.counts.get(name).copied().unwrap_or(0)
    }
}

/// The reward ledger bound to its backing repository.
pub struct RewardStore<R> {
    repository: R,
    records: Vec<RewardRecord>,
    code_index: HashMap<String, usize>,
    id_to_name: Vec<String>,
    views: UnclaimedViews,
}

impl<R: RewardRepository> RewardStore<R> {
    /// Load the store from `repository`.
    ///
    /// Fails when the backing resource is missing, unreadable, or invalid.
    pub fn open(repository: R) -> Result<Self> {
        match repository.load().map_err(RewardError::Load)? {
            Some(records) => Self::from_records(repository, records),
            None => Err(RewardError::NotFound(repository.location())),
        }
    }

    /// Load the store, starting empty when the backing resource does not exist.
    pub fn open_or_empty(repository: R) -> Result<Self> {
        let records = repository
            .load()
            .map_err(RewardError::Load)?
            .unwrap_or_default();
        Self::from_records(repository, records)
    }

    /// Build a store from already-loaded records.
    ///
    /// Codes must be unique.
    pub fn from_records(repository: R, records: Vec<RewardRecord>) -> Result<Self> {
        let mut code_index = HashMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if code_index.insert(record.code.clone(), index).is_some() {
                return Err(RewardError::Load(RepositoryError::CorruptedData(format!(
                    "duplicate code '{}'",
                    record.code
                ))));
            }
        }

        let mut id_to_name: Vec<String> = Vec::new();
        for record in records.iter().filter(|record| !record.claimed) {
            if !id_to_name.contains(&record.name) {
                id_to_name.push(record.name.clone());
            }
        }

        let views = UnclaimedViews::build(&records);

        tracing::debug!(
            "Opened reward store at {}: {} records, {} reward types",
            repository.location(),
            records.len(),
            id_to_name.len()
        );

        Ok(Self {
            repository,
            records,
            code_index,
            id_to_name,
            views,
        })
    }

    /// All records in persisted order.
    pub fn records(&self) -> &[RewardRecord] {
        &self.records
    }

    /// The backing repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Reward-type name behind `id`.
    pub fn name_for_id(&self, id: usize) -> Option<&str> {
        self.id_to_name.get(id).map(String::as_str)
    }

    /// Number of unclaimed codes left for `name`.
    pub fn remaining(&self, name: &str) -> usize {
        self.views.remaining(name)
    }

    /// Unclaimed codes for `name` in record order.
    pub fn unclaimed_codes(&self, name: &str) -> &[String] {
        self.views
            .by_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every reward type known to this store, by id, with live counts.
    pub fn list_types(&self) -> Vec<RewardSummary> {
        self.id_to_name
            .iter()
            .enumerate()
            .map(|(id, name)| RewardSummary {
                id,
                name: name.clone(),
                display_name: display_name(name),
                remaining: self.views.remaining(name),
            })
            .collect()
    }

    /// Mark a single code as claimed without persisting.
    ///
    /// Only codes the store knows and has not handed out yet may be claimed.
    /// Anything else is an internal error.
    pub fn claim(&mut self, code: &str) -> Result<()> {
        self.mark_claimed(code)?;
        self.views = UnclaimedViews::build(&self.records);
        Ok(())
    }

    /// Flip the claimed flag for `code`, leaving the views stale.
    ///
    /// Returns the record index so the flip can be undone.
    fn mark_claimed(&mut self, code: &str) -> Result<usize> {
        let index = *self
            .code_index
            .get(code)
            .ok_or_else(|| RewardError::UnknownCode(code.to_string()))?;

        let record = &mut self.records[index];
        if record.claimed {
            return Err(RewardError::AlreadyClaimed(code.to_string()));
        }
        record.claimed = true;

        Ok(index)
    }

    /// Reset the claimed flag on `indices` and rebuild the views.
    fn unclaim(&mut self, indices: &[usize]) {
        for &index in indices {
            self.records[index].claimed = false;
        }
        self.views = UnclaimedViews::build(&self.records);
    }

    /// Claim the first `count` unclaimed codes of reward type `id` and persist.
    ///
    /// Either every requested code is claimed and the store is written back,
    /// or nothing changes and nothing is written. A failed write rolls the
    /// claims back.
    pub fn claim_by_type_id(&mut self, id: usize, count: usize) -> Result<Vec<String>> {
        let name = self
            .name_for_id(id)
            .ok_or(RewardError::UnknownRewardType { id })?
            .to_string();

        if count == 0 {
            return Err(RewardError::InvalidCount { count });
        }

        let available = self.views.remaining(&name);
        if count > available {
            return Err(RewardError::InsufficientSupply {
                name,
                requested: count,
                available,
            });
        }

        let claimed: Vec<String> = self.unclaimed_codes(&name)[..count].to_vec();
        let mut flipped = Vec::with_capacity(count);
        for code in &claimed {
            match self.mark_claimed(code) {
                Ok(index) => flipped.push(index),
                Err(err) => {
                    self.unclaim(&flipped);
                    return Err(err);
                }
            }
        }
        self.views = UnclaimedViews::build(&self.records);

        if let Err(err) = self.persist() {
            self.unclaim(&flipped);
            tracing::warn!("Rolled back {} claimed {} code(s): {}", count, name, err);
            return Err(err);
        }

        tracing::info!(
            "Claimed {} {} code(s), {} left",
            claimed.len(),
            name,
            self.views.remaining(&name)
        );

        Ok(claimed)
    }

    /// Write every record back to the repository, replacing its contents.
    pub fn persist(&self) -> Result<()> {
        self.repository
            .save(&self.records)
            .map_err(RewardError::Persist)
    }

    /// Append records whose codes are not known yet, then persist.
    ///
    /// Records are taken in input order. Duplicates (against the store or
    /// within `incoming`) are skipped. New reward types get the next free ids;
    /// existing ids are untouched. Returns the number of records added.
    pub fn import(&mut self, incoming: impl IntoIterator<Item = RewardRecord>) -> Result<usize> {
        let records_before = self.records.len();
        let ids_before = self.id_to_name.len();
        let mut added = 0;
        let mut skipped = 0;
        let mut new_names = HashSet::new();

        for record in incoming {
            if self.code_index.contains_key(&record.code) {
                skipped += 1;
                continue;
            }

            if !record.claimed && !self.id_to_name.contains(&record.name) {
                new_names.insert(record.name.clone());
                self.id_to_name.push(record.name.clone());
            }

            self.code_index
                .insert(record.code.clone(), self.records.len());
            self.records.push(record);
            added += 1;
        }

        if skipped > 0 {
            tracing::warn!("Skipped {} rewards with codes already saved", skipped);
        }

        if added > 0 {
            self.views = UnclaimedViews::build(&self.records);

            if let Err(err) = self.persist() {
                for record in self.records.drain(records_before..) {
                    self.code_index.remove(&record.code);
                }
                self.id_to_name.truncate(ids_before);
                self.views = UnclaimedViews::build(&self.records);
                tracing::warn!("Rolled back import of {} rewards: {}", added, err);
                return Err(err);
            }
        }

        tracing::info!(
            "Imported {} rewards ({} new reward types)",
            added,
            new_names.len()
        );

        Ok(added)
    }
}
