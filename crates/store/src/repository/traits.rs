//! Repository contract for the reward ledger.

use crate::record::RewardRecord;
use crate::repository::Result;

/// Backing resource holding every reward record.
///
/// Implementations store the full, ordered record list. There is no partial
/// update: `save` always replaces everything previously stored.
pub trait RewardRepository: Send + Sync {
    /// Load all records in persisted order.
    ///
    /// Returns `Ok(None)` when the resource does not exist yet.
    fn load(&self) -> Result<Option<Vec<RewardRecord>>>;

    /// Overwrite the resource with `records`.
    fn save(&self, records: &[RewardRecord]) -> Result<()>;

    /// Human-readable location used in log lines and error messages.
    fn location(&self) -> String;
}
