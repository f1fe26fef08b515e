//! Persisted reward record and its display formatting.

use serde::{Deserialize, Serialize};

/// Number of trailing characters every stored reward-type name carries that
/// are not part of its human-readable form.
pub const DISPLAY_SUFFIX_LEN: usize = 2;

/// A single redeemable code.
///
/// `code` is the primary key. `claimed` is the only field that changes, and
/// only from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardRecord {
    /// Unique redeemable identifier.
    pub code: String,

    /// Reward type this code belongs to (e.g. `"10day_trial"`).
    pub name: String,

    /// Whether the code has already been handed out.
    pub claimed: bool,
}

impl RewardRecord {
    /// Create an unclaimed record.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            claimed: false,
        }
    }

    /// Builder-style toggle for the claimed flag.
    pub fn with_claimed(mut self, claimed: bool) -> Self {
        self.claimed = claimed;
        self
    }
}

/// Human-readable form of a stored reward-type name.
///
/// The name is lower-cased and its last [`DISPLAY_SUFFIX_LEN`] characters are
/// dropped. Names shorter than the suffix render as an empty string.
pub fn display_name(name: &str) -> String {
    let lowered = name.to_lowercase();
    let keep = lowered.chars().count().saturating_sub(DISPLAY_SUFFIX_LEN);
    lowered.chars().take(keep).collect()
}
