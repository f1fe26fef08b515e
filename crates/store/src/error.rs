//! Error taxonomy for loading and claiming rewards.
//!
//! Errors are classified by [`ErrorSeverity`] so callers can decide whether to
//! report a message to the user or treat the failure as a bug.

use thiserror::Error;

use crate::record::display_name;
use crate::repository::RepositoryError;

/// Severity level of an error, used for categorization and reporting.
///
/// - **Validation**: invalid user input, the operation is rejected and nothing changes
/// - **Internal**: a caller broke a store invariant, indicates a bug
/// - **Fatal**: the backing resource cannot be read or written
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: unknown reward id, not enough codes left
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: claiming a code the store has never seen
    Internal,

    /// Backing resource missing, corrupt, or unwritable.
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Errors surfaced by [`RewardStore`](crate::RewardStore) operations.
#[derive(Debug, Error)]
pub enum RewardError {
    #[error("rewards file not found: {0}")]
    NotFound(String),

    #[error("failed to load rewards: {0}")]
    Load(#[source] RepositoryError),

    #[error("failed to save rewards: {0}")]
    Persist(#[source] RepositoryError),

    #[error("unknown reward id {id}")]
    UnknownRewardType { id: usize },

    #[error("claim count must be positive, got {count}")]
    InvalidCount { count: usize },

    #[error(
        "I don't have {requested} codes for {}, only {available} left",
        display_name(.name)
    )]
    InsufficientSupply {
        name: String,
        requested: usize,
        available: usize,
    },

    #[error("code {0} not found in codes")]
    UnknownCode(String),

    #[error("code {0} is already claimed")]
    AlreadyClaimed(String),
}

impl RewardError {
    /// Classify this error.
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NotFound(_) | Self::Load(_) | Self::Persist(_) => ErrorSeverity::Fatal,
            Self::UnknownRewardType { .. }
            | Self::InvalidCount { .. }
            | Self::InsufficientSupply { .. } => ErrorSeverity::Validation,
            Self::UnknownCode(_) | Self::AlreadyClaimed(_) => ErrorSeverity::Internal,
        }
    }
}
