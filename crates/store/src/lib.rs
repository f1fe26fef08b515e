//! Reward code ledger.
//!
//! Tracks a pool of reward redemption codes grouped by reward type and hands
//! them out in file order. The ledger is loaded wholesale from a backing
//! resource, mutated by claims, and written back in full after every claim.
//!
//! # Modules
//!
//! - [`record`]: the persisted record shape and display-name formatting
//! - [`store`]: the in-memory aggregate with its derived views
//! - [`repository`]: backing resources (JSON file, in-memory)
//! - [`error`]: error taxonomy for load and claim operations

pub mod error;
pub mod record;
pub mod repository;
pub mod store;

pub use error::{ErrorSeverity, RewardError};
pub use record::{RewardRecord, display_name};
pub use repository::{
    FileRewardRepository, InMemoryRewardRepository, RepositoryError, RewardRepository,
};
pub use store::{RewardStore, RewardSummary};

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, RewardError>;
