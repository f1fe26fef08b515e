//! Repository layer for the backing resource.
//!
//! The backing resource is the sole source of truth between process runs. It
//! is read in full when a store opens and rewritten in full after every claim.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::FileRewardRepository;
pub use memory::InMemoryRewardRepository;
pub use traits::RewardRepository;
