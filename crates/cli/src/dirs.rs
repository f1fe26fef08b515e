//! Platform-specific directory utilities

use std::path::PathBuf;

/// Get the platform-specific log directory
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/rewards/logs`
/// - Linux: `~/.cache/rewards/logs` (or `$XDG_CACHE_HOME/rewards/logs`)
/// - Windows: `%LOCALAPPDATA%\rewards\logs`
/// - Fallback: `/tmp/rewards/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "rewards")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/rewards"));

    base_dir.join("logs")
}
