//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Default backing file, relative to the working directory.
pub const DEFAULT_REWARDS_FILE: &str = "rewards.json";

/// Configuration shared by every command.
#[derive(Clone, Debug)]
pub struct CliConfig {
    pub rewards_file: PathBuf,
    pub file_logging: bool,
    pub log_dir: Option<PathBuf>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            rewards_file: PathBuf::from(DEFAULT_REWARDS_FILE),
            file_logging: false,
            log_dir: None,
        }
    }
}

impl CliConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `REWARDS_FILE` - Backing rewards file (default: `rewards.json`)
    /// - `REWARDS_FILE_LOGGING` - Also write logs to a file (default: false)
    /// - `REWARDS_LOG_DIR` - Directory for log files (default: platform-specific)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Construct configuration from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup("REWARDS_FILE").filter(|path| !path.is_empty()) {
            config.rewards_file = PathBuf::from(path);
        }

        if let Some(value) = lookup("REWARDS_FILE_LOGGING") {
            // Also accept just setting the variable without value as "true"
            config.file_logging = value.parse::<bool>().unwrap_or(value.is_empty());
        }

        config.log_dir = lookup("REWARDS_LOG_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);

        config
    }

    /// Override the rewards file (e.g. from `--file`).
    pub fn with_rewards_file(mut self, path: Option<PathBuf>) -> Self {
        if let Some(path) = path {
            self.rewards_file = path;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_vars(lookup(&[]));

        assert_eq!(config.rewards_file, PathBuf::from("rewards.json"));
        assert!(!config.file_logging);
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_reads_variables() {
        let config = CliConfig::from_vars(lookup(&[
            ("REWARDS_FILE", "/data/codes.json"),
            ("REWARDS_FILE_LOGGING", "true"),
            ("REWARDS_LOG_DIR", "/var/log/rewards"),
        ]));

        assert_eq!(config.rewards_file, PathBuf::from("/data/codes.json"));
        assert!(config.file_logging);
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/rewards")));
    }

    #[test]
    fn test_bare_logging_flag_enables_file_logging() {
        assert!(CliConfig::from_vars(lookup(&[("REWARDS_FILE_LOGGING", "")])).file_logging);
        assert!(!CliConfig::from_vars(lookup(&[("REWARDS_FILE_LOGGING", "false")])).file_logging);
    }

    #[test]
    fn test_flag_overrides_environment() {
        let config = CliConfig::from_vars(lookup(&[("REWARDS_FILE", "env.json")]))
            .with_rewards_file(Some(PathBuf::from("flag.json")));
        assert_eq!(config.rewards_file, PathBuf::from("flag.json"));

        let config = CliConfig::from_vars(lookup(&[("REWARDS_FILE", "env.json")]))
            .with_rewards_file(None);
        assert_eq!(config.rewards_file, PathBuf::from("env.json"));
    }
}
