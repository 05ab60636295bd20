//! Terminal client configuration.
use std::env;
use std::path::PathBuf;

use realm_runtime::{MessageLog, SessionConfig};

/// Client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// Fixed seed for a reproducible session; the clock is used when unset.
    pub seed: Option<u64>,
    pub data_dir: PathBuf,
    pub auto_respawn: bool,
    pub log_capacity: usize,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            seed: None,
            data_dir: PathBuf::from("data"),
            auto_respawn: false,
            log_capacity: MessageLog::DEFAULT_CAPACITY,
        }
    }
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `REALM_SEED` - Session seed (default: current time)
    /// - `REALM_DATA_DIR` - Content directory (default: `data`)
    /// - `REALM_AUTO_RESPAWN` - `true` to respawn without asking (default: false)
    /// - `REALM_LOG_CAPACITY` - Messages kept in the log (default: 5)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).map(|value| value.trim().to_owned());
        let mut config = Self::default();

        if let Some(seed) = read("REALM_SEED").and_then(|v| v.parse().ok()) {
            config.seed = Some(seed);
        }
        if let Some(dir) = read("REALM_DATA_DIR").filter(|v| !v.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(flag) = read("REALM_AUTO_RESPAWN").and_then(|v| parse_flag(&v)) {
            config.auto_respawn = flag;
        }
        if let Some(capacity) = read("REALM_LOG_CAPACITY").and_then(|v| v.parse::<usize>().ok()) {
            config.log_capacity = capacity.max(1);
        }

        config
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            auto_respawn: self.auto_respawn,
            log_capacity: self.log_capacity,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> CliConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CliConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        assert_eq!(config_from(&[]), CliConfig::default());
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("REALM_SEED", "42"),
            ("REALM_DATA_DIR", "/srv/realm"),
            ("REALM_AUTO_RESPAWN", "yes"),
            ("REALM_LOG_CAPACITY", "0"),
        ]);

        assert_eq!(config.seed, Some(42));
        assert_eq!(config.data_dir, PathBuf::from("/srv/realm"));
        assert!(config.auto_respawn);
        assert_eq!(config.log_capacity, 1);
        assert_eq!(config.session().log_capacity, 1);
    }

    #[test]
    fn ignores_malformed_values() {
        let config = config_from(&[("REALM_SEED", "abc"), ("REALM_AUTO_RESPAWN", "maybe")]);
        assert_eq!(config.seed, None);
        assert!(!config.auto_respawn);
    }
}
