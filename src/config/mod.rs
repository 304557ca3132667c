use std::str::FromStr;

use serde::{self, Deserialize};
use tracing::level_filters::{LevelFilter, ParseLevelFilterError};

#[derive(Deserialize, Clone, Debug)]
pub struct GlobalConfig {
    /// Minimum level written to the lambda logs (`trace`, `debug`, `info`, `warn`, `error`, `off`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl GlobalConfig {
    /// Parses `log_level`. Callers fall back to INFO on error and report it once a subscriber
    /// is installed.
    pub fn level_filter(&self) -> Result<LevelFilter, ParseLevelFilterError> {
        LevelFilter::from_str(&self.log_level)
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_owned()
}
