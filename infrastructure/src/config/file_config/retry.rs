//! Retry configuration from TOML (`[retry]` section)

use serde::{Deserialize, Serialize};
use std::time::Duration;
use triage_application::TriageParams;
use triage_domain::DEFAULT_MAX_RETRIES;

/// Raw retry configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRetryConfig {
    /// Transient-failure retries per session before giving up
    pub max_retries: u32,
    /// Wait after each rate-limit failure
    pub backoff_seconds: u64,
}

impl Default for FileRetryConfig {
    fn default() -> Self {
        Self {
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_seconds: 5,
        }
    }
}

impl FileRetryConfig {
    /// Loop parameters for the use cases
    pub fn to_params(&self) -> TriageParams {
        TriageParams::default().with_backoff(Duration::from_secs(self.backoff_seconds))
    }

    /// Retry bound handed to the session at startup
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
}
