//! Backend connection configuration from TOML (`[backend]` section)

use super::ConfigValidationError;
use crate::gemini::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, GeminiSettings};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw backend configuration from TOML
///
/// # Example
///
/// ```toml
/// [backend]
/// base_url = "https://generativelanguage.googleapis.com"
/// api_key_env = "GEMINI_API_KEY"
/// timeout_seconds = 60
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Per-request timeout
    pub timeout_seconds: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_seconds: 60,
        }
    }
}

impl FileBackendConfig {
    pub fn to_settings(&self) -> GeminiSettings {
        GeminiSettings {
            base_url: self.base_url.clone(),
            api_key_env: self.api_key_env.clone(),
            timeout: Duration::from_secs(self.timeout_seconds),
        }
    }

    pub(super) fn validate(&self, issues: &mut Vec<ConfigValidationError>) {
        if self.timeout_seconds == 0 {
            issues.push(ConfigValidationError::InvalidTimeout);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            issues.push(ConfigValidationError::InvalidBaseUrl(self.base_url.clone()));
        }
        if self.api_key_env.trim().is_empty() {
            issues.push(ConfigValidationError::EmptyApiKeyEnv);
        }
    }
}
