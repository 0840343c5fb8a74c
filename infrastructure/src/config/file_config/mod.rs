//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod models;
mod output;
mod repl;
mod retry;
mod specialists;
mod volunteers;

pub use backend::FileBackendConfig;
pub use models::FileModelsConfig;
pub use output::FileOutputConfig;
pub use repl::FileReplConfig;
pub use retry::FileRetryConfig;
pub use specialists::FileSpecialistConfig;
pub use volunteers::FileVolunteerConfig;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use triage_domain::{ContactResolver, DomainError};

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigValidationError {
    #[error("backend.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("backend.base_url must start with http:// or https://, got '{0}'")]
    InvalidBaseUrl(String),

    #[error("backend.api_key_env cannot be empty")]
    EmptyApiKeyEnv,

    #[error("{field}: model name cannot be empty")]
    EmptyModelName { field: String },

    #[error("{field}: list cannot be empty")]
    EmptyModelList { field: String },

    #[error("volunteers[{index}]: name and contact are required")]
    IncompleteVolunteer { index: usize },

    #[error("specialists[{index}]: {error}")]
    UnknownSpecialist { index: usize, error: DomainError },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend connection settings
    pub backend: FileBackendConfig,
    /// Model selection
    pub models: FileModelsConfig,
    /// Rate-limit retry settings
    pub retry: FileRetryConfig,
    /// REPL settings
    pub repl: FileReplConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Volunteer channels shown for mild queries
    pub volunteers: Vec<FileVolunteerConfig>,
    /// Contact overrides and removals for the specialist table
    pub specialists: Vec<FileSpecialistConfig>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        self.backend.validate(&mut issues);
        self.models.validate(&mut issues);

        for (index, volunteer) in self.volunteers.iter().enumerate() {
            if volunteer.name.trim().is_empty() || volunteer.contact.trim().is_empty() {
                issues.push(ConfigValidationError::IncompleteVolunteer { index });
            }
        }

        for (index, specialist) in self.specialists.iter().enumerate() {
            if let Err(error) = specialist.category() {
                issues.push(ConfigValidationError::UnknownSpecialist { index, error });
            }
        }

        issues
    }

    /// Contact resolver with the configured specialist overrides and volunteers
    pub fn contact_resolver(&self) -> ContactResolver {
        ContactResolver::new(
            specialists::specialist_directory(&self.specialists),
            volunteers::volunteer_directory(&self.volunteers),
        )
    }
}
