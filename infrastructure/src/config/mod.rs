//! Configuration file loading for triage-assistant
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./triage.toml` or `./.triage.toml`
//! 3. XDG config: `$XDG_CONFIG_HOME/triage-assistant/config.toml`
//! 4. Fallback: `~/.config/triage-assistant/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigValidationError, FileBackendConfig, FileConfig, FileModelsConfig, FileOutputConfig,
    FileReplConfig, FileRetryConfig, FileSpecialistConfig, FileVolunteerConfig,
};
pub use loader::ConfigLoader;
