//! Infrastructure layer for triage-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileBackendConfig, FileConfig, FileModelsConfig,
    FileOutputConfig, FileReplConfig, FileRetryConfig, FileSpecialistConfig, FileVolunteerConfig,
};
pub use gemini::{GeminiBackend, GeminiError, GeminiSettings};
