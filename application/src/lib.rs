//! Application layer for triage-assistant
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::TriageParams;
pub use ports::{
    completion_backend::{BackendError, CompletionBackend, GenerationRequest},
    progress::{NoProgress, TriageProgressNotifier},
};
pub use use_cases::classify_severity::SeverityClassifier;
pub use use_cases::generate_advisory::{FATAL_ERROR_PREFIX, HIGH_DEMAND_MESSAGE, ResponseGenerator};
pub use use_cases::init_session::{
    InitSessionError, InitSessionInput, InitSessionOutput, InitSessionUseCase,
};
pub use use_cases::run_triage::RunTriageUseCase;
