//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("No suitable models available")]
    NoModelsAvailable,

    #[error("Query cannot be empty")]
    EmptyQuery,

    #[error("Unknown severity tier: {0}")]
    UnknownSeverity(String),

    #[error("Unknown specialist category: {0}")]
    UnknownSpecialist(String),
}
