//! Domain layer for triage-assistant
//!
//! This crate contains the core routing policy, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Triage
//!
//! A free-text [`Query`] is routed to exactly one [`SeverityTier`] and one
//! [`SpecialistCategory`]:
//!
//! - **Emergency keywords** short-circuit everything and route to the
//!   Emergency Department
//! - **Severity** otherwise comes from a model classifier, defaulting to
//!   `moderate` when the reply is unusable
//! - **Specialist** is the first matching row of an ordered condition table
//! - **Contact** depends on the tier; mild queries go to volunteers
//!
//! ## Model Session
//!
//! [`ModelSession`] tracks the selected backend model and a bounded retry
//! counter. [`ModelSelectionPolicy`] picks low-cost models, and
//! [`FailureKind`] separates rate-limit failures from fatal ones.

pub mod config;
pub mod core;
pub mod prompt;
pub mod session;
pub mod triage;
pub mod util;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::{
    error::DomainError,
    model::{GENERATE_CONTENT_METHOD, Model, ModelInfo},
    query::Query,
};
pub use prompt::{CONSULT_DISCLAIMER, PromptTemplate};
pub use session::{
    failure::{FailureKind, TRANSIENT_ERROR_MARKERS},
    model_session::{DEFAULT_MAX_RETRIES, ModelSession},
    selection::{FALLBACK_MODELS, ModelSelectionPolicy, PREFERRED_MODELS},
};
pub use triage::{
    contact::ContactResolver,
    emergency::{EMERGENCY_ADVISORY, EMERGENCY_KEYWORDS, EmergencyKeywordFilter},
    outcome::{Advisory, TriageOutcome, TriageRoute},
    severity::SeverityTier,
    specialist::{
        EMERGENCY_DEPARTMENT_CONTACT, GENERAL_PRACTITIONER_CONTACT, SpecialistCategory,
        SpecialistDirectory, SpecialistEntry,
    },
    volunteer::{VolunteerChannel, VolunteerDirectory},
};
