//! Triage domain.
//!
//! Pure routing policy for a single query:
//!
//! 1. [`emergency::EmergencyKeywordFilter`]: keyword short-circuit
//! 2. [`severity::SeverityTier`]: urgency bucket and reply normalization
//! 3. [`specialist::SpecialistDirectory`]: ordered condition table
//! 4. [`contact::ContactResolver`]: contact payload per tier
//! 5. [`outcome::TriageOutcome`]: what the caller gets back

pub mod contact;
pub mod emergency;
pub mod outcome;
pub mod severity;
pub mod specialist;
pub mod volunteer;
