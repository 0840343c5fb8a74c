//! Application-level configuration.
//!
//! - [`TriageParams`]: backend sampling settings and retry loop control

pub mod triage_params;

pub use triage_params::TriageParams;
