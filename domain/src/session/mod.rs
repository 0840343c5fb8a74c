//! Backend model session domain.
//!
//! - [`model_session::ModelSession`]: selected model and retry counter
//! - [`selection::ModelSelectionPolicy`]: initial pick and substitution
//! - [`failure::FailureKind`]: transient vs fatal backend errors

pub mod failure;
pub mod model_session;
pub mod selection;
