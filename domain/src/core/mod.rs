//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`]: name of a backend language model
//! - [`model::ModelInfo`]: a model entry from the backend listing
//! - [`query::Query`]: a validated free-text user submission
//! - [`error::DomainError`]: domain-level errors

pub mod error;
pub mod model;
pub mod query;
