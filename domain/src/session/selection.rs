//! Model selection policy.
//!
//! Prefers low-cost tier models, matched by substring against the names
//! returned from the backend listing.

use crate::core::error::DomainError;
use crate::core::model::{Model, ModelInfo};
use serde::{Deserialize, Serialize};

/// Initial selection preference, checked in order
pub const PREFERRED_MODELS: &[&str] = &[
    "gemini-1.0-pro",
    "gemini-pro",
    "gemini-1.5-flash",
    "gemini-1.5-flash-8b",
    "gemini-2.0-flash",
    "gemini-2.0-flash-lite",
    "gemini-1.5-flash-latest",
];

/// Candidates for substitution after a rate-limit failure
pub const FALLBACK_MODELS: &[&str] = &[
    "gemini-1.0-pro",
    "gemini-pro",
    "gemini-1.5-flash",
    "gemini-2.0-flash",
];

/// Preference lists used to pick and substitute models
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSelectionPolicy {
    pub preferred: Vec<String>,
    pub fallback: Vec<String>,
}

impl Default for ModelSelectionPolicy {
    fn default() -> Self {
        Self {
            preferred: PREFERRED_MODELS.iter().map(|s| s.to_string()).collect(),
            fallback: FALLBACK_MODELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ModelSelectionPolicy {
    pub fn with_preferred(mut self, preferred: Vec<String>) -> Self {
        self.preferred = preferred;
        self
    }

    pub fn with_fallback(mut self, fallback: Vec<String>) -> Self {
        self.fallback = fallback;
        self
    }

    /// Pick the starting model.
    ///
    /// Preference-major: for each preferred fragment in order, the first
    /// available model containing it wins. Without any preferred match the
    /// first listed model is used.
    pub fn select_initial(&self, available: &[ModelInfo]) -> Result<Model, DomainError> {
        for fragment in &self.preferred {
            if let Some(info) = available.iter().find(|m| m.name.matches(fragment)) {
                return Ok(info.name.clone());
            }
        }

        available
            .first()
            .map(|m| m.name.clone())
            .ok_or(DomainError::NoModelsAvailable)
    }

    /// Pick a different low-cost model after a transient failure.
    ///
    /// Model-major: walks the listing in order and returns the first model
    /// that matches any fallback fragment and is not `current`.
    pub fn substitute(&self, available: &[ModelInfo], current: &Model) -> Option<Model> {
        available
            .iter()
            .filter(|m| &m.name != current)
            .find(|m| self.fallback.iter().any(|f| m.name.matches(f)))
            .map(|m| m.name.clone())
    }
}
