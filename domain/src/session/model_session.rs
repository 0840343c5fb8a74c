//! Model session state

use crate::core::model::Model;
use serde::{Deserialize, Serialize};

/// Default bound on transient-failure retries per query
pub const DEFAULT_MAX_RETRIES: u32 = 2;

/// Currently selected backend model and the transient-failure retry counter.
///
/// Owned by the caller and passed by `&mut` into the response generator,
/// which is the only component that advances or resets the counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelSession {
    model: Model,
    retry_count: u32,
    max_retries: u32,
}

impl ModelSession {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            retry_count: 0,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Replace the selected model (substitution or manual override)
    pub fn switch_model(&mut self, model: Model) {
        self.model = model;
    }

    pub fn retry_count(&self) -> u32 {
        self.retry_count
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Whether another retry is allowed
    pub fn can_retry(&self) -> bool {
        self.retry_count < self.max_retries
    }

    /// Count one retry. Saturates at `max_retries`.
    pub fn record_retry(&mut self) {
        if self.can_retry() {
            self.retry_count += 1;
        }
    }

    /// Called after any successful completion
    pub fn reset_retries(&mut self) {
        self.retry_count = 0;
    }
}
