//! Severity classifier.
//!
//! Asks the backend for exactly one of the four tier labels with a short,
//! near-deterministic generation. Backend failures and unusable replies
//! collapse to [`SeverityTier::SAFE_DEFAULT`] and are never surfaced.

use crate::config::TriageParams;
use crate::ports::completion_backend::{CompletionBackend, GenerationRequest};
use std::sync::Arc;
use tracing::{debug, warn};
use triage_domain::{Model, PromptTemplate, Query, SeverityTier};

/// Use case for classifying the severity of a query.
#[derive(Clone)]
pub struct SeverityClassifier {
    backend: Arc<dyn CompletionBackend>,
    params: TriageParams,
}

impl SeverityClassifier {
    pub fn new(backend: Arc<dyn CompletionBackend>, params: TriageParams) -> Self {
        Self { backend, params }
    }

    /// Build the closed-form classification request for `query`
    pub fn request(&self, query: &Query, model: &Model) -> GenerationRequest {
        GenerationRequest::new(
            model.clone(),
            PromptTemplate::severity_classification(query.content()),
        )
        .with_temperature(self.params.classifier_temperature)
        .with_max_output_tokens(self.params.classifier_max_tokens)
    }

    /// Classify `query` using `model`. Never fails.
    pub async fn classify(&self, query: &Query, model: &Model) -> SeverityTier {
        let request = self.request(query, model);

        match self.backend.generate(&request).await {
            Ok(reply) => {
                let tier = SeverityTier::from_classifier_reply(&reply);
                debug!("Classifier replied {:?}, resolved to {}", reply, tier);
                tier
            }
            Err(e) => {
                warn!("Error assessing severity: {}", e);
                SeverityTier::SAFE_DEFAULT
            }
        }
    }
}
