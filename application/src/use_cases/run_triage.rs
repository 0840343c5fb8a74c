//! Run Triage use case.
//!
//! Routes one query end to end:
//!
//! 1. Emergency keyword filter: on a hit, route straight to the Emergency
//!    Department with a fixed advisory and call no model
//! 2. [`SeverityClassifier`] assigns a tier
//! 3. Specialist resolution picks the first matching row of the ordered table
//! 4. Contact resolution picks the per-tier contact payload
//! 5. [`ResponseGenerator`] produces advisory text with retry and fallback

use crate::config::TriageParams;
use crate::ports::completion_backend::CompletionBackend;
use crate::ports::progress::{NoProgress, TriageProgressNotifier};
use crate::use_cases::classify_severity::SeverityClassifier;
use crate::use_cases::generate_advisory::ResponseGenerator;
use std::sync::Arc;
use tracing::{debug, info};
use triage_domain::util::log_preview;
use triage_domain::{
    ContactResolver, EMERGENCY_ADVISORY, EmergencyKeywordFilter, ModelInfo,
    ModelSelectionPolicy, ModelSession, Query, SeverityTier, TriageOutcome,
};

/// Use case for triaging a single query.
#[derive(Clone)]
pub struct RunTriageUseCase {
    filter: EmergencyKeywordFilter,
    classifier: SeverityClassifier,
    contacts: ContactResolver,
    generator: ResponseGenerator,
}

impl RunTriageUseCase {
    /// Create with the default keyword list, specialist table and volunteers.
    ///
    /// `available` is the generation-capable model listing used for
    /// substitution after rate limits.
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        available: Vec<ModelInfo>,
        params: TriageParams,
    ) -> Self {
        Self {
            filter: EmergencyKeywordFilter::default(),
            classifier: SeverityClassifier::new(backend.clone(), params.clone()),
            contacts: ContactResolver::default(),
            generator: ResponseGenerator::new(backend, available, params),
        }
    }

    pub fn with_contacts(mut self, contacts: ContactResolver) -> Self {
        self.contacts = contacts;
        self
    }

    pub fn with_policy(mut self, policy: ModelSelectionPolicy) -> Self {
        self.generator = self.generator.with_policy(policy);
        self
    }

    /// Models available for substitution (and for the manual override listing)
    pub fn available_models(&self) -> &[ModelInfo] {
        self.generator.available()
    }

    /// Execute with default (no-op) progress
    pub async fn execute(&self, query: &Query, session: &mut ModelSession) -> TriageOutcome {
        self.execute_with_progress(query, session, &NoProgress).await
    }

    /// Execute with progress callbacks. Backend failures never escape.
    pub async fn execute_with_progress(
        &self,
        query: &Query,
        session: &mut ModelSession,
        progress: &dyn TriageProgressNotifier,
    ) -> TriageOutcome {
        debug!("Triaging query: {}", log_preview(query.content(), 80));

        if let Some(keyword) = self.filter.first_match(query.content()) {
            info!("Emergency keyword detected: {}", keyword);
            progress.on_emergency_keyword(keyword);
            return TriageOutcome::keyword_emergency(
                keyword,
                self.contacts.emergency_contact(),
                EMERGENCY_ADVISORY,
            );
        }

        progress.on_classification_start();
        let severity: SeverityTier = self.classifier.classify(query, session.model()).await;
        progress.on_classification_complete(severity);

        let specialist = self.contacts.specialists().resolve(query.content(), severity);
        let contact = self.contacts.resolve(specialist, severity);
        info!("Routed to {} at {} severity", specialist, severity);

        let advisory = self
            .generator
            .generate(query, severity, session, progress)
            .await;

        TriageOutcome::classified(severity, specialist, contact, advisory)
    }
}
