//! Advisory response generator with retry and model fallback.
//!
//! One request moves through `Idle → Requesting → {Success, TransientFailure,
//! FatalFailure}`:
//!
//! - **Success** returns the text and resets the session's retry counter.
//! - **TransientFailure** (rate limit or quota) waits out the backoff, then
//!   either substitutes a different low-cost model and requests again, or
//!   gives up with [`HIGH_DEMAND_MESSAGE`] once the counter is exhausted or
//!   no substitute exists.
//! - **FatalFailure** returns the raw error text immediately.
//!
//! The loop is bounded: every pass either returns or advances the retry
//! counter, which saturates at `max_retries`.

use crate::config::TriageParams;
use crate::ports::completion_backend::{CompletionBackend, GenerationRequest};
use crate::ports::progress::TriageProgressNotifier;
use std::sync::Arc;
use tracing::{debug, info, warn};
use triage_domain::{
    Advisory, FailureKind, ModelInfo, ModelSelectionPolicy, ModelSession, PromptTemplate, Query,
    SeverityTier,
};

/// Degraded reply once transient failures are exhausted
pub const HIGH_DEMAND_MESSAGE: &str = "I'm experiencing high demand. Please try again in a minute.";

/// Prefix for degraded replies caused by non-transient errors
pub const FATAL_ERROR_PREFIX: &str = "Sorry, I'm having trouble responding. Error:";

/// Use case for generating the advisory text for a query.
#[derive(Clone)]
pub struct ResponseGenerator {
    backend: Arc<dyn CompletionBackend>,
    policy: ModelSelectionPolicy,
    available: Vec<ModelInfo>,
    params: TriageParams,
}

impl ResponseGenerator {
    pub fn new(
        backend: Arc<dyn CompletionBackend>,
        available: Vec<ModelInfo>,
        params: TriageParams,
    ) -> Self {
        Self {
            backend,
            policy: ModelSelectionPolicy::default(),
            available,
            params,
        }
    }

    pub fn with_policy(mut self, policy: ModelSelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Models this generator may substitute from
    pub fn available(&self) -> &[ModelInfo] {
        &self.available
    }

    fn request(&self, query: &Query, system_prompt: &str, session: &ModelSession) -> GenerationRequest {
        GenerationRequest::new(session.model().clone(), query.content())
            .with_system_prompt(system_prompt)
            .with_temperature(self.params.advisory_temperature)
            .with_max_output_tokens(self.params.advisory_max_tokens)
    }

    /// Generate advisory text for `query` at the given severity.
    ///
    /// Backend failures never escape: they are turned into a degraded
    /// [`Advisory`] with `success == false`.
    pub async fn generate(
        &self,
        query: &Query,
        severity: SeverityTier,
        session: &mut ModelSession,
        progress: &dyn TriageProgressNotifier,
    ) -> Advisory {
        let system_prompt = PromptTemplate::advisory_system(severity);

        loop {
            progress.on_advisory_start(session.model());
            let request = self.request(query, &system_prompt, session);

            let error = match self.backend.generate(&request).await {
                Ok(text) => {
                    session.reset_retries();
                    progress.on_advisory_complete(true);
                    return Advisory::success(text);
                }
                Err(e) => e.to_string(),
            };

            if FailureKind::classify(&error) == FailureKind::Fatal {
                warn!("Advisory request failed: {}", error);
                progress.on_advisory_complete(false);
                return Advisory::degraded(format!("{} {}", FATAL_ERROR_PREFIX, error));
            }

            info!(
                "Rate limit hit on {}. Retrying in {:?}...",
                session.model(),
                self.params.backoff
            );
            progress.on_rate_limited(self.params.backoff, session.retry_count());
            if !self.params.backoff.is_zero() {
                tokio::time::sleep(self.params.backoff).await;
            }

            if !session.can_retry() {
                warn!(
                    "Giving up after {} retries: {}",
                    session.retry_count(),
                    error
                );
                progress.on_advisory_complete(false);
                return Advisory::degraded(HIGH_DEMAND_MESSAGE);
            }
            session.record_retry();

            match self.policy.substitute(&self.available, session.model()) {
                Some(next) => {
                    debug!("Switching model {} -> {}", session.model(), next);
                    progress.on_model_switched(session.model(), &next);
                    session.switch_model(next);
                }
                None => {
                    warn!("No alternate model available after rate limit");
                    progress.on_advisory_complete(false);
                    return Advisory::degraded(HIGH_DEMAND_MESSAGE);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::completion_backend::BackendError;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::{RecordingProgress, ScriptedBackend};
    use std::time::Duration;
    use triage_domain::{CONSULT_DISCLAIMER, Model};

    const MODELS: &[&str] = &[
        "models/gemini-1.5-flash",
        "models/gemini-2.5-pro",
        "models/gemini-2.0-flash",
        "models/gemini-pro",
    ];

    fn params() -> TriageParams {
        TriageParams::default().with_backoff(Duration::ZERO)
    }

    fn generator(backend: &Arc<ScriptedBackend>) -> ResponseGenerator {
        ResponseGenerator::new(backend.clone(), backend.available(), params())
    }

    fn session() -> ModelSession {
        ModelSession::new(Model::new("models/gemini-1.5-flash"))
    }

    fn query() -> Query {
        Query::new("How much water should I drink?").unwrap()
    }

    #[tokio::test]
    async fn test_success_resets_retry_counter() {
        let backend = Arc::new(ScriptedBackend::new(MODELS).reply("Drink water."));
        let mut session = session();
        session.record_retry();

        let advisory = generator(&backend)
            .generate(&query(), SeverityTier::Mild, &mut session, &NoProgress)
            .await;

        assert_eq!(advisory, Advisory::success("Drink water."));
        assert_eq!(session.retry_count(), 0);
    }

    #[tokio::test]
    async fn test_request_carries_safety_framing() {
        let backend = Arc::new(ScriptedBackend::new(MODELS).reply("ok"));
        let mut session = session();

        generator(&backend)
            .generate(&query(), SeverityTier::Urgent, &mut session, &NoProgress)
            .await;

        let request = &backend.requests()[0];
        let system = request.system_prompt.as_deref().unwrap();
        assert!(system.contains(CONSULT_DISCLAIMER));
        assert!(system.contains("assessed as urgent severity"));
        assert_eq!(request.prompt, "How much water should I drink?");
        assert_eq!(request.max_output_tokens, 1024);
    }

    #[tokio::test]
    async fn test_fatal_error_is_not_retried() {
        let backend = Arc::new(ScriptedBackend::new(MODELS).fail(BackendError::Http {
            status: 400,
            body: "API key not valid".to_string(),
        }));
        let mut session = session();

        let advisory = generator(&backend)
            .generate(&query(), SeverityTier::Moderate, &mut session, &NoProgress)
            .await;

        assert!(!advisory.success);
        assert_eq!(
            advisory.text,
            "Sorry, I'm having trouble responding. Error: HTTP 400: API key not valid"
        );
        assert_eq!(backend.requests().len(), 1);
        assert_eq!(session.model().as_str(), "models/gemini-1.5-flash");
    }

    #[tokio::test]
    async fn test_transient_then_success_switches_model() {
        let backend = Arc::new(ScriptedBackend::new(MODELS).rate_limited().reply("Recovered"));
        let mut session = session();
        let progress = RecordingProgress::default();

        let advisory = generator(&backend)
            .generate(&query(), SeverityTier::Mild, &mut session, &progress)
            .await;

        assert_eq!(advisory, Advisory::success("Recovered"));
        assert_eq!(session.model().as_str(), "models/gemini-2.0-flash");
        assert_eq!(session.retry_count(), 0);

        let requests = backend.requests();
        assert_eq!(requests[0].model.as_str(), "models/gemini-1.5-flash");
        assert_eq!(requests[1].model.as_str(), "models/gemini-2.0-flash");
        assert_eq!(
            progress.events(),
            vec![
                "rate_limited:0",
                "switch:models/gemini-2.0-flash",
                "advisory:true"
            ]
        );
    }

    #[tokio::test]
    async fn test_three_transient_failures_exhaust_retries() {
        let backend = Arc::new(
            ScriptedBackend::new(MODELS)
                .rate_limited()
                .rate_limited()
                .rate_limited()
                .reply("never reached"),
        );
        let mut session = session();
        let progress = RecordingProgress::default();

        let advisory = generator(&backend)
            .generate(&query(), SeverityTier::Moderate, &mut session, &progress)
            .await;

        assert_eq!(advisory, Advisory::degraded(HIGH_DEMAND_MESSAGE));
        assert_eq!(backend.requests().len(), 3);
        let switches = progress
            .events()
            .iter()
            .filter(|e| e.starts_with("switch:"))
            .count();
        assert_eq!(switches, 2);
        assert_eq!(session.retry_count(), 2);
    }

    #[tokio::test]
    async fn test_exhausted_counter_carries_into_next_query() {
        let backend = Arc::new(ScriptedBackend::new(MODELS).rate_limited());
        let mut session = session();
        session.record_retry();
        session.record_retry();

        let advisory = generator(&backend)
            .generate(&query(), SeverityTier::Mild, &mut session, &NoProgress)
            .await;

        assert_eq!(advisory, Advisory::degraded(HIGH_DEMAND_MESSAGE));
        assert_eq!(backend.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_no_substitute_gives_high_demand() {
        let backend = Arc::new(
            ScriptedBackend::new(&["models/gemini-1.5-flash", "models/gemini-2.5-pro"])
                .rate_limited()
                .reply("never reached"),
        );
        let mut session = session();

        let advisory = generator(&backend)
            .generate(&query(), SeverityTier::Mild, &mut session, &NoProgress)
            .await;

        assert_eq!(advisory, Advisory::degraded(HIGH_DEMAND_MESSAGE));
        assert_eq!(backend.requests().len(), 1);
        assert_eq!(session.retry_count(), 1);
    }

    #[tokio::test]
    async fn test_quota_message_without_status_is_transient() {
        let backend = Arc::new(
            ScriptedBackend::new(MODELS)
                .fail(BackendError::Other("Quota exceeded for this project".to_string()))
                .reply("ok"),
        );
        let mut session = session();

        let advisory = generator(&backend)
            .generate(&query(), SeverityTier::Mild, &mut session, &NoProgress)
            .await;

        assert!(advisory.success);
        assert_eq!(backend.requests().len(), 2);
    }

    #[tokio::test]
    async fn test_retry_bound_comes_from_session() {
        let backend = Arc::new(
            ScriptedBackend::new(MODELS)
                .rate_limited()
                .rate_limited()
                .rate_limited()
                .rate_limited()
                .reply("recovered"),
        );
        let mut session = session().with_max_retries(4);

        let advisory = generator(&backend)
            .generate(&query(), SeverityTier::Mild, &mut session, &NoProgress)
            .await;

        assert_eq!(advisory, Advisory::success("recovered"));
        assert_eq!(backend.requests().len(), 5);
        assert_eq!(session.retry_count(), 0);
    }
}
