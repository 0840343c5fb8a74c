//! Init Session use case.
//!
//! Lists the backend's models, keeps those that support text generation,
//! and selects the starting model. A session never starts without a model.

use crate::ports::completion_backend::{BackendError, CompletionBackend};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};
use triage_domain::{DomainError, Model, ModelInfo, ModelSelectionPolicy, ModelSession};

/// Errors that abort session startup
#[derive(Error, Debug)]
pub enum InitSessionError {
    #[error("No suitable models available")]
    NoModelsAvailable,

    #[error("No suitable models available: model listing failed")]
    ListingFailed(#[source] BackendError),
}

impl From<DomainError> for InitSessionError {
    fn from(_: DomainError) -> Self {
        InitSessionError::NoModelsAvailable
    }
}

/// Input for the [`InitSessionUseCase`]
#[derive(Debug, Clone, Default)]
pub struct InitSessionInput {
    /// Explicit model to use instead of the selection policy
    pub model_override: Option<Model>,
    /// Preference lists for selection
    pub policy: ModelSelectionPolicy,
    /// Retry bound for the new session
    pub max_retries: Option<u32>,
}

impl InitSessionInput {
    pub fn with_model_override(mut self, model: Option<Model>) -> Self {
        self.model_override = model;
        self
    }

    pub fn with_policy(mut self, policy: ModelSelectionPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = Some(max_retries);
        self
    }
}

/// Output of the [`InitSessionUseCase`]
#[derive(Debug, Clone)]
pub struct InitSessionOutput {
    pub session: ModelSession,
    /// Generation-capable models, in listing order
    pub available: Vec<ModelInfo>,
}

/// Use case for starting a model session.
pub struct InitSessionUseCase {
    backend: Arc<dyn CompletionBackend>,
}

impl InitSessionUseCase {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self { backend }
    }

    /// Generation-capable models from the backend listing
    pub async fn available_models(&self) -> Result<Vec<ModelInfo>, BackendError> {
        let models = self.backend.list_models().await?;
        Ok(models
            .into_iter()
            .filter(ModelInfo::supports_generation)
            .collect())
    }

    pub async fn execute(
        &self,
        input: InitSessionInput,
    ) -> Result<InitSessionOutput, InitSessionError> {
        let available = self.available_models().await.map_err(|e| {
            warn!("Error fetching models: {}", e);
            InitSessionError::ListingFailed(e)
        })?;

        if available.is_empty() {
            return Err(InitSessionError::NoModelsAvailable);
        }

        let model = match input.model_override {
            Some(model) => {
                info!("Using configured model: {}", model);
                model
            }
            None => {
                let model = input.policy.select_initial(&available)?;
                info!("Selected model: {}", model);
                model
            }
        };

        let mut session = ModelSession::new(model);
        if let Some(max) = input.max_retries {
            session = session.with_max_retries(max);
        }

        Ok(InitSessionOutput { session, available })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::use_cases::test_support::ScriptedBackend;

    #[tokio::test]
    async fn test_selects_preferred_model() {
        let backend = Arc::new(ScriptedBackend::new(&[
            "models/gemini-2.5-pro",
            "models/gemini-2.0-flash",
        ]));
        let output = InitSessionUseCase::new(backend)
            .execute(InitSessionInput::default())
            .await
            .unwrap();

        assert_eq!(output.session.model().as_str(), "models/gemini-2.0-flash");
        assert_eq!(output.session.retry_count(), 0);
        assert_eq!(output.available.len(), 2);
    }

    #[tokio::test]
    async fn test_filters_non_generation_models() {
        let backend = Arc::new(ScriptedBackend::new(&[]).with_listing(Ok(vec![
            ModelInfo::new("models/embedding-001", vec!["embedContent".to_string()]),
            ModelInfo::new("models/gemini-exp", vec!["generateContent".to_string()]),
        ])));
        let output = InitSessionUseCase::new(backend)
            .execute(InitSessionInput::default())
            .await
            .unwrap();

        assert_eq!(output.available.len(), 1);
        assert_eq!(output.session.model().as_str(), "models/gemini-exp");
    }

    #[tokio::test]
    async fn test_empty_listing_fails() {
        let backend = Arc::new(ScriptedBackend::new(&[]));
        let result = InitSessionUseCase::new(backend)
            .execute(InitSessionInput::default())
            .await;
        assert!(matches!(result, Err(InitSessionError::NoModelsAvailable)));
    }

    #[tokio::test]
    async fn test_only_embedding_models_fails() {
        let backend = Arc::new(ScriptedBackend::new(&[]).with_listing(Ok(vec![ModelInfo::new(
            "models/embedding-001",
            vec!["embedContent".to_string()],
        )])));
        let result = InitSessionUseCase::new(backend)
            .execute(InitSessionInput::default())
            .await;
        assert!(matches!(result, Err(InitSessionError::NoModelsAvailable)));
    }

    #[tokio::test]
    async fn test_listing_error_fails() {
        let backend = Arc::new(ScriptedBackend::new(&[]).with_listing(Err(
            BackendError::MissingApiKey("GEMINI_API_KEY".to_string()),
        )));
        let result = InitSessionUseCase::new(backend)
            .execute(InitSessionInput::default())
            .await;
        let err = result.unwrap_err();
        assert!(matches!(err, InitSessionError::ListingFailed(_)));
        let cause = std::error::Error::source(&err).unwrap();
        assert!(cause.to_string().contains("GEMINI_API_KEY"));
    }

    #[tokio::test]
    async fn test_override_and_retry_bound() {
        let backend = Arc::new(ScriptedBackend::new(&["models/gemini-pro"]));
        let input = InitSessionInput::default()
            .with_model_override(Some(Model::new("models/custom-tuned")))
            .with_max_retries(5);
        let output = InitSessionUseCase::new(backend).execute(input).await.unwrap();

        assert_eq!(output.session.model().as_str(), "models/custom-tuned");
        assert_eq!(output.session.max_retries(), 5);
    }
}
