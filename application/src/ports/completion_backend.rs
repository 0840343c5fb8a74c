//! Completion backend port
//!
//! Defines the interface for communicating with the generative-language
//! service.

use async_trait::async_trait;
use triage_domain::{Model, ModelInfo};
use thiserror::Error;

/// Errors that can occur during backend operations.
///
/// Callers treat the rendered message as opaque text; the only structure
/// relied on is [`FailureKind::classify`](triage_domain::FailureKind::classify).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Empty response from model")]
    EmptyResponse,

    #[error("Missing API key: set {0}")]
    MissingApiKey(String),

    #[error("Other error: {0}")]
    Other(String),
}

/// A single text-completion request
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: Model,
    pub system_prompt: Option<String>,
    pub prompt: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl GenerationRequest {
    pub fn new(model: Model, prompt: impl Into<String>) -> Self {
        Self {
            model,
            system_prompt: None,
            prompt: prompt.into(),
            temperature: 1.0,
            max_output_tokens: 1024,
        }
    }

    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }
}

/// Backend for text completion
///
/// This port defines how the application layer talks to the language model
/// service. Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// List the models the backend exposes
    async fn list_models(&self) -> Result<Vec<ModelInfo>, BackendError>;

    /// Run a single completion and return the generated text
    async fn generate(&self, request: &GenerationRequest) -> Result<String, BackendError>;
}
