//! Gemini completion backend
//!
//! Implements [`CompletionBackend`] over the Gemini REST API with `reqwest`.

use super::error::{GeminiError, Result};
use super::protocol::{
    GenerateContentRequest, GenerateContentResponse, ListModelsResponse, error_message,
};
use async_trait::async_trait;
use reqwest::{Client, Response, header};
use std::time::Duration;
use tracing::{debug, info};
use triage_application::{BackendError, CompletionBackend, GenerationRequest};
use triage_domain::{Model, ModelInfo};

/// Public Gemini endpoint
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Environment variable holding the API key by default
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Connection settings for [`GeminiBackend`]
#[derive(Debug, Clone, PartialEq)]
pub struct GeminiSettings {
    pub base_url: String,
    pub api_key_env: String,
    pub timeout: Duration,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

/// Gemini REST client
pub struct GeminiBackend {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeminiBackend {
    /// Create a backend with an explicit API key
    pub fn new(base_url: &str, api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    /// Create a backend reading the API key from `settings.api_key_env`
    pub fn from_env(settings: &GeminiSettings) -> Result<Self> {
        let api_key = std::env::var(&settings.api_key_env)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| GeminiError::MissingApiKey(settings.api_key_env.clone()))?;

        info!("Gemini backend configured for {}", settings.base_url);
        Self::new(&settings.base_url, api_key, settings.timeout)
    }

    fn models_url(&self) -> String {
        format!("{}/v1beta/models", self.base_url)
    }

    fn generate_url(&self, model: &Model) -> String {
        let name = model.as_str();
        if name.starts_with("models/") {
            format!("{}/v1beta/{}:generateContent", self.base_url, name)
        } else {
            format!("{}/v1beta/models/{}:generateContent", self.base_url, name)
        }
    }

    /// Turn a non-2xx response into [`GeminiError::Http`]
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let raw = response.text().await.unwrap_or_default();
        Err(GeminiError::Http {
            status: status.as_u16(),
            message: error_message(&raw),
        })
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        let raw = response.text().await?;
        serde_json::from_str(&raw).map_err(|e| GeminiError::ParseError {
            error: e.to_string(),
            raw,
        })
    }

    async fn list_page(&self, page_token: Option<&str>) -> Result<ListModelsResponse> {
        let mut request = self
            .client
            .get(self.models_url())
            .header(API_KEY_HEADER, &self.api_key);
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }

        let response = Self::check(request.send().await?).await?;
        Self::parse(response).await
    }

    /// Every model in the listing, following page tokens
    pub async fn fetch_models(&self) -> Result<Vec<ModelInfo>> {
        let mut models = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self.list_page(page_token.as_deref()).await?;
            models.extend(page.models.into_iter().map(ModelInfo::from));

            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        debug!("Listed {} models", models.len());
        Ok(models)
    }

    /// Run one `generateContent` call and return the reply text
    pub async fn generate_content(&self, request: &GenerationRequest) -> Result<String> {
        let body = GenerateContentRequest::from(request);
        debug!(
            model = %request.model,
            max_output_tokens = request.max_output_tokens,
            "generateContent"
        );

        let response = self
            .client
            .post(self.generate_url(&request.model))
            .header(API_KEY_HEADER, &self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;
        let response = Self::check(response).await?;
        let parsed: GenerateContentResponse = Self::parse(response).await?;

        if let Some(text) = parsed.text() {
            return Ok(text);
        }
        match parsed.block_reason() {
            Some(reason) => Err(GeminiError::Blocked(reason.to_string())),
            None => Err(GeminiError::EmptyResponse),
        }
    }
}

#[async_trait]
impl CompletionBackend for GeminiBackend {
    async fn list_models(&self) -> std::result::Result<Vec<ModelInfo>, BackendError> {
        self.fetch_models().await.map_err(BackendError::from)
    }

    async fn generate(&self, request: &GenerationRequest) -> std::result::Result<String, BackendError> {
        self.generate_content(request)
            .await
            .map_err(BackendError::from)
    }
}
