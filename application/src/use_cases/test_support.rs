//! Scripted test doubles shared by the use case tests.

use crate::ports::completion_backend::{BackendError, CompletionBackend, GenerationRequest};
use crate::ports::progress::TriageProgressNotifier;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use triage_domain::{Model, ModelInfo, SeverityTier};

/// Backend that replays a fixed script of replies and records every request.
pub(crate) struct ScriptedBackend {
    models: Result<Vec<ModelInfo>, BackendError>,
    replies: Mutex<VecDeque<Result<String, BackendError>>>,
    requests: Mutex<Vec<GenerationRequest>>,
}

impl ScriptedBackend {
    pub(crate) fn new(model_names: &[&str]) -> Self {
        Self {
            models: Ok(model_names
                .iter()
                .map(|n| ModelInfo::new(*n, vec!["generateContent".to_string()]))
                .collect()),
            replies: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn with_listing(mut self, models: Result<Vec<ModelInfo>, BackendError>) -> Self {
        self.models = models;
        self
    }

    pub(crate) fn reply(self, text: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .push_back(Ok(text.to_string()));
        self
    }

    pub(crate) fn fail(self, error: BackendError) -> Self {
        self.replies.lock().unwrap().push_back(Err(error));
        self
    }

    pub(crate) fn rate_limited(self) -> Self {
        self.fail(BackendError::Http {
            status: 429,
            body: "Resource has been exhausted (e.g. check quota).".to_string(),
        })
    }

    pub(crate) fn requests(&self) -> Vec<GenerationRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn available(&self) -> Vec<ModelInfo> {
        self.models.clone().unwrap_or_default()
    }
}

#[async_trait]
impl CompletionBackend for ScriptedBackend {
    async fn list_models(&self) -> Result<Vec<ModelInfo>, BackendError> {
        self.models.clone()
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<String, BackendError> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(BackendError::Other("script exhausted".to_string())))
    }
}

/// Progress notifier that records the events it receives.
#[derive(Default)]
pub(crate) struct RecordingProgress {
    pub(crate) events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub(crate) fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }
}

impl TriageProgressNotifier for RecordingProgress {
    fn on_emergency_keyword(&self, keyword: &str) {
        self.push(format!("keyword:{}", keyword));
    }

    fn on_classification_start(&self) {
        self.push("classify".to_string());
    }

    fn on_classification_complete(&self, tier: SeverityTier) {
        self.push(format!("tier:{}", tier));
    }

    fn on_rate_limited(&self, _backoff: Duration, retry_count: u32) {
        self.push(format!("rate_limited:{}", retry_count));
    }

    fn on_model_switched(&self, _from: &Model, to: &Model) {
        self.push(format!("switch:{}", to));
    }

    fn on_advisory_complete(&self, success: bool) {
        self.push(format!("advisory:{}", success));
    }
}
