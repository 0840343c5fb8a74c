//! Error types for the Gemini adapter

use thiserror::Error;
use triage_application::BackendError;

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;

/// Errors that can occur when talking to the Gemini REST API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Missing API key: set {0}")]
    MissingApiKey(String),

    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse response: {error}\nRaw response: {raw}")]
    ParseError { error: String, raw: String },

    #[error("Response blocked: {0}")]
    Blocked(String),

    #[error("Response contained no text")]
    EmptyResponse,
}

impl From<GeminiError> for BackendError {
    fn from(err: GeminiError) -> Self {
        match err {
            GeminiError::MissingApiKey(var) => BackendError::MissingApiKey(var),
            GeminiError::Http { status, message } => BackendError::Http {
                status,
                body: message,
            },
            GeminiError::Request(e) if e.is_connect() || e.is_timeout() => {
                BackendError::ConnectionError(e.without_url().to_string())
            }
            GeminiError::Request(e) => BackendError::Other(e.without_url().to_string()),
            e @ GeminiError::ParseError { .. } => BackendError::InvalidResponse(e.to_string()),
            e @ GeminiError::Blocked(_) => BackendError::InvalidResponse(e.to_string()),
            GeminiError::EmptyResponse => BackendError::EmptyResponse,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_keeps_status_in_message() {
        let err: BackendError = GeminiError::Http {
            status: 429,
            message: "Resource has been exhausted (e.g. check quota).".to_string(),
        }
        .into();
        assert_eq!(
            err,
            BackendError::Http {
                status: 429,
                body: "Resource has been exhausted (e.g. check quota).".to_string(),
            }
        );
        assert!(err.to_string().starts_with("HTTP 429:"));
    }

    #[test]
    fn test_missing_key_names_variable() {
        let err: BackendError = GeminiError::MissingApiKey("GEMINI_API_KEY".to_string()).into();
        assert_eq!(err.to_string(), "Missing API key: set GEMINI_API_KEY");
    }
}
