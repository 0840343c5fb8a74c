//! Gemini REST adapter
//!
//! Implements `CompletionBackend` for the Google generative-language API.

pub mod backend;
pub mod error;
pub mod protocol;

pub use backend::{DEFAULT_API_KEY_ENV, DEFAULT_BASE_URL, GeminiBackend, GeminiSettings};
pub use error::GeminiError;
