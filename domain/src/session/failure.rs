//! Backend failure classification.
//!
//! The completion backend reports errors as opaque text. The only structure
//! relied on is whether that text carries a rate-limit or quota signal.
//! This is a best-effort heuristic: if the upstream service rewords its
//! errors, transient failures will start being treated as fatal.

use serde::{Deserialize, Serialize};

/// Words that mark an error as a rate-limit or quota failure.
///
/// Matched as case-insensitive substrings of the error text, so glued forms
/// such as `rateLimitExceeded` or `HTTP429` count too.
pub const TRANSIENT_ERROR_MARKERS: &[&str] = &["429", "quota", "rate"];

/// How a failed backend call should be handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Rate or quota exhaustion; eligible for backoff and model substitution
    Transient,
    /// Anything else; surfaced immediately
    Fatal,
}

impl FailureKind {
    /// Classify a raw backend error message
    pub fn classify(message: &str) -> FailureKind {
        let lowered = message.to_lowercase();
        let transient = TRANSIENT_ERROR_MARKERS
            .iter()
            .any(|marker| lowered.contains(marker));

        if transient {
            FailureKind::Transient
        } else {
            FailureKind::Fatal
        }
    }

    pub fn is_transient(&self) -> bool {
        matches!(self, FailureKind::Transient)
    }
}
