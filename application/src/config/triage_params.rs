//! Triage parameters for use case loop control.
//!
//! [`TriageParams`] groups the static parameters that control backend calls
//! and the retry loop in the triage use cases. These are application-layer
//! concerns, not domain policy. The retry bound is carried by
//! [`ModelSession`](triage_domain::ModelSession) alongside its counter.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Backend call and retry parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageParams {
    /// Blocking wait after each rate-limit failure.
    pub backoff: Duration,
    /// Sampling temperature for the severity classifier.
    pub classifier_temperature: f32,
    /// Output token cap for the severity classifier.
    pub classifier_max_tokens: u32,
    /// Sampling temperature for the advisory response.
    pub advisory_temperature: f32,
    /// Output token cap for the advisory response.
    pub advisory_max_tokens: u32,
}

impl Default for TriageParams {
    fn default() -> Self {
        Self {
            backoff: Duration::from_secs(5),
            classifier_temperature: 0.1,
            classifier_max_tokens: 10,
            advisory_temperature: 0.2,
            advisory_max_tokens: 1024,
        }
    }
}

impl TriageParams {
    // ==================== Builder Methods ====================

    pub fn with_backoff(mut self, backoff: Duration) -> Self {
        self.backoff = backoff;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let params = TriageParams::default();
        assert_eq!(params.backoff, Duration::from_secs(5));
        assert_eq!(params.classifier_max_tokens, 10);
        assert_eq!(params.advisory_max_tokens, 1024);
    }

    #[test]
    fn test_with_backoff() {
        let params = TriageParams::default().with_backoff(Duration::ZERO);
        assert!(params.backoff.is_zero());
        assert_eq!(params.advisory_temperature, 0.2);
    }
}
