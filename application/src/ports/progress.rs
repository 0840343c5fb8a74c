//! Progress notification port
//!
//! Defines the interface for reporting progress while a query is triaged.

use std::time::Duration;
use triage_domain::{Model, SeverityTier};

/// Callback for progress updates during triage
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain text, nothing).
pub trait TriageProgressNotifier: Send + Sync {
    /// Called when the emergency keyword filter fires
    fn on_emergency_keyword(&self, _keyword: &str) {}

    /// Called before the severity classifier runs
    fn on_classification_start(&self) {}

    /// Called once the tier is known
    fn on_classification_complete(&self, _tier: SeverityTier) {}

    /// Called before each advisory request
    fn on_advisory_start(&self, _model: &Model) {}

    /// Called when a rate-limit failure triggers a backoff wait
    fn on_rate_limited(&self, _backoff: Duration, _retry_count: u32) {}

    /// Called after a substitute model has been selected
    fn on_model_switched(&self, _from: &Model, _to: &Model) {}

    /// Called when the advisory attempt finishes
    fn on_advisory_complete(&self, _success: bool) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl TriageProgressNotifier for NoProgress {}
