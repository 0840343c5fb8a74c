//! Output formatter trait

use triage_domain::TriageOutcome;

/// Trait for rendering a triage outcome
pub trait OutputFormatter {
    /// Format the routing decision and advisory
    fn format(&self, outcome: &TriageOutcome) -> String;
}
