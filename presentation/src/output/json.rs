//! Machine-readable output

use crate::output::formatter::OutputFormatter;
use triage_domain::TriageOutcome;

/// Formats outcomes as pretty-printed JSON
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, outcome: &TriageOutcome) -> String {
        serde_json::to_string_pretty(outcome)
            .unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}
