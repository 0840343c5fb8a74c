//! Console output formatter for triage outcomes

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use triage_domain::{Model, ModelInfo, SeverityTier, TriageOutcome, TriageRoute};

/// Formats triage outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Force colored output on or off for the whole process
    pub fn set_color(enabled: bool) {
        colored::control::set_override(enabled);
    }

    /// Format the routing decision followed by the advisory
    pub fn format_outcome(outcome: &TriageOutcome) -> String {
        let mut output = String::new();

        match outcome.route {
            TriageRoute::EmergencyKeyword => {
                output.push_str(&format!("{}\n", outcome.advisory.text.red().bold()));
                output.push_str(&Self::contact_block(&outcome.contact));
                return output;
            }
            TriageRoute::Classified => {}
        }

        output.push_str(&format!("{}\n", Self::tier_colored(outcome.severity, outcome.severity.banner())));

        let instruction = match outcome.severity {
            SeverityTier::Emergency => {
                "Please go to the Emergency Department or call emergency services immediately!"
                    .to_string()
            }
            SeverityTier::Urgent => format!(
                "Please contact a {} as soon as possible:",
                outcome.specialist
            ),
            SeverityTier::Moderate => format!(
                "Consider scheduling an appointment with a {}:",
                outcome.specialist
            ),
            SeverityTier::Mild => "A volunteer can help with general advice:".to_string(),
        };
        output.push_str(&format!("{}\n", instruction.bold()));
        output.push_str(&Self::contact_block(&outcome.contact));
        output.push('\n');

        if outcome.advisory.success {
            output.push_str(&format!(
                "{}\n{}\n",
                "Medical Information:".cyan().bold(),
                outcome.advisory.text
            ));
        } else {
            output.push_str(&format!("{}\n", outcome.advisory.text.red()));
        }

        output
    }

    /// Model listing with the current model marked
    pub fn format_models(available: &[ModelInfo], current: &Model) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n", "Available Models:".cyan().bold()));
        output.push_str(&format!("{}\n", "-".repeat(50)));

        for info in available {
            let marker = if &info.name == current { "->" } else { "  " };
            let line = format!("{} {}", marker, info.name);
            if &info.name == current {
                output.push_str(&format!("{}\n", line.green().bold()));
            } else {
                output.push_str(&format!("{}\n", line));
            }
            if !info.description.is_empty() {
                output.push_str(&format!("     {}\n", info.description.dimmed()));
            }
        }
        output
    }

    /// Create a header
    pub fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{}\n{}", line, title.bold(), line)
    }

    fn contact_block(contact: &str) -> String {
        contact
            .lines()
            .map(|line| format!("   {}\n", line))
            .collect()
    }

    fn tier_colored(tier: SeverityTier, text: &str) -> ColoredString {
        match tier {
            SeverityTier::Emergency => text.red().bold(),
            SeverityTier::Urgent => text.yellow().bold(),
            SeverityTier::Moderate => text.blue().bold(),
            SeverityTier::Mild => text.green().bold(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &TriageOutcome) -> String {
        Self::format_outcome(outcome)
    }
}
