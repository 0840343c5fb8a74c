//! Prompt templates for the triage flow

use crate::triage::severity::SeverityTier;

/// Sentence the advisory model must always include
pub const CONSULT_DISCLAIMER: &str = "Consult healthcare professionals for personal medical advice.";

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// System prompt framing every advisory response
    pub fn medical_system() -> String {
        format!(
            r#"You are a medical information assistant providing general health education.

Provide: General health info, symptom explanations, medication overviews, lifestyle advice
Avoid: Diagnoses, prescriptions, emergency advice, treatment recommendations

Always include: "{}""#,
            CONSULT_DISCLAIMER
        )
    }

    /// System prompt with the assessed severity appended as context
    pub fn advisory_system(severity: SeverityTier) -> String {
        format!(
            "{}\n\nNote: This query has been assessed as {} severity.",
            Self::medical_system(),
            severity
        )
    }

    /// Closed-form classification prompt. The model must answer with one word.
    pub fn severity_classification(query: &str) -> String {
        format!(
            r#"Analyze this medical query and categorize its severity level:
"{}"

Respond ONLY with one of these exact severity levels:
- emergency: Life-threatening conditions (heart attack, stroke, severe bleeding, difficulty breathing, etc.)
- urgent: Requires prompt medical attention but not immediately life-threatening (high fever, severe pain, etc.)
- moderate: Concerning symptoms that should be evaluated but not urgent (persistent cough, mild pain, etc.)
- mild: Minor issues that can be addressed with general advice (common cold, minor cuts, etc.)

Your response should be only one word: emergency, urgent, moderate, or mild."#,
            query
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medical_system_has_disclaimer() {
        let prompt = PromptTemplate::medical_system();
        assert!(prompt.contains(CONSULT_DISCLAIMER));
        assert!(prompt.contains("Avoid: Diagnoses, prescriptions"));
    }

    #[test]
    fn test_advisory_system_embeds_severity() {
        let prompt = PromptTemplate::advisory_system(SeverityTier::Urgent);
        assert!(prompt.starts_with(&PromptTemplate::medical_system()));
        assert!(prompt.ends_with("assessed as urgent severity."));
    }

    #[test]
    fn test_classification_prompt_lists_all_labels() {
        let prompt = PromptTemplate::severity_classification("sore throat");
        assert!(prompt.contains("\"sore throat\""));
        for tier in SeverityTier::ALL {
            assert!(prompt.contains(&format!("- {}:", tier.as_str())));
        }
    }
}
