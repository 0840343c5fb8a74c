//! Result of running one query through the triage pipeline

use crate::triage::severity::SeverityTier;
use crate::triage::specialist::SpecialistCategory;
use serde::{Deserialize, Serialize};

/// How the tier was decided.
///
/// Keyword-detected and classifier-detected emergencies are kept apart so
/// callers can word them differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriageRoute {
    /// The emergency keyword filter fired; no model was consulted for routing
    EmergencyKeyword,
    /// The severity classifier assigned the tier
    Classified,
}

/// Advisory text produced for the user, with its delivery status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub text: String,
    pub success: bool,
}

impl Advisory {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: true,
        }
    }

    pub fn degraded(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            success: false,
        }
    }
}

/// Routing decision and advisory for a single query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriageOutcome {
    pub route: TriageRoute,
    pub severity: SeverityTier,
    pub specialist: SpecialistCategory,
    pub contact: String,
    pub advisory: Advisory,
    /// Emergency keyword that triggered the short-circuit, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_keyword: Option<String>,
}

impl TriageOutcome {
    /// Outcome for a keyword-detected emergency
    pub fn keyword_emergency(
        keyword: impl Into<String>,
        contact: impl Into<String>,
        advisory: impl Into<String>,
    ) -> Self {
        Self {
            route: TriageRoute::EmergencyKeyword,
            severity: SeverityTier::Emergency,
            specialist: SpecialistCategory::EmergencyDepartment,
            contact: contact.into(),
            advisory: Advisory::success(advisory),
            matched_keyword: Some(keyword.into()),
        }
    }

    /// Outcome for a classifier-routed query
    pub fn classified(
        severity: SeverityTier,
        specialist: SpecialistCategory,
        contact: impl Into<String>,
        advisory: Advisory,
    ) -> Self {
        Self {
            route: TriageRoute::Classified,
            severity,
            specialist,
            contact: contact.into(),
            advisory,
            matched_keyword: None,
        }
    }

    pub fn is_emergency(&self) -> bool {
        self.severity == SeverityTier::Emergency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_emergency_fields() {
        let outcome = TriageOutcome::keyword_emergency("chest pain", "ER", "Call now");
        assert_eq!(outcome.route, TriageRoute::EmergencyKeyword);
        assert_eq!(outcome.severity, SeverityTier::Emergency);
        assert_eq!(outcome.specialist, SpecialistCategory::EmergencyDepartment);
        assert!(outcome.advisory.success);
        assert!(outcome.is_emergency());
    }

    #[test]
    fn test_json_shape() {
        let outcome = TriageOutcome::classified(
            SeverityTier::Mild,
            SpecialistCategory::Dermatologist,
            "Volunteers: 555",
            Advisory::degraded("busy"),
        );
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["route"], "classified");
        assert_eq!(json["severity"], "mild");
        assert_eq!(json["specialist"], "dermatologist");
        assert_eq!(json["advisory"]["success"], false);
        assert!(json.get("matched_keyword").is_none());
    }
}
