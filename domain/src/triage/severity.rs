//! Severity tier definitions.
//!
//! A [`SeverityTier`] is the urgency bucket assigned to a query. Tiers are
//! totally ordered by urgency: `Emergency > Urgent > Moderate > Mild`.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency bucket assigned to a query.
///
/// Variant declaration order is the urgency order (least urgent first), so
/// the derived `Ord` gives `Mild < Moderate < Urgent < Emergency`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityTier {
    /// Minor issues that can be addressed with general advice
    Mild,
    /// Concerning symptoms that should be evaluated, but not urgently
    Moderate,
    /// Requires prompt medical attention, not immediately life-threatening
    Urgent,
    /// Life-threatening conditions
    Emergency,
}

impl SeverityTier {
    /// All tiers, most urgent first
    pub const ALL: [SeverityTier; 4] = [
        SeverityTier::Emergency,
        SeverityTier::Urgent,
        SeverityTier::Moderate,
        SeverityTier::Mild,
    ];

    /// Tier used when the classifier cannot produce a valid label.
    ///
    /// `Moderate` forces a specialist follow-up without raising a false alarm.
    pub const SAFE_DEFAULT: SeverityTier = SeverityTier::Moderate;

    /// Get the wire label for this tier
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityTier::Emergency => "emergency",
            SeverityTier::Urgent => "urgent",
            SeverityTier::Moderate => "moderate",
            SeverityTier::Mild => "mild",
        }
    }

    /// Parse an exact label. Only the four lowercase labels are accepted.
    pub fn from_label(label: &str) -> Option<SeverityTier> {
        match label {
            "emergency" => Some(SeverityTier::Emergency),
            "urgent" => Some(SeverityTier::Urgent),
            "moderate" => Some(SeverityTier::Moderate),
            "mild" => Some(SeverityTier::Mild),
            _ => None,
        }
    }

    /// Normalize a raw classifier reply into a tier.
    ///
    /// Surrounding whitespace is trimmed and the text is case-folded before
    /// matching. Anything else resolves to [`SeverityTier::SAFE_DEFAULT`].
    pub fn from_classifier_reply(reply: &str) -> SeverityTier {
        Self::from_label(&reply.trim().to_lowercase()).unwrap_or(Self::SAFE_DEFAULT)
    }

    /// Banner shown to the user once the tier is known
    pub fn banner(&self) -> &'static str {
        match self {
            SeverityTier::Emergency => "EMERGENCY: Immediate specialist care needed",
            SeverityTier::Urgent => "URGENT: Specialist consultation recommended",
            SeverityTier::Moderate => "MODERATE: Can consult with specialist when available",
            SeverityTier::Mild => "MILD: Volunteer can provide general advice",
        }
    }
}

impl fmt::Display for SeverityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for SeverityTier {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(&s.trim().to_lowercase())
            .ok_or_else(|| DomainError::UnknownSeverity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_order() {
        assert!(SeverityTier::Emergency > SeverityTier::Urgent);
        assert!(SeverityTier::Urgent > SeverityTier::Moderate);
        assert!(SeverityTier::Moderate > SeverityTier::Mild);

        let mut tiers = vec![
            SeverityTier::Mild,
            SeverityTier::Emergency,
            SeverityTier::Moderate,
            SeverityTier::Urgent,
        ];
        tiers.sort_by(|a, b| b.cmp(a));
        assert_eq!(tiers, SeverityTier::ALL.to_vec());
    }

    #[test]
    fn test_classifier_reply_normalization() {
        assert_eq!(SeverityTier::from_classifier_reply("mild"), SeverityTier::Mild);
        assert_eq!(
            SeverityTier::from_classifier_reply("  Urgent\n"),
            SeverityTier::Urgent
        );
        assert_eq!(
            SeverityTier::from_classifier_reply("EMERGENCY"),
            SeverityTier::Emergency
        );
    }

    #[test]
    fn test_invalid_reply_is_moderate() {
        for reply in ["", "   ", "severe", "mild.", "urgent!", "The answer is mild"] {
            assert_eq!(
                SeverityTier::from_classifier_reply(reply),
                SeverityTier::Moderate,
                "reply {:?}",
                reply
            );
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&SeverityTier::Urgent).unwrap();
        assert_eq!(json, "\"urgent\"");
        let tier: SeverityTier = serde_json::from_str("\"mild\"").unwrap();
        assert_eq!(tier, SeverityTier::Mild);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert_eq!("Moderate".parse::<SeverityTier>(), Ok(SeverityTier::Moderate));
        assert!("critical".parse::<SeverityTier>().is_err());
    }
}
