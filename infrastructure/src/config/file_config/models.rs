//! Model selection configuration from TOML (`[models]` section)

use super::ConfigValidationError;
use serde::{Deserialize, Serialize};
use triage_domain::{Model, ModelSelectionPolicy};

/// Model selection configuration from TOML
///
/// # Example
///
/// ```toml
/// [models]
/// override = "models/gemini-1.5-flash"     # Skip preference matching
/// preferred = ["gemini-2.0-flash", "gemini-1.5-flash"]
/// fallback = ["gemini-2.0-flash", "gemini-1.5-flash"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    /// Exact model name to use instead of the preference list
    #[serde(rename = "override")]
    pub override_model: Option<String>,
    /// Name fragments for initial selection, most wanted first
    pub preferred: Option<Vec<String>>,
    /// Low-cost name fragments for substitution after rate limits
    pub fallback: Option<Vec<String>>,
}

impl FileModelsConfig {
    pub fn model_override(&self) -> Option<Model> {
        self.override_model
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Model::new)
    }

    /// Selection policy with any configured lists replacing the defaults
    pub fn to_policy(&self) -> ModelSelectionPolicy {
        let mut policy = ModelSelectionPolicy::default();
        if let Some(preferred) = &self.preferred {
            policy = policy.with_preferred(preferred.clone());
        }
        if let Some(fallback) = &self.fallback {
            policy = policy.with_fallback(fallback.clone());
        }
        policy
    }

    pub(super) fn validate(&self, issues: &mut Vec<ConfigValidationError>) {
        if matches!(&self.override_model, Some(s) if s.trim().is_empty()) {
            issues.push(ConfigValidationError::EmptyModelName {
                field: "models.override".to_string(),
            });
        }
        for (field, list) in [("models.preferred", &self.preferred), ("models.fallback", &self.fallback)] {
            let Some(list) = list else { continue };
            if list.is_empty() {
                issues.push(ConfigValidationError::EmptyModelList {
                    field: field.to_string(),
                });
            }
            if list.iter().any(|s| s.trim().is_empty()) {
                issues.push(ConfigValidationError::EmptyModelName {
                    field: field.to_string(),
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_domain::ModelInfo;

    fn listing(names: &[&str]) -> Vec<ModelInfo> {
        names
            .iter()
            .map(|n| ModelInfo::new(*n, vec!["generateContent".to_string()]))
            .collect()
    }

    #[test]
    fn test_configured_preferences_replace_defaults() {
        let config: FileModelsConfig = toml::from_str(
            r#"
preferred = ["gemini-pro"]
fallback = ["gemini-pro"]
"#,
        )
        .unwrap();
        let policy = config.to_policy();
        let available = listing(&["models/gemini-1.5-flash", "models/gemini-pro"]);

        assert_eq!(
            policy.select_initial(&available).unwrap().as_str(),
            "models/gemini-pro"
        );
        assert_eq!(
            policy.substitute(&available, &Model::new("models/gemini-pro")),
            None
        );
    }

    #[test]
    fn test_override_is_trimmed() {
        let config = FileModelsConfig {
            override_model: Some("  models/gemini-pro ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.model_override(), Some(Model::new("models/gemini-pro")));
        assert_eq!(FileModelsConfig::default().model_override(), None);
    }

    #[test]
    fn test_empty_names_are_reported() {
        let config = FileModelsConfig {
            override_model: Some(" ".to_string()),
            preferred: Some(vec![]),
            fallback: Some(vec!["".to_string()]),
        };
        let mut issues = Vec::new();
        config.validate(&mut issues);
        assert_eq!(issues.len(), 3);
    }
}
