//! Model value objects representing backend language models

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generation method a model must support to be usable for triage
pub const GENERATE_CONTENT_METHOD: &str = "generateContent";

/// Name of a backend model (Value Object)
///
/// Backend names are opaque strings such as `models/gemini-1.5-flash`.
/// Matching against preference lists is done by substring, so the
/// `models/` prefix does not need to be stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Model(String);

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether this model's name contains the given fragment
    pub fn matches(&self, fragment: &str) -> bool {
        self.0.contains(fragment)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Model(s.to_string()))
    }
}

impl From<&str> for Model {
    fn from(s: &str) -> Self {
        Model(s.to_string())
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Model(s))
    }
}

/// A model entry returned by the backend listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub name: Model,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub supported_methods: Vec<String>,
}

impl ModelInfo {
    pub fn new(name: impl Into<String>, supported_methods: Vec<String>) -> Self {
        Self {
            name: Model::new(name),
            description: String::new(),
            supported_methods,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Whether the model can be used for text completion
    pub fn supports_generation(&self) -> bool {
        self.supported_methods
            .iter()
            .any(|m| m == GENERATE_CONTENT_METHOD)
    }
}
