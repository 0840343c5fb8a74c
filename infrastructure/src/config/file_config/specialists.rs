//! Specialist table overrides from TOML (`[[specialists]]` array)

use serde::{Deserialize, Serialize};
use triage_domain::{DomainError, SpecialistCategory, SpecialistDirectory};

/// One `[[specialists]]` entry
///
/// ```toml
/// [[specialists]]
/// name = "dermatologist"
/// contact = "Skin Clinic: 555-0000"
///
/// [[specialists]]
/// name = "Cardiologist"
/// enabled = false
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileSpecialistConfig {
    /// Category display name or snake_case key
    pub name: String,
    /// Replacement contact; the built-in one is kept when unset
    #[serde(default)]
    pub contact: Option<String>,
    /// `false` drops the row, so its queries fall through to the tier fallback
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl FileSpecialistConfig {
    pub fn category(&self) -> Result<SpecialistCategory, DomainError> {
        SpecialistCategory::from_name(&self.name)
    }
}

/// Built-in table with the configured overrides applied in order.
/// Entries with unknown names are skipped here and reported by validation.
pub fn specialist_directory(entries: &[FileSpecialistConfig]) -> SpecialistDirectory {
    entries
        .iter()
        .fold(SpecialistDirectory::default(), |directory, entry| {
            let Ok(category) = entry.category() else {
                return directory;
            };
            if !entry.enabled {
                return directory.without(category);
            }
            match entry.contact.as_deref().map(str::trim) {
                Some(contact) if !contact.is_empty() => directory.with_contact(category, contact),
                _ => directory,
            }
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_domain::SeverityTier;

    fn entry(name: &str, contact: Option<&str>, enabled: bool) -> FileSpecialistConfig {
        FileSpecialistConfig {
            name: name.to_string(),
            contact: contact.map(str::to_string),
            enabled,
        }
    }

    #[test]
    fn test_defaults_when_unset() {
        let entry: FileSpecialistConfig = toml::from_str("name = \"Neurologist\"").unwrap();
        assert!(entry.enabled);
        assert_eq!(entry.contact, None);
        assert_eq!(entry.category(), Ok(SpecialistCategory::Neurologist));
    }

    #[test]
    fn test_contact_override() {
        let directory =
            specialist_directory(&[entry("dermatologist", Some(" Skin Clinic: 555-0000 "), true)]);
        assert_eq!(
            directory.contact(SpecialistCategory::Dermatologist),
            Some("Skin Clinic: 555-0000")
        );
        assert_eq!(
            directory.contact(SpecialistCategory::Cardiologist),
            SpecialistDirectory::default().contact(SpecialistCategory::Cardiologist)
        );
    }

    #[test]
    fn test_disabled_row_is_removed_from_routing() {
        let directory = specialist_directory(&[
            entry("general_practitioner", None, true),
            entry("Cardiologist", Some("ignored"), false),
        ]);
        assert!(directory.entry(SpecialistCategory::Cardiologist).is_none());
        assert_eq!(
            directory.resolve("heart racing", SeverityTier::Urgent),
            SpecialistCategory::GeneralPractitioner
        );
    }

    #[test]
    fn test_unknown_name_is_skipped() {
        let directory = specialist_directory(&[entry("Dentist", Some("555-TEETH"), true)]);
        assert_eq!(
            directory.entries().len(),
            SpecialistDirectory::default().entries().len()
        );
        assert!(entry("Dentist", None, true).category().is_err());
    }
}
