//! Specialist categories and the condition-to-specialist table.
//!
//! The directory is an explicit ordered array. Resolution scans it front to
//! back and the first category with a matching condition keyword wins, so
//! the order below is the tie-break rule:
//!
//! | # | Category | Conditions |
//! |---|----------|------------|
//! | 1 | Cardiologist | heart, chest pain, palpitations, blood pressure |
//! | 2 | Neurologist | headache, migraine, seizure, stroke, numbness |
//! | 3 | Gastroenterologist | stomach, abdominal, digestive, vomiting, diarrhea |
//! | 4 | Dermatologist | rash, skin, acne, eczema, psoriasis |
//! | 5 | Orthopedist | bone, fracture, joint, sprain, arthritis |
//! | 6 | Pediatrician | child, baby, infant, pediatric, kids |
//! | 7 | Gynecologist | women, gynecological, menstrual, pregnancy |
//! | 8 | General Practitioner | general, fever, cold, flu, checkup |
//! | 9 | Internist | internal, adult medicine, chronic conditions |
//! | 10 | Psychiatrist | mental, depression, anxiety, suicidal, emotional |
//! | 11 | Emergency Department | (never scanned) |

use crate::core::error::DomainError;
use crate::triage::severity::SeverityTier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Contact used for the Emergency Department and as the critical-tier fallback
pub const EMERGENCY_DEPARTMENT_CONTACT: &str =
    "EMERGENCY: 911 or your local emergency number\nHospital ER: 555-0001";

/// Contact used for General Practitioner and as the moderate-tier fallback
pub const GENERAL_PRACTITIONER_CONTACT: &str = "Primary Care: 555-8001\nDr. Anderson: 555-8002";

/// A named medical specialty used for routing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialistCategory {
    Cardiologist,
    Neurologist,
    Gastroenterologist,
    Dermatologist,
    Orthopedist,
    Pediatrician,
    Gynecologist,
    GeneralPractitioner,
    Internist,
    Psychiatrist,
    EmergencyDepartment,
}

impl SpecialistCategory {
    /// All categories in directory order
    pub const ALL: [SpecialistCategory; 11] = [
        SpecialistCategory::Cardiologist,
        SpecialistCategory::Neurologist,
        SpecialistCategory::Gastroenterologist,
        SpecialistCategory::Dermatologist,
        SpecialistCategory::Orthopedist,
        SpecialistCategory::Pediatrician,
        SpecialistCategory::Gynecologist,
        SpecialistCategory::GeneralPractitioner,
        SpecialistCategory::Internist,
        SpecialistCategory::Psychiatrist,
        SpecialistCategory::EmergencyDepartment,
    ];

    /// Human-readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            SpecialistCategory::Cardiologist => "Cardiologist",
            SpecialistCategory::Neurologist => "Neurologist",
            SpecialistCategory::Gastroenterologist => "Gastroenterologist",
            SpecialistCategory::Dermatologist => "Dermatologist",
            SpecialistCategory::Orthopedist => "Orthopedist",
            SpecialistCategory::Pediatrician => "Pediatrician",
            SpecialistCategory::Gynecologist => "Gynecologist",
            SpecialistCategory::GeneralPractitioner => "General Practitioner",
            SpecialistCategory::Internist => "Internist",
            SpecialistCategory::Psychiatrist => "Psychiatrist",
            SpecialistCategory::EmergencyDepartment => "Emergency Department",
        }
    }

    /// Lookup by display name or snake_case key, ignoring case
    pub fn from_name(name: &str) -> Result<Self, DomainError> {
        let wanted = name.trim().to_lowercase().replace(['_', '-'], " ");
        Self::ALL
            .into_iter()
            .find(|c| c.display_name().to_lowercase() == wanted)
            .ok_or_else(|| DomainError::UnknownSpecialist(name.to_string()))
    }
}

impl fmt::Display for SpecialistCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One row of the specialist table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialistEntry {
    pub category: SpecialistCategory,
    pub contact: String,
    pub conditions: Vec<String>,
}

impl SpecialistEntry {
    pub fn new(category: SpecialistCategory, contact: &str, conditions: &[&str]) -> Self {
        Self {
            category,
            contact: contact.to_string(),
            conditions: conditions.iter().map(|c| c.to_lowercase()).collect(),
        }
    }

    /// Whether any condition keyword occurs in already-lowercased text
    fn matches(&self, lowered: &str) -> bool {
        self.conditions.iter().any(|c| lowered.contains(c.as_str()))
    }
}

/// Ordered condition-to-specialist table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecialistDirectory {
    entries: Vec<SpecialistEntry>,
}

impl Default for SpecialistDirectory {
    fn default() -> Self {
        use SpecialistCategory::*;
        Self::new(vec![
            SpecialistEntry::new(
                Cardiologist,
                "Cardiology Department: 555-1001\nDr. Smith: 555-1002",
                &["heart", "chest pain", "palpitations", "blood pressure"],
            ),
            SpecialistEntry::new(
                Neurologist,
                "Neurology Department: 555-2001\nDr. Johnson: 555-2002",
                &["headache", "migraine", "seizure", "stroke", "numbness"],
            ),
            SpecialistEntry::new(
                Gastroenterologist,
                "Gastroenterology Department: 555-3001\nDr. Williams: 555-3002",
                &["stomach", "abdominal", "digestive", "vomiting", "diarrhea"],
            ),
            SpecialistEntry::new(
                Dermatologist,
                "Dermatology Department: 555-4001\nDr. Brown: 555-4002",
                &["rash", "skin", "acne", "eczema", "psoriasis"],
            ),
            SpecialistEntry::new(
                Orthopedist,
                "Orthopedics Department: 555-5001\nDr. Davis: 555-5002",
                &["bone", "fracture", "joint", "sprain", "arthritis"],
            ),
            SpecialistEntry::new(
                Pediatrician,
                "Pediatrics Department: 555-6001\nDr. Miller: 555-6002",
                &["child", "baby", "infant", "pediatric", "kids"],
            ),
            SpecialistEntry::new(
                Gynecologist,
                "Gynecology Department: 555-7001\nDr. Wilson: 555-7002",
                &["women", "gynecological", "menstrual", "pregnancy"],
            ),
            SpecialistEntry::new(
                GeneralPractitioner,
                GENERAL_PRACTITIONER_CONTACT,
                &["general", "fever", "cold", "flu", "checkup"],
            ),
            SpecialistEntry::new(
                Internist,
                "Internal Medicine: 555-9001\nDr. Taylor: 555-9002",
                &["internal", "adult medicine", "chronic conditions"],
            ),
            SpecialistEntry::new(
                Psychiatrist,
                "Psychiatry Department: 555-0101\nDr. Martin: 555-0102",
                &["mental", "depression", "anxiety", "suicidal", "emotional"],
            ),
            SpecialistEntry::new(
                EmergencyDepartment,
                EMERGENCY_DEPARTMENT_CONTACT,
                &["emergency", "life-threatening", "critical", "urgent"],
            ),
        ])
    }
}

impl SpecialistDirectory {
    /// Build a directory from entries. Entry order is the scan order.
    pub fn new(entries: Vec<SpecialistEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SpecialistEntry] {
        &self.entries
    }

    pub fn entry(&self, category: SpecialistCategory) -> Option<&SpecialistEntry> {
        self.entries.iter().find(|e| e.category == category)
    }

    pub fn contact(&self, category: SpecialistCategory) -> Option<&str> {
        self.entry(category).map(|e| e.contact.as_str())
    }

    /// Replace the contact string of an existing category
    pub fn with_contact(mut self, category: SpecialistCategory, contact: impl Into<String>) -> Self {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.category == category) {
            entry.contact = contact.into();
        }
        self
    }

    /// Drop a category from the table
    pub fn without(mut self, category: SpecialistCategory) -> Self {
        self.entries.retain(|e| e.category != category);
        self
    }

    /// Map query text and tier to exactly one specialist category.
    ///
    /// `Emergency` always resolves to the Emergency Department. Otherwise the
    /// first non-emergency entry with a matching condition wins, falling back
    /// to General Practitioner.
    pub fn resolve(&self, text: &str, tier: SeverityTier) -> SpecialistCategory {
        if tier == SeverityTier::Emergency {
            return SpecialistCategory::EmergencyDepartment;
        }

        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.category != SpecialistCategory::EmergencyDepartment)
            .find(|e| e.matches(&lowered))
            .map(|e| e.category)
            .unwrap_or(SpecialistCategory::GeneralPractitioner)
    }
}
