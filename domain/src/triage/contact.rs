//! Contact resolution: (specialist, tier) → contact payload

use crate::triage::severity::SeverityTier;
use crate::triage::specialist::{
    EMERGENCY_DEPARTMENT_CONTACT, GENERAL_PRACTITIONER_CONTACT, SpecialistCategory,
    SpecialistDirectory,
};
use crate::triage::volunteer::VolunteerDirectory;

/// Resolves which contact string a user should be shown.
///
/// - `Emergency` / `Urgent`: the category's contact, else the Emergency Department
/// - `Moderate`: the category's contact, else the General Practitioner
/// - `Mild`: every volunteer channel, regardless of category
#[derive(Debug, Clone, Default)]
pub struct ContactResolver {
    specialists: SpecialistDirectory,
    volunteers: VolunteerDirectory,
}

impl ContactResolver {
    pub fn new(specialists: SpecialistDirectory, volunteers: VolunteerDirectory) -> Self {
        Self {
            specialists,
            volunteers,
        }
    }

    pub fn specialists(&self) -> &SpecialistDirectory {
        &self.specialists
    }

    pub fn volunteers(&self) -> &VolunteerDirectory {
        &self.volunteers
    }

    /// Contact for the Emergency Department (used by the keyword short-circuit)
    pub fn emergency_contact(&self) -> String {
        self.specialists
            .contact(SpecialistCategory::EmergencyDepartment)
            .unwrap_or(EMERGENCY_DEPARTMENT_CONTACT)
            .to_string()
    }

    pub fn resolve(&self, specialist: SpecialistCategory, tier: SeverityTier) -> String {
        match tier {
            SeverityTier::Emergency | SeverityTier::Urgent => self
                .specialists
                .contact(specialist)
                .map(str::to_string)
                .unwrap_or_else(|| self.emergency_contact()),
            SeverityTier::Moderate => self
                .specialists
                .contact(specialist)
                .or_else(|| {
                    self.specialists
                        .contact(SpecialistCategory::GeneralPractitioner)
                })
                .unwrap_or(GENERAL_PRACTITIONER_CONTACT)
                .to_string(),
            SeverityTier::Mild => self.volunteers.combined_contact(),
        }
    }
}
