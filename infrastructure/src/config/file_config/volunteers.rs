//! Volunteer channels from TOML (`[[volunteers]]` array)

use serde::{Deserialize, Serialize};
use triage_domain::{VolunteerChannel, VolunteerDirectory};

/// One `[[volunteers]]` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileVolunteerConfig {
    pub name: String,
    pub contact: String,
}

/// Directory built from the configured channels, or the built-in one when none are set
pub fn volunteer_directory(entries: &[FileVolunteerConfig]) -> VolunteerDirectory {
    if entries.is_empty() {
        return VolunteerDirectory::default();
    }
    VolunteerDirectory::new(
        entries
            .iter()
            .map(|v| VolunteerChannel::new(v.name.trim(), v.contact.trim()))
            .collect(),
    )
}
