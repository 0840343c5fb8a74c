//! Volunteer channels for mild-tier routing

use serde::{Deserialize, Serialize};

/// Named non-specialist contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolunteerChannel {
    pub name: String,
    pub contact: String,
}

impl VolunteerChannel {
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contact: contact.into(),
        }
    }
}

/// Ordered set of volunteer channels. Every channel is surfaced together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolunteerDirectory {
    channels: Vec<VolunteerChannel>,
}

impl Default for VolunteerDirectory {
    fn default() -> Self {
        Self::new(vec![
            VolunteerChannel::new(
                "General Health Volunteers",
                "Health Helpline: 555-HELP\nVolunteer Coordinator: 555-VOLUNTEER",
            ),
            VolunteerChannel::new(
                "Mental Health Support",
                "Crisis Text Line: Text HOME to 741741\nMental Health Volunteers: 555-MHSUPPORT",
            ),
        ])
    }
}

impl VolunteerDirectory {
    pub fn new(channels: Vec<VolunteerChannel>) -> Self {
        Self { channels }
    }

    pub fn channels(&self) -> &[VolunteerChannel] {
        &self.channels
    }

    /// All channels as `"<name>: <contact>"`, one per line, in order
    pub fn combined_contact(&self) -> String {
        self.channels
            .iter()
            .map(|c| format!("{}: {}", c.name, c.contact))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
