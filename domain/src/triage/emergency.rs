//! Emergency keyword filter.
//!
//! A cheap substring test that runs before any model call. A hit bypasses
//! severity classification and specialist resolution entirely.

/// Curated emergency phrases, matched case-insensitively as substrings.
pub const EMERGENCY_KEYWORDS: &[&str] = &[
    "emergency",
    "911",
    "112",
    "999",
    "urgent",
    "dying",
    "heart attack",
    "stroke",
    "chest pain",
    "bleeding heavily",
    "can't breathe",
    "difficulty breathing",
    "choking",
    "severe pain",
    "unconscious",
    "passed out",
    "fainted",
    "seizure",
    "convulsion",
    "suicidal",
    "homicidal",
    "severe burn",
    "broken bone",
    "compound fracture",
    "heavy bleeding",
    "blood loss",
    "poison",
    "overdose",
    "allergic reaction",
    "anaphylaxis",
    "swelling tongue",
    "swelling throat",
    "paralysis",
    "numbness",
    "sudden weakness",
    "vision loss",
    "sudden blindness",
    "severe headache",
    "worst headache",
    "electric shock",
    "drowning",
    "smoke inhalation",
    "carbon monoxide",
    "stab wound",
    "gunshot",
    "head injury",
    "concussion",
    "loss of consciousness",
    "violent trauma",
    "crush injury",
    "amputation",
    "severed limb",
    "sudden confusion",
    "disorientation",
    "slurred speech",
    "facial drooping",
    "arm weakness",
    "speech difficulty",
    "chest pressure",
    "jaw pain",
    "arm pain",
    "shortness of breath",
    "suffocating",
    "blue lips",
    "blue skin",
    "cyanosis",
    "severe abdominal pain",
    "rigid abdomen",
    "vomiting blood",
    "blood in stool",
    "black stool",
    "projectile vomiting",
    "high fever with rash",
    "meningitis",
    "neck stiffness",
    "light sensitivity",
    "severe dehydration",
    "not urinating",
    "sunken eyes",
    "rapid heartbeat",
    "palpitations",
    "irregular heartbeat",
    "cardiac arrest",
    "no pulse",
    "not breathing",
    "self harm",
    "cutting",
    "attempted suicide",
];

/// Advisory shown when the keyword filter fires.
pub const EMERGENCY_ADVISORY: &str = "EMERGENCY DETECTED: Please call your local emergency number immediately! \
You should go to the Emergency Department right away.";

/// Static set-membership test over emergency phrases
#[derive(Debug, Clone)]
pub struct EmergencyKeywordFilter {
    keywords: Vec<String>,
}

impl Default for EmergencyKeywordFilter {
    fn default() -> Self {
        Self::new(EMERGENCY_KEYWORDS.iter().copied())
    }
}

impl EmergencyKeywordFilter {
    /// Build a filter from a custom keyword list. Keywords are lowercased.
    pub fn new<'a>(keywords: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            keywords: keywords.into_iter().map(str::to_lowercase).collect(),
        }
    }

    /// First keyword that occurs in `text`, if any
    pub fn first_match(&self, text: &str) -> Option<&str> {
        let lowered = text.to_lowercase();
        self.keywords
            .iter()
            .find(|k| lowered.contains(k.as_str()))
            .map(String::as_str)
    }

    /// Whether `text` contains any emergency keyword
    pub fn is_emergency(&self, text: &str) -> bool {
        self.first_match(text).is_some()
    }
}
