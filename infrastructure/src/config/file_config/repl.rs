//! REPL configuration from TOML (`[repl]` section)

use serde::{Deserialize, Serialize};

/// Raw REPL configuration from TOML
///
/// There is no history file setting; queries are never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileReplConfig {
    /// Show the spinner while classifying and waiting out rate limits
    pub show_progress: bool,
}

impl Default for FileReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_progress_toggle() {
        let config: FileReplConfig = toml::from_str("show_progress = false").unwrap();
        assert!(!config.show_progress);
        assert!(FileReplConfig::default().show_progress);
    }
}
