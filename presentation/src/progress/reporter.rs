//! Progress reporting for triage execution

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;
use triage_application::TriageProgressNotifier;
use triage_domain::{Model, SeverityTier};

/// Reports progress with a spinner on stderr
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, message: String) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_message(message);
        pb.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.spinner.lock()
            && let Some(previous) = slot.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn stop(&self) {
        if let Ok(mut slot) = self.spinner.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_and_clear();
        }
    }

    fn println(&self, line: String) {
        if let Ok(slot) = self.spinner.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.println(line);
            return;
        }
        eprintln!("{}", line);
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl TriageProgressNotifier for ProgressReporter {
    fn on_classification_start(&self) {
        self.start("Assessing your condition...".to_string());
    }

    fn on_classification_complete(&self, _tier: SeverityTier) {
        self.stop();
    }

    fn on_advisory_start(&self, model: &Model) {
        self.start(format!("Consulting {}...", model));
    }

    fn on_rate_limited(&self, backoff: Duration, _retry_count: u32) {
        self.start(format!(
            "Rate limit hit. Retrying in {} seconds...",
            backoff.as_secs()
        ));
    }

    fn on_model_switched(&self, _from: &Model, to: &Model) {
        self.println(format!("{} Switched to free model: {}", "->".cyan(), to));
    }

    fn on_advisory_complete(&self, _success: bool) {
        self.stop();
    }
}
