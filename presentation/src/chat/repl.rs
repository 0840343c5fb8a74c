//! REPL (Read-Eval-Print Loop) for interactive triage

use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::ProgressReporter;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use tracing::{debug, info};
use triage_application::{NoProgress, RunTriageUseCase};
use triage_domain::{Model, ModelSession, Query};

/// Control commands recognised at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Exit,
    /// `model` lists models and asks for a name; `/model <name>` switches directly
    SwitchModel(Option<String>),
    Help,
}

impl ReplCommand {
    /// Parse a trimmed input line; anything else is a query
    pub fn parse(line: &str) -> Option<Self> {
        if let Some(rest) = line.strip_prefix("/model ") {
            let name = rest.trim();
            if !name.is_empty() {
                return Some(ReplCommand::SwitchModel(Some(name.to_string())));
            }
        }

        match line.to_lowercase().as_str() {
            "exit" | "quit" | "/exit" | "/quit" | "/q" => Some(ReplCommand::Exit),
            "model" | "/model" | "/models" => Some(ReplCommand::SwitchModel(None)),
            "help" | "/help" | "/h" | "/?" => Some(ReplCommand::Help),
            _ => None,
        }
    }
}

/// What the read loop does after one line has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineAction {
    /// A control command ran
    Command,
    /// A query was triaged and printed
    Query,
    Exit,
}

impl LineAction {
    /// Only control commands enter the in-memory recall history.
    /// Query text is dropped once its outcome is printed.
    pub fn records_history(&self) -> bool {
        matches!(self, LineAction::Command)
    }
}

/// Interactive triage REPL
pub struct TriageRepl {
    use_case: RunTriageUseCase,
    session: ModelSession,
    config: ReplConfig,
}

impl TriageRepl {
    pub fn new(use_case: RunTriageUseCase, session: ModelSession) -> Self {
        Self {
            use_case,
            session,
            config: ReplConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    pub fn session(&self) -> &ModelSession {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        self.print_welcome();

        loop {
            let readline = rl.readline("You: ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    // Skip empty lines
                    if line.is_empty() {
                        continue;
                    }

                    let action = self
                        .handle_line(line, &mut |prompt| rl.readline(prompt).ok())
                        .await;
                    if action.records_history() {
                        let _ = rl.add_history_entry(line);
                    }
                    if action == LineAction::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("\nGoodbye!");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    println!("Thank you! Stay healthy!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        Ok(())
    }

    /// Handle one non-empty input line.
    ///
    /// `ask` reads a follow-up answer (the model name after a bare `model`);
    /// `None` means the user gave no answer.
    pub async fn handle_line(
        &mut self,
        line: &str,
        ask: &mut dyn FnMut(&str) -> Option<String>,
    ) -> LineAction {
        let line = line.trim();
        match ReplCommand::parse(line) {
            Some(command) => self.handle_command(command, ask),
            None => {
                self.process_query(line).await;
                LineAction::Query
            }
        }
    }

    fn print_welcome(&self) {
        println!("{}", ConsoleFormatter::header("MEDICAL TRIAGE ASSISTANT"));
        println!("I can help assess your medical concerns");
        println!("{}", "NOT for diagnoses or emergencies".yellow());
        println!("I'll direct you to appropriate care based on severity");
        println!("Model: {}", self.session.model());
        println!("Type 'exit' to quit, 'model' to switch models, 'help' for help");
        println!("{}", "=".repeat(60));
    }

    fn print_help(&self) {
        println!();
        println!("Commands:");
        println!("  help             - Show this help");
        println!("  model            - List models and switch the current one");
        println!("  /model <name>    - Switch to <name> directly");
        println!("  exit, quit, /q   - Exit chat");
        println!();
        println!("Anything else is treated as a health concern to triage.");
        println!();
    }

    fn handle_command(
        &mut self,
        command: ReplCommand,
        ask: &mut dyn FnMut(&str) -> Option<String>,
    ) -> LineAction {
        match command {
            ReplCommand::Exit => {
                println!("\nThank you! Stay healthy!");
                LineAction::Exit
            }
            ReplCommand::Help => {
                self.print_help();
                LineAction::Command
            }
            ReplCommand::SwitchModel(Some(name)) => {
                self.switch_model(&name);
                LineAction::Command
            }
            ReplCommand::SwitchModel(None) => {
                println!();
                print!(
                    "{}",
                    ConsoleFormatter::format_models(
                        self.use_case.available_models(),
                        self.session.model()
                    )
                );
                if let Some(name) = ask("Enter model name to switch: ") {
                    self.switch_model(&name);
                }
                LineAction::Command
            }
        }
    }

    fn switch_model(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        self.session.switch_model(Model::new(name));
        info!("Model switched manually to {}", name);
        println!("{} {}", "Switched to:".green(), self.session.model());
    }

    async fn process_query(&mut self, line: &str) {
        println!();

        let query = match Query::new(line) {
            Ok(query) => query,
            Err(e) => {
                eprintln!("{} {}", "Error:".red(), e);
                return;
            }
        };

        let outcome = if self.config.show_progress {
            let progress = ProgressReporter::new();
            self.use_case
                .execute_with_progress(&query, &mut self.session, &progress)
                .await
        } else {
            self.use_case
                .execute_with_progress(&query, &mut self.session, &NoProgress)
                .await
        };
        debug!(
            "Session now on {} with {} retries used",
            self.session.model(),
            self.session.retry_count()
        );

        print!("{}", ConsoleFormatter::format_outcome(&outcome));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use triage_application::{BackendError, CompletionBackend, GenerationRequest, TriageParams};
    use triage_domain::ModelInfo;

    const MODELS: &[&str] = &["models/gemini-1.5-flash", "models/gemini-pro"];

    #[derive(Default)]
    struct ScriptedBackend {
        replies: Mutex<VecDeque<String>>,
        requests: Mutex<Vec<GenerationRequest>>,
    }

    impl ScriptedBackend {
        fn replying(replies: &[&str]) -> Self {
            Self {
                replies: Mutex::new(replies.iter().map(|r| r.to_string()).collect()),
                requests: Mutex::default(),
            }
        }

        fn requests(&self) -> Vec<GenerationRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn list_models(&self) -> Result<Vec<ModelInfo>, BackendError> {
            Ok(available())
        }

        async fn generate(&self, request: &GenerationRequest) -> Result<String, BackendError> {
            self.requests.lock().unwrap().push(request.clone());
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .ok_or_else(|| BackendError::Other("script exhausted".to_string()))
        }
    }

    fn available() -> Vec<ModelInfo> {
        MODELS
            .iter()
            .map(|name| ModelInfo::new(*name, vec!["generateContent".to_string()]))
            .collect()
    }

    fn repl(backend: &Arc<ScriptedBackend>) -> TriageRepl {
        let use_case = RunTriageUseCase::new(
            backend.clone(),
            available(),
            TriageParams::default().with_backoff(Duration::ZERO),
        );
        TriageRepl::new(use_case, ModelSession::new(Model::new(MODELS[0])))
            .with_config(ReplConfig {
                show_progress: false,
            })
    }

    fn no_answer(_prompt: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(ReplCommand::parse("exit"), Some(ReplCommand::Exit));
        assert_eq!(ReplCommand::parse("EXIT"), Some(ReplCommand::Exit));
        assert_eq!(ReplCommand::parse("/quit"), Some(ReplCommand::Exit));
        assert_eq!(ReplCommand::parse("model"), Some(ReplCommand::SwitchModel(None)));
        assert_eq!(
            ReplCommand::parse("/model models/gemini-pro"),
            Some(ReplCommand::SwitchModel(Some("models/gemini-pro".to_string())))
        );
        assert_eq!(ReplCommand::parse("help"), Some(ReplCommand::Help));
    }

    #[test]
    fn test_queries_are_not_commands() {
        assert_eq!(ReplCommand::parse("I want to exit this pain"), None);
        assert_eq!(ReplCommand::parse("which model are you"), None);
        assert_eq!(ReplCommand::parse("model trains make my head hurt"), None);
        assert_eq!(ReplCommand::parse("headache"), None);
    }

    #[tokio::test]
    async fn test_model_command_applies_to_next_query() {
        let backend = Arc::new(ScriptedBackend::replying(&["mild", "Keep the skin clean."]));
        let mut repl = repl(&backend);

        let action = repl
            .handle_line("model", &mut |_| Some(" models/gemini-pro ".to_string()))
            .await;
        assert_eq!(action, LineAction::Command);
        assert_eq!(repl.session().model().as_str(), "models/gemini-pro");

        let action = repl.handle_line("I have a mild skin rash", &mut no_answer).await;
        assert_eq!(action, LineAction::Query);

        let requests = backend.requests();
        assert_eq!(requests.len(), 2);
        assert!(
            requests
                .iter()
                .all(|r| r.model.as_str() == "models/gemini-pro")
        );
    }

    #[tokio::test]
    async fn test_blank_model_answer_keeps_current_model() {
        let backend = Arc::new(ScriptedBackend::default());
        let mut repl = repl(&backend);

        repl.handle_line("model", &mut |_| Some("   ".to_string())).await;
        repl.handle_line("model", &mut no_answer).await;

        assert_eq!(repl.session().model().as_str(), MODELS[0]);
        assert!(backend.requests().is_empty());
    }

    #[tokio::test]
    async fn test_queries_never_enter_history() {
        let backend = Arc::new(ScriptedBackend::replying(&["moderate", "Rest and hydrate."]));
        let mut repl = repl(&backend);

        let query = repl.handle_line("persistent cough", &mut no_answer).await;
        assert_eq!(query, LineAction::Query);
        assert!(!query.records_history());

        let command = repl.handle_line("/model models/gemini-pro", &mut no_answer).await;
        assert_eq!(command, LineAction::Command);
        assert!(command.records_history());

        let exit = repl.handle_line("quit", &mut no_answer).await;
        assert_eq!(exit, LineAction::Exit);
        assert!(!exit.records_history());
    }
}
