//! CLI entrypoint for the triage assistant
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use triage_application::{
    CompletionBackend, InitSessionInput, InitSessionOutput, InitSessionUseCase, NoProgress,
    RunTriageUseCase, TriageProgressNotifier,
};
use triage_domain::{Model, OutputFormat, Query};
use triage_infrastructure::{ConfigLoader, FileConfig, GeminiBackend};
use triage_presentation::{
    Cli, ConsoleFormatter, JsonFormatter, OutputFormatter, ProgressReporter, ReplConfig,
    TriageRepl,
};

/// Install the tracing subscriber. The returned guard flushes the log file on drop.
fn init_logging(cli: &Cli) -> Result<Option<WorkerGuard>> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    match &cli.log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Cannot open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
            Ok(None)
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("Config error: {}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }
    Ok(config)
}

/// List models and pick the starting one. The failure keeps its cause chain.
async fn start_session(
    backend: Arc<dyn CompletionBackend>,
    input: InitSessionInput,
) -> Result<InitSessionOutput> {
    InitSessionUseCase::new(backend)
        .execute(input)
        .await
        .context("Failed to initialize session")
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let dotenv = dotenvy::dotenv();
    let _log_guard = init_logging(&cli)?;

    info!("Starting triage assistant");
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    ConsoleFormatter::set_color(config.output.color);

    // === Dependency Injection ===
    let backend = Arc::new(GeminiBackend::from_env(&config.backend.to_settings())?);
    let params = config.retry.to_params();
    let policy = config.models.to_policy();

    let model_override = cli
        .model
        .as_deref()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(Model::new)
        .or_else(|| config.models.model_override());

    let init = start_session(
        backend.clone(),
        InitSessionInput::default()
            .with_model_override(model_override)
            .with_policy(policy.clone())
            .with_max_retries(config.retry.max_retries()),
    )
    .await?;
    info!("Session model: {}", init.session.model());

    if cli.list_models {
        print!(
            "{}",
            ConsoleFormatter::format_models(&init.available, init.session.model())
        );
        return Ok(());
    }

    let use_case = RunTriageUseCase::new(backend, init.available, params)
        .with_contacts(config.contact_resolver())
        .with_policy(policy);
    let mut session = init.session;

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig {
            show_progress: config.repl.show_progress && !cli.quiet,
        };
        TriageRepl::new(use_case, session)
            .with_config(repl_config)
            .run()
            .await?;
        return Ok(());
    }

    // Single query mode - query is required
    let Some(text) = cli.query.as_deref() else {
        bail!("A query is required. Use --chat for interactive mode.");
    };
    let query = Query::new(text)?;

    let format = cli
        .output
        .map(OutputFormat::from)
        .or(config.output.format)
        .unwrap_or_default();

    let progress: Box<dyn TriageProgressNotifier> =
        if cli.quiet || !config.repl.show_progress || format == OutputFormat::Json {
            Box::new(NoProgress)
        } else {
            Box::new(ProgressReporter::new())
        };

    let outcome = use_case
        .execute_with_progress(&query, &mut session, progress.as_ref())
        .await;
    if !outcome.advisory.success {
        warn!("Advisory degraded: {}", outcome.advisory.text);
    }

    let output = match format {
        OutputFormat::Text => ConsoleFormatter.format(&outcome),
        OutputFormat::Json => JsonFormatter.format(&outcome),
    };
    println!("{}", output);

    Ok(())
}
