//! Runs one choice collector invocation against files on disk.
//!
//! ```text
//! choice-collector <NODE_CONFIG> <SHARED_STATE> [SELECTED_INDEX]
//! ```
//!
//! Without a selected index the collect directive is printed; with one, the
//! route directive. Output is JSON on stdout.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use choice_collector::adapters::TracingStepLogger;
use choice_collector::config::{
    load_node_config, load_shared_state, AppConfig, LogFormat, LoggingConfig,
};
use choice_collector::domain::choice_collector::{ChoiceCollectorStep, CollectedInput};
use choice_collector::domain::template::TemplateResolver;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Parser)]
#[command(name = "choice-collector")]
#[command(version)]
#[command(about = "Render a choice prompt from shared state, or route on a selected index")]
struct Cli {
    /// Node configuration (.json, otherwise YAML)
    node_config: PathBuf,

    /// Shared state snapshot as a JSON object
    shared_state: PathBuf,

    /// Index selected on a previous pass; omit for the first pass
    #[arg(allow_negative_numbers = true)]
    selected_index: Option<i64>,
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), BoxError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter()?)
        .with_writer(std::io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().try_init()?,
        LogFormat::Text => builder.try_init()?,
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), BoxError> {
    let app_config = AppConfig::load()?;
    app_config.validate()?;
    init_tracing(&app_config.logging)?;

    let node_config = load_node_config(&cli.node_config)?;
    let shared_state = load_shared_state(&cli.shared_state)?;
    let input = CollectedInput::from(cli.selected_index);

    let referenced: Vec<String> = TemplateResolver::placeholders(&node_config.prompt)
        .into_iter()
        .map(|p| p.body().to_string())
        .collect();
    tracing::debug!(
        node_config = %cli.node_config.display(),
        choices = node_config.choices.len(),
        state_keys = shared_state.len(),
        placeholders = ?referenced,
        answered = input.is_answered(),
        "Running choice collector"
    );

    let step = ChoiceCollectorStep::new(
        node_config,
        Arc::new(TracingStepLogger::new(ChoiceCollectorStep::NAME)),
    );
    let result = step.process(&shared_state, input).map_err(|e| {
        tracing::error!(code = %e.code(), "{}", e);
        e
    })?;

    tracing::info!(phase = ?result.phase(), "Choice collector finished");
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
