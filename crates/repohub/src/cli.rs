//! Command line front end
//!
//! | Command | Description |
//! |---------|-------------|
//! | `repohub providers` | List registered repository providers |
//! | `repohub submit --provider gitee --token T --data '{..}'` | Submit a JSON object payload |

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use repohub_application::{ProviderRegistry, StrategyBinding, resolve_repo_provider};
use repohub_domain::error::{Error, Result};
use repohub_domain::ports::Payload;
use repohub_infrastructure::{AppConfig, ConfigLoader, init_logging};
use serde_json::{Value, json};
use tracing::info;

/// Command line interface for RepoHub
#[derive(Parser, Debug)]
#[command(name = "repohub")]
#[command(about = "RepoHub - Submit data to remote repository hosts")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List registered repository providers
    Providers,
    /// Submit a JSON payload to a repository host
    Submit(SubmitArgs),
}

/// Arguments for `repohub submit`
#[derive(Args, Debug, Default)]
pub struct SubmitArgs {
    /// Provider category (defaults to `submission.provider` from config)
    #[arg(short, long)]
    pub provider: Option<String>,

    /// Credential for the provider (defaults to `submission.token` from config)
    #[arg(short, long)]
    pub token: Option<String>,

    /// JSON object to submit (defaults to `{}`)
    #[arg(short, long)]
    pub data: Option<String>,
}

/// Load configuration, set up logging and run the selected command
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path);
    }
    let config = loader.load().context("Failed to load configuration")?;
    init_logging(&config.logging).context("Failed to initialize logging")?;

    let output = execute(&cli.command, &config)?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Run a command and return its JSON output
pub fn execute(command: &Command, config: &AppConfig) -> Result<Value> {
    match command {
        Command::Providers => Ok(list_providers()),
        Command::Submit(args) => submit(args, config),
    }
}

fn list_providers() -> Value {
    ProviderRegistry::instance()
        .list()
        .into_iter()
        .map(|(name, description)| json!({ "name": name, "description": description }))
        .collect()
}

fn submit(args: &SubmitArgs, config: &AppConfig) -> Result<Value> {
    let category = args
        .provider
        .as_deref()
        .unwrap_or(&config.submission.provider);
    let token = args
        .token
        .as_deref()
        .or(config.submission.token.as_deref())
        .unwrap_or_default();
    let payload = parse_payload(args.data.as_deref())?;

    let binding = StrategyBinding::bind(resolve_repo_provider(category, token)?);
    info!(
        provider = binding.service().provider_name(),
        fields = payload.len(),
        "Submitting payload"
    );

    Ok(Value::Object(binding.submit(payload)?))
}

/// Parse the `--data` argument into a payload
///
/// A missing argument yields an empty payload; anything other than a JSON
/// object is rejected.
pub fn parse_payload(data: Option<&str>) -> Result<Payload> {
    let Some(raw) = data else {
        return Ok(Payload::new());
    };
    match serde_json::from_str::<Value>(raw)? {
        Value::Object(map) => Ok(map),
        other => Err(Error::invalid_argument(format!(
            "payload must be a JSON object, got {other}"
        ))),
    }
}
