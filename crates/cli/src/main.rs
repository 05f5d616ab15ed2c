//! `helixdb-node` CLI entry-point.
//!
//! Available sub-commands:
//! - `test` — check stored credentials against the server's `/health` endpoint.
//! - `run`  — execute a batch definition JSON file against a server.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use tracing::info;

use client::{HelixClient, HelixCredentials};
use node::{run_batch, ExecutionOptions, MapParameters, ParameterSource, PerItemParameters};

#[derive(Parser)]
#[command(
    name = "helixdb-node",
    about = "HelixDB workflow node runner",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check connectivity and auth against the server's /health endpoint.
    Test {
        /// Path to a credentials JSON file.
        #[arg(long, env = "HELIXDB_CREDENTIALS")]
        credentials: Option<PathBuf>,
        /// Server hostname, overriding the credentials file.
        #[arg(long)]
        host: Option<String>,
        /// Server port, overriding the credentials file.
        #[arg(long)]
        port: Option<u16>,
    },
    /// Execute a batch definition JSON file.
    Run {
        /// Path to the batch definition file.
        path: PathBuf,
        /// Path to a credentials JSON file (used when the batch file
        /// carries no credentials of its own).
        #[arg(long, env = "HELIXDB_CREDENTIALS")]
        credentials: Option<PathBuf>,
        /// Record per-item failures in the output instead of aborting.
        #[arg(long)]
        continue_on_fail: bool,
    },
}

/// On-disk batch definition consumed by `run`.
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct BatchFile {
    #[serde(default)]
    credentials: Option<HelixCredentials>,
    /// Either one object (shared by every item) or an array of objects
    /// (one per item).
    parameters: Value,
    #[serde(default)]
    items: Vec<Value>,
    #[serde(default)]
    continue_on_fail: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Command::Test {
            credentials,
            host,
            port,
        } => {
            let mut creds = load_credentials(credentials.as_deref())?;
            if let Some(host) = host {
                creds.host = host;
            }
            if let Some(port) = port {
                creds.port = port;
            }

            let base_url = creds.base_url();
            let client = HelixClient::new(&creds);
            match client.health().await {
                Ok(body) => println!("✅ {base_url} is healthy: {}", body.trim()),
                Err(e) => {
                    eprintln!("❌ Health check against {base_url} failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Command::Run {
            path,
            credentials,
            continue_on_fail,
        } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("cannot read file {}", path.display()))?;
            let batch: BatchFile =
                serde_json::from_str(&content).context("invalid batch definition")?;

            let creds = match batch.credentials {
                Some(creds) => creds,
                None => load_credentials(credentials.as_deref())?,
            };

            info!(
                items = batch.items.len(),
                server = %creds.base_url(),
                "executing batch"
            );

            let client = HelixClient::new(&creds);
            let params = parameter_source(batch.parameters)?;
            let options = ExecutionOptions {
                continue_on_fail: continue_on_fail || batch.continue_on_fail,
            };

            match run_batch(&client, params.as_ref(), &batch.items, options).await {
                Ok(outputs) => println!("{}", serde_json::to_string_pretty(&outputs)?),
                Err(e) => {
                    eprintln!("❌ Batch aborted: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

/// Load credentials from a JSON file, or fall back to the defaults
/// (`localhost:6969`, no auth).
fn load_credentials(path: Option<&Path>) -> Result<HelixCredentials> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read credentials file {}", path.display()))?;
            serde_json::from_str(&content).context("invalid credentials file")
        }
        None => Ok(HelixCredentials::default()),
    }
}

/// Interpret the batch file's `parameters` field.
fn parameter_source(parameters: Value) -> Result<Box<dyn ParameterSource>> {
    match parameters {
        Value::Object(map) => Ok(Box::new(MapParameters::new(map))),
        Value::Array(list) => {
            let maps = list
                .into_iter()
                .map(|entry| match entry {
                    Value::Object(map) => Ok(map),
                    _ => bail!("per-item parameters must be JSON objects"),
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Box::new(PerItemParameters::new(maps)))
        }
        _ => bail!("'parameters' must be an object or an array of objects"),
    }
}
