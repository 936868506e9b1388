//! FIR Drafter - command-line driver for the report drafting pipeline.

use anyhow::{Context, Result};
use clap::Parser;
use fir_drafter::{ChatCompletionClient, Language, Pipeline, PipelineConfig};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "fir-drafter", version, about = "Draft a First Information Report from an interview transcript")]
struct Cli {
    /// Transcript or complaint text file
    transcript: PathBuf,

    /// Report language: english, hindi or punjabi
    #[arg(short, long, default_value = "english", env = "FIR_LANGUAGE")]
    language: Language,

    /// Pipeline config (JSON)
    #[arg(short, long, env = "FIR_CONFIG")]
    config: Option<PathBuf>,

    /// Print the full draft as JSON instead of the rendered document
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fir_drafter=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = PipelineConfig::load_optional(cli.config.as_deref())?;
    let client = ChatCompletionClient::from_env()?.configured(&config);
    info!("Chat completion client initialized (model={})", client.model());

    let transcript = std::fs::read_to_string(&cli.transcript)
        .with_context(|| format!("Failed to read transcript: {:?}", cli.transcript))?;

    let pipeline = Pipeline::from_config(client, &config);
    let draft = pipeline.process(&transcript, cli.language).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&draft)?);
    } else {
        println!("{}", draft.document);
    }
    Ok(())
}
