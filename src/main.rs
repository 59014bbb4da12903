use anyhow::Result;
use clap::Parser;
use qa_harness::cli::Cli;
use qa_harness::core::{HarnessConfig, OllamaClient};
use qa_harness::QaHarness;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Diagnostics go to stderr so harness output owns stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = HarnessConfig::load(cli.model, cli.base_url);

    let client = OllamaClient::new(config.model, config.base_url)?;
    let harness = QaHarness::new(client);

    harness.run(&cli.resume_file, cli.output.as_deref()).await
}
