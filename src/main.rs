use anyhow::Context;
use bisnode_gateway::utils::{logger, validation::Validate};
use bisnode_gateway::CliConfig;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let config = cli
        .load()
        .with_context(|| format!("Failed to load configuration from {}", cli.config))?;

    logger::init_logger(&config.logging.level, cli.verbose, config.logging.json);

    tracing::info!("Starting bisnode-gateway");
    if cli.verbose {
        tracing::debug!("Gateway config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e).context("Invalid configuration");
    }

    bisnode_gateway::app::serve(&config)
        .await
        .context("Server terminated with an error")
}
