use anyhow::{Context, Result};
use clap::Parser;
use sentencelens::analysis::HttpSentimentClient;
use sentencelens::cli::Cli;
use sentencelens::config::Config;
use sentencelens::{logger, ui};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.init_config {
        let path = match &cli.config {
            Some(path) => path.clone(),
            None => Config::get_default_config_path()?,
        };
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);
    config.validate().context("Invalid configuration")?;

    let logger = logger::init(&config.logging)?;
    let initial_text = cli.read_initial_text()?;

    let client = HttpSentimentClient::from_config(&config.api).context("Failed to create HTTP client")?;
    log::info!("Using analysis endpoint {}", config.api.endpoint);

    ui::run_app(&config, Arc::new(client), logger, &initial_text).await
}
