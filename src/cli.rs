//! Command line arguments.

use crate::config::Config;
use crate::constants::ENDPOINT_ENV_VAR;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "sentencelens", version, about = "Sentence sentiment analysis with aggregated salience")]
pub struct Cli {
    /// Path to a config file (defaults to ./sentencelens.toml, then the XDG config dir)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Analysis endpoint URL, overriding the config file
    #[arg(long, env = ENDPOINT_ENV_VAR, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Directory exported files are written to, overriding the config file
    #[arg(long, value_name = "DIR")]
    pub export_dir: Option<PathBuf>,

    /// Prefill the input with the contents of a file ("-" reads stdin)
    #[arg(long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Write a default config file (to --config or the XDG config dir) and exit
    #[arg(long)]
    pub init_config: bool,
}

impl Cli {
    /// Apply command line and environment overrides on top of the loaded config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.api.endpoint = endpoint.clone();
        }
        if let Some(dir) = &self.export_dir {
            config.export.directory = dir.display().to_string();
        }
    }

    /// Text to start with, read from `--input`
    pub fn read_initial_text(&self) -> Result<String> {
        match &self.input {
            None => Ok(String::new()),
            Some(path) if path.as_os_str() == "-" => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read input from stdin")?;
                Ok(text)
            }
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display())),
        }
    }
}
