//! TOML configuration: endpoint, export target, UI and logging settings.
//!
//! Every section is optional in the file; missing keys take their defaults.

use crate::constants::{
    APP_NAME, CONFIG_GENERATED, CSV_FILE_NAME, DEFAULT_ENDPOINT, DEFAULT_USER_AGENT, INPUT_HEIGHT_DEFAULT,
    INPUT_HEIGHT_MAX, INPUT_HEIGHT_MIN, XLSX_FILE_NAME,
};
use crate::icons::IconTheme;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub export: ExportConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Remote analysis endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// URL receiving `GET ?text=...`
    pub endpoint: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
}

/// Where exports land
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory exported files are written to
    pub directory: String,
    /// File name of the spreadsheet export
    pub xlsx_file_name: String,
    /// File name of the CSV export
    pub csv_file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Icon theme: "emoji", "unicode" or "ascii"
    pub icon_theme: IconTheme,
    /// Number of text rows in the input area
    pub input_height: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Also write logs to a file in the data directory
    pub enabled: bool,
    /// One of "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: ".".to_string(),
            xlsx_file_name: XLSX_FILE_NAME.to_string(),
            csv_file_name: CSV_FILE_NAME.to_string(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            icon_theme: IconTheme::default(),
            input_height: INPUT_HEIGHT_DEFAULT,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        log::LevelFilter::from_str(&self.level).map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
    }
}

impl Config {
    /// Load `path` if given, otherwise the first config file found in the search
    /// locations, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path.map(Path::to_path_buf).or_else(Self::find_config_file) {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("Cannot read {}", path.display()))?;
        let config: Config = toml::from_str(&raw).with_context(|| format!("Invalid TOML in {}", path.display()))?;
        config.validate().with_context(|| format!("Invalid settings in {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// `./sentencelens.toml`, then `<config dir>/sentencelens/config.toml`
    fn find_config_file() -> Option<PathBuf> {
        let local = PathBuf::from(format!("{APP_NAME}.toml"));
        let user = Self::get_default_config_path().ok();
        std::iter::once(local).chain(user).find(|candidate| candidate.is_file())
    }

    pub fn validate(&self) -> Result<()> {
        let endpoint = reqwest::Url::parse(&self.api.endpoint)
            .with_context(|| format!("Invalid api.endpoint '{}'", self.api.endpoint))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            anyhow::bail!("api.endpoint must be an http(s) URL, got '{}'", self.api.endpoint);
        }

        if self.export.directory.is_empty() {
            anyhow::bail!("export.directory cannot be empty");
        }
        Self::validate_file_name("export.xlsx_file_name", &self.export.xlsx_file_name)?;
        Self::validate_file_name("export.csv_file_name", &self.export.csv_file_name)?;

        if !(INPUT_HEIGHT_MIN..=INPUT_HEIGHT_MAX).contains(&self.ui.input_height) {
            anyhow::bail!(
                "ui.input_height must be between {INPUT_HEIGHT_MIN} and {INPUT_HEIGHT_MAX} rows, got {}",
                self.ui.input_height
            );
        }

        self.logging.level_filter()?;
        Ok(())
    }

    fn validate_file_name(key: &str, name: &str) -> Result<()> {
        if name.is_empty() {
            anyhow::bail!("{key} cannot be empty");
        }
        if name.contains(['/', '\\']) {
            anyhow::bail!("{key} must be a bare file name, got '{name}'");
        }
        Ok(())
    }

    /// Write the defaults to `path` as commented TOML, creating missing directories.
    pub fn generate_default_config(path: &Path) -> Result<()> {
        let body = toml::to_string_pretty(&Self::default()).context("Cannot serialize the default config")?;
        let contents = format!(
            "# SentenceLens configuration, generated {}\n\
             # Every key is optional; removed keys fall back to these values.\n\n{body}",
            chrono::Local::now().format("%Y-%m-%d")
        );

        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| format!("Cannot create {}", parent.display()))?;
        }
        std::fs::write(path, contents).with_context(|| format!("Cannot write {}", path.display()))?;

        println!("{CONFIG_GENERATED}: {}", path.display());
        Ok(())
    }

    /// `<config dir>/sentencelens/config.toml`
    pub fn get_default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir().context("Could not determine the user config directory")?;
        Ok(base.join(APP_NAME).join("config.toml"))
    }
}
