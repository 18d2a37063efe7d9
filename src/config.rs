//! Configuration loading from file, environment, and CLI arguments.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::format::ReaderOptions;
use crate::types::{GraphError, GraphResult};

/// Environment variable naming a config file when `--config` is not given.
pub const CONFIG_ENV: &str = "GNX_CONFIG";

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NexusConfig {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,
    /// Pretty-print JSON output.
    #[serde(default)]
    pub pretty: bool,
    /// Log filter used when `--verbose` is not set and `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Text reader options.
    #[serde(default)]
    pub reader: ReaderOptions,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for NexusConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            pretty: false,
            log_level: default_log_level(),
            reader: ReaderOptions::default(),
        }
    }
}

/// Load configuration from a TOML file.
pub fn load_config(path: &Path) -> GraphResult<NexusConfig> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
        .map_err(|e| GraphError::Config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration from TOML text.
pub fn parse_config(content: &str) -> GraphResult<NexusConfig> {
    toml::from_str(content).map_err(|e| GraphError::Config(e.to_string()))
}

/// Resolve the effective configuration: an explicit path, then the
/// [`CONFIG_ENV`] variable, then defaults.
pub fn resolve_config(explicit: Option<&Path>) -> GraphResult<NexusConfig> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
    match path {
        Some(path) => load_config(&path),
        None => Ok(NexusConfig::default()),
    }
}
