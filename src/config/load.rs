use super::{CounterBackend, DiffBackend, MaxLinesConfig, smart_load};
use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Serialized};
use serde::Serialize;
use std::path::Path;

/// Repository config files, first match wins
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".max-lines.toml",
    ".max-lines.json",
    ".max-lines.yaml",
    ".max-lines.yml",
];

const ENV_PREFIX: &str = "MAX_LINES_";

/// Values given explicitly on the command line
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_lines: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_modified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exceptions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_backend: Option<DiffBackend>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_counter: Option<CounterBackend>,
}

impl MaxLinesConfig {
    /// Load configuration with the default layering.
    ///
    /// `custom_config` replaces the repository file lookup in `search_dir`.
    /// An explicitly named file that does not exist is an error.
    pub fn load(custom_config: Option<&Path>, search_dir: &Path, overrides: &ConfigOverrides) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");
        let mut figment = Figment::from(Serialized::defaults(MaxLinesConfig::default()));

        match custom_config {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("Config file not found: {}", path.display());
                }
                tracing::debug!("Using config file {}", path.display());
                figment = figment.merge(smart_load::auto(path));
            }
            None => {
                if let Some(path) = CONFIG_FILE_NAMES
                    .iter()
                    .map(|name| search_dir.join(name))
                    .find(|path| path.is_file())
                {
                    tracing::debug!("Found repository config {}", path.display());
                    figment = figment.merge(smart_load::auto(path));
                }
            }
        }

        figment = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides));

        let config: MaxLinesConfig = figment.extract().context("Invalid max-lines configuration")?;
        tracing::trace!("CONFIG LOAD: Final config = {:?}", config);
        Ok(config)
    }
}
