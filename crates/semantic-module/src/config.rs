//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `SEMANTIC_MODULE_*` environment variables, `__` between sections
//!    (`SEMANTIC_MODULE_INSTALL__SKIP=true`)
//! 3. Config file (`--config`, else the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File};
use semantic_module_adapters::config_store::{DEFAULT_FILE_NAME, DEFAULT_NAMESPACE};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "SEMANTIC_MODULE";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Package-manager settings.
    pub install: InstallConfig,
    /// Where answers are remembered between runs.
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Never run the package manager.
    pub skip: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// File name inside the module directory.
    pub file_name: String,
    /// Top-level key the answers live under.
    pub namespace: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.into(),
            namespace: DEFAULT_NAMESPACE.into(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, file, and environment.
    ///
    /// `config_file` is the path passed via `--config`; it must exist. When
    /// `None`, the default location is read if present.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::from(Self::config_path()).required(false),
        };

        Self::build(
            Config::builder().add_source(file).add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            ),
        )
        .with_context(|| match config_file {
            Some(path) => format!("failed to load config from {}", path.display()),
            None => "failed to load configuration".to_string(),
        })
    }

    fn build(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, config::ConfigError> {
        let defaults = Self::default();
        builder
            .set_default("output.no_color", defaults.output.no_color)?
            .set_default("install.skip", defaults.install.skip)?
            .set_default("store.file_name", defaults.store.file_name)?
            .set_default("store.namespace", defaults.store.namespace)?
            .build()?
            .try_deserialize()
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.semantic-module.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "semantic-module", "create-semantic-module")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".semantic-module.toml"))
    }
}
