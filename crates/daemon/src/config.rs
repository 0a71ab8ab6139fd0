//! Daemon configuration
//!
//! Sources, lowest precedence first:
//!
//! 1. built-in defaults
//! 2. optional config file (`LAUNCHQ_CONFIG`, default `launchq.toml`; any
//!    format the `config` crate recognises, including YAML)
//! 3. `LAUNCHQ_*` environment variables, e.g. `LAUNCHQ_STORE=ring`,
//!    `LAUNCHQ_SEED=g1,g2`

use anyhow::Result;
use launchq_core::application::launcher::constants::DEFAULT_POLL_INTERVAL;
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

const CONFIG_PATH_ENV: &str = "LAUNCHQ_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "launchq.toml";
const ENV_PREFIX: &str = "LAUNCHQ";

/// Backing store for the queue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreKind {
    #[default]
    Vec,
    Ring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Development: pretty formatting with colors
    #[default]
    Pretty,
    /// Production: JSON structured logging
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DaemonConfig {
    pub store: StoreKind,
    pub poll_interval_ms: u64,
    pub log_format: LogFormat,
    /// Also write a daily rolling log file here (`~` is expanded)
    pub log_dir: Option<String>,
    /// Group IDs enqueued at startup, in order
    pub seed: Vec<String>,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            store: StoreKind::default(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL.as_millis() as u64,
            log_format: LogFormat::default(),
            log_dir: None,
            seed: Vec::new(),
        }
    }
}

impl DaemonConfig {
    pub fn load() -> Result<Self> {
        let path =
            std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&path)
    }

    /// Load with `path` as the (optional) config file
    pub fn load_from(path: &str) -> Result<Self> {
        let path = shellexpand::tilde(path).into_owned();
        let settings = config::Config::builder()
            .add_source(config::File::with_name(&path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("seed"),
            )
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn log_dir(&self) -> Option<PathBuf> {
        self.log_dir
            .as_deref()
            .map(|dir| PathBuf::from(shellexpand::tilde(dir).into_owned()))
    }
}
