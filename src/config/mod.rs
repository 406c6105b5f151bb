// src/config/mod.rs
pub mod types;

pub use self::types::{ClusterConfig, Config, EngineConfig, EventsConfig, SpanforestToml};

use crate::error::{ClusterError, Result};
use crate::events::EventLogger;
use crate::graph::BuildOptions;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "spanforest.toml";

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `spanforest.toml` from the working directory.
    ///
    /// # Errors
    /// Returns `Config` if the local file is malformed, `Io` if it cannot be read.
    pub fn load() -> Result<Self> {
        Self::load_in(Path::new("."))
    }

    /// Loads `spanforest.toml` from `dir`. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns `Config` if the file is malformed, `Io` if it cannot be read.
    pub fn load_in(dir: &Path) -> Result<Self> {
        Self::load_from(&dir.join(CONFIG_FILE))
    }

    /// Loads a config file. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns `Io` if the file exists but cannot be read, `Config` if it is not valid TOML.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }
        let content = fs::read_to_string(path).map_err(|source| ClusterError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        Self::parse_toml(&content)
    }

    /// # Errors
    /// Returns `Config` if `content` is not a valid `spanforest.toml`.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let parsed: SpanforestToml = toml::from_str(content)?;
        Ok(Self {
            cluster: parsed.cluster,
            engine: parsed.engine,
            events: parsed.events,
            verbose: false,
        })
    }

    #[must_use]
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            parallel: self.engine.parallel,
        }
    }

    /// The configured event logger, if event logging is enabled.
    #[must_use]
    pub fn event_logger(&self) -> Option<EventLogger> {
        self.events
            .enabled
            .then(|| EventLogger::new(&self.events.path))
    }

    /// Serializes the config back to TOML.
    ///
    /// # Errors
    /// Returns `Config` if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        let file = SpanforestToml {
            cluster: self.cluster.clone(),
            engine: self.engine.clone(),
            events: self.events.clone(),
        };
        toml::to_string_pretty(&file).map_err(|e| ClusterError::Config(e.to_string()))
    }
}
