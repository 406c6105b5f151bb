use crate::events::DEFAULT_EVENT_LOG;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClusterConfig {
    /// Component count `close` stops at.
    #[serde(default = "default_target")]
    pub target: usize,
    /// Edges consumed by `connect`.
    #[serde(default = "default_pair_budget")]
    pub pair_budget: usize,
    /// How many of the largest components `connect` multiplies.
    #[serde(default = "default_largest")]
    pub largest: usize,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
            pair_budget: default_pair_budget(),
            largest: default_largest(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_true")]
    pub parallel: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_event_path")]
    pub path: PathBuf,
}

impl Default for EventsConfig {
    fn default() -> Self {
        Self { enabled: false, path: default_event_path() }
    }
}

/// On-disk layout of `spanforest.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanforestToml {
    #[serde(default)]
    pub cluster: ClusterConfig,
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub events: EventsConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub cluster: ClusterConfig,
    pub engine: EngineConfig,
    pub events: EventsConfig,
    pub verbose: bool,
}

const fn default_true() -> bool { true }
const fn default_target() -> usize { 1 }
const fn default_pair_budget() -> usize { 1000 }
const fn default_largest() -> usize { 3 }
fn default_event_path() -> PathBuf { PathBuf::from(DEFAULT_EVENT_LOG) }
