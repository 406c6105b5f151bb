// src/events.rs
//! Machine-readable event logging for clustering runs.
//!
//! Events are appended to `.spanforest/events.jsonl` unless configured otherwise.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

pub const DEFAULT_EVENT_LOG: &str = ".spanforest/events.jsonl";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    EdgesBuilt {
        points: usize,
        edges: usize,
    },
    Union {
        u: usize,
        v: usize,
        weight: u64,
        components: usize,
    },
    TargetReached {
        u: usize,
        v: usize,
        weight: u64,
        edges_processed: usize,
    },
    NoEdgeNeeded {
        components: usize,
    },
    Exhausted {
        components: usize,
        edges_processed: usize,
    },
    BudgetSpent {
        edges_considered: usize,
        unions: usize,
        components: usize,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClusterEvent {
    pub timestamp: u64,
    pub kind: EventKind,
}

#[derive(Clone, Debug)]
pub struct EventLogger {
    log_path: PathBuf,
}

impl EventLogger {
    #[must_use]
    pub fn new(log_path: &Path) -> Self {
        Self {
            log_path: log_path.to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.log_path
    }

    pub fn log(&self, kind: EventKind) {
        self.log_all(std::iter::once(kind));
    }

    /// Appends every event with one file open.
    pub fn log_all(&self, kinds: impl IntoIterator<Item = EventKind>) {
        // Logging is best-effort. We swallow errors to avoid crashing main flow.
        let lines: Vec<String> = kinds
            .into_iter()
            .filter_map(|kind| Self::serialize_event(kind).ok())
            .collect();
        if !lines.is_empty() {
            let _ = self.append_to_file(&lines);
        }
    }

    fn serialize_event(kind: EventKind) -> Result<String> {
        let timestamp = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
        let event = ClusterEvent { timestamp, kind };
        Ok(serde_json::to_string(&event)?)
    }

    fn append_to_file(&self, lines: &[String]) -> Result<()> {
        if let Some(parent) = self.log_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;
        for line in lines {
            writeln!(file, "{line}")?;
        }
        Ok(())
    }
}

/// Reads back every event in a log file, skipping lines that fail to parse.
///
/// # Errors
/// Returns error if the file cannot be read.
pub fn read_events(path: &Path) -> Result<Vec<ClusterEvent>> {
    let content = fs::read_to_string(path)?;
    Ok(content
        .lines()
        .filter_map(|line| serde_json::from_str(line).ok())
        .collect())
}
