// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("invalid target: {target} components requested for {points} points (expected 1..={points})")]
    InvalidTarget { target: usize, points: usize },

    #[error("target of {target} components not reached: edges exhausted with {remaining} components left")]
    TargetUnreachable { target: usize, remaining: usize },

    #[error("squared distance between points {u} and {v} overflows u64")]
    CoordinateOverflow { u: usize, v: usize },

    #[error("edge ({u}, {v}) references a point outside 0..{points}")]
    EdgeOutOfRange { u: usize, v: usize, points: usize },

    #[error("product of the {largest} largest component sizes overflows u128")]
    ProductOverflow { largest: usize },

    #[error("malformed point on line {line}: {content:?} (expected \"x,y,z\")")]
    Parse { line: usize, content: String },

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ClusterError>;

// Allow `?` on std::io::Error by converting to ClusterError::Io with unknown path.
impl From<std::io::Error> for ClusterError {
    fn from(source: std::io::Error) -> Self {
        ClusterError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

impl From<toml::de::Error> for ClusterError {
    fn from(e: toml::de::Error) -> Self {
        ClusterError::Config(e.to_string())
    }
}
