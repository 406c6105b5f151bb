pub mod cli;
pub mod cluster;
pub mod config;
pub mod error;
pub mod events;
pub mod exit;
pub mod forest;
pub mod graph;
pub mod parse;
pub mod report;
pub mod types;

pub use cluster::{BudgetReport, ClusterEngine, ClusterReport, Outcome};
pub use error::{ClusterError, Result};
pub use forest::DisjointSetForest;
pub use types::{ClosingEdge, Edge, Point};
