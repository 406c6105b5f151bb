// src/cluster.rs
//! Kruskal-style clustering over a pre-sorted edge list.
//!
//! The engine walks edges in order and unions their endpoints until either a
//! target component count is reached or the edge list runs out. A second entry
//! point spends a fixed edge budget instead and reports the resulting
//! component sizes.

use crate::error::{ClusterError, Result};
use crate::events::{EventKind, EventLogger};
use crate::forest::DisjointSetForest;
use crate::types::{ClosingEdge, Edge, Point};
use serde::Serialize;

/// How a targeted run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// The points already formed `target` components; no edge was consumed.
    NoEdgeNeeded,
    /// The union over this edge brought the component count down to the target.
    ReachedTarget { closing: ClosingEdge },
    /// Every edge was consumed without reaching the target.
    Exhausted { remaining: usize },
}

/// Result of [`ClusterEngine::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClusterReport {
    pub outcome: Outcome,
    pub target: usize,
    pub points: usize,
    /// Edges taken from the list, cycle edges included.
    pub edges_processed: usize,
    pub unions: usize,
    pub components: usize,
    /// Component sizes at the end of the run, largest first.
    pub component_sizes: Vec<usize>,
}

impl ClusterReport {
    #[must_use]
    pub fn closing_edge(&self) -> Option<&ClosingEdge> {
        match &self.outcome {
            Outcome::ReachedTarget { closing } => Some(closing),
            Outcome::NoEdgeNeeded | Outcome::Exhausted { .. } => None,
        }
    }

    /// Product of the X coordinates of the closing edge's endpoints.
    #[must_use]
    pub fn closing_product(&self) -> Option<i128> {
        self.closing_edge().map(ClosingEdge::x_product)
    }

    #[must_use]
    pub fn reached_target(&self) -> bool {
        !matches!(self.outcome, Outcome::Exhausted { .. })
    }

    /// Turns an exhausted run into an error, for callers that need the target met.
    ///
    /// # Errors
    /// Returns `TargetUnreachable` if the edge list ran out first.
    pub fn require_target(self) -> Result<Self> {
        match self.outcome {
            Outcome::Exhausted { remaining } => Err(ClusterError::TargetUnreachable {
                target: self.target,
                remaining,
            }),
            _ => Ok(self),
        }
    }
}

/// Result of [`ClusterEngine::connect_closest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetReport {
    pub budget: usize,
    pub edges_considered: usize,
    pub unions: usize,
    pub components: usize,
    /// Largest first.
    pub component_sizes: Vec<usize>,
}

impl BudgetReport {
    /// Product of the `k` largest component sizes, or `None` if it overflows `u128`.
    /// `k = 0` gives 1.
    #[must_use]
    pub fn largest_product(&self, k: usize) -> Option<u128> {
        self.component_sizes
            .iter()
            .take(k)
            .try_fold(1u128, |acc, &s| acc.checked_mul(s as u128))
    }
}

/// Single-use clustering run over a fixed point set.
///
/// Both entry points take `self`, so a forest never outlives the run that built it.
pub struct ClusterEngine<'a> {
    points: &'a [Point],
    forest: DisjointSetForest,
    logger: Option<&'a EventLogger>,
    events: Vec<EventKind>,
    edges_processed: usize,
    unions: usize,
}

impl<'a> ClusterEngine<'a> {
    #[must_use]
    pub fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            forest: DisjointSetForest::new(points.len()),
            logger: None,
            events: Vec::new(),
            edges_processed: 0,
            unions: 0,
        }
    }

    /// Records union and termination events to `logger` when the run ends.
    #[must_use]
    pub fn with_logger(mut self, logger: &'a EventLogger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Consumes `edges` in order until `target` components remain.
    ///
    /// `edges` must be sorted the way [`crate::graph::build_edges`] sorts them and
    /// index into the engine's points.
    ///
    /// # Errors
    /// Returns `InvalidTarget` if `target` is outside `1..=points.len()` and
    /// `EdgeOutOfRange` if an edge names a missing point; both before any edge is consumed.
    /// An exhausted edge list is not an error; see [`ClusterReport::require_target`].
    pub fn run(mut self, edges: &[Edge], target: usize) -> Result<ClusterReport> {
        let n = self.points.len();
        if target == 0 || target > n {
            return Err(ClusterError::InvalidTarget { target, points: n });
        }
        check_indices(edges, n)?;

        let outcome = if self.forest.component_count() == target {
            Outcome::NoEdgeNeeded
        } else {
            self.consume_until(edges, target)
        };

        self.events.push(match &outcome {
            Outcome::NoEdgeNeeded => EventKind::NoEdgeNeeded {
                components: self.forest.component_count(),
            },
            Outcome::ReachedTarget { closing } => EventKind::TargetReached {
                u: closing.edge.u,
                v: closing.edge.v,
                weight: closing.edge.weight,
                edges_processed: self.edges_processed,
            },
            Outcome::Exhausted { remaining } => EventKind::Exhausted {
                components: *remaining,
                edges_processed: self.edges_processed,
            },
        });
        self.flush_events();

        Ok(ClusterReport {
            outcome,
            target,
            points: n,
            edges_processed: self.edges_processed,
            unions: self.unions,
            components: self.forest.component_count(),
            component_sizes: self.forest.component_sizes(),
        })
    }

    fn consume_until(&mut self, edges: &[Edge], target: usize) -> Outcome {
        for edge in edges {
            self.edges_processed += 1;
            if !self.accept(edge) {
                continue;
            }
            if self.forest.component_count() == target {
                return Outcome::ReachedTarget {
                    closing: ClosingEdge {
                        edge: *edge,
                        from: self.points[edge.u],
                        to: self.points[edge.v],
                    },
                };
            }
        }
        Outcome::Exhausted {
            remaining: self.forest.component_count(),
        }
    }

    /// Consumes the first `budget` edges, cycle edges included, and reports the
    /// resulting partition.
    ///
    /// # Errors
    /// Returns `EdgeOutOfRange` if one of those edges names a missing point.
    pub fn connect_closest(mut self, edges: &[Edge], budget: usize) -> Result<BudgetReport> {
        let edges = &edges[..budget.min(edges.len())];
        check_indices(edges, self.points.len())?;

        for edge in edges {
            self.edges_processed += 1;
            self.accept(edge);
        }

        self.events.push(EventKind::BudgetSpent {
            edges_considered: self.edges_processed,
            unions: self.unions,
            components: self.forest.component_count(),
        });
        self.flush_events();

        Ok(BudgetReport {
            budget,
            edges_considered: self.edges_processed,
            unions: self.unions,
            components: self.forest.component_count(),
            component_sizes: self.forest.component_sizes(),
        })
    }

    fn accept(&mut self, edge: &Edge) -> bool {
        if !self.forest.union(edge.u, edge.v) {
            return false;
        }
        self.unions += 1;
        if self.logger.is_some() {
            self.events.push(EventKind::Union {
                u: edge.u,
                v: edge.v,
                weight: edge.weight,
                components: self.forest.component_count(),
            });
        }
        true
    }

    fn flush_events(&mut self) {
        if let Some(logger) = self.logger {
            logger.log_all(self.events.drain(..));
        }
    }
}

fn check_indices(edges: &[Edge], points: usize) -> Result<()> {
    match edges.iter().find(|e| e.u >= points || e.v >= points) {
        Some(e) => Err(ClusterError::EdgeOutOfRange { u: e.u, v: e.v, points }),
        None => Ok(()),
    }
}

/// Runs a targeted clustering over `points` and their sorted `edges`.
///
/// # Errors
/// Returns `InvalidTarget` if `target` is outside `1..=points.len()`, `EdgeOutOfRange`
/// if an edge names a missing point.
pub fn run(points: &[Point], edges: &[Edge], target: usize) -> Result<ClusterReport> {
    ClusterEngine::new(points).run(edges, target)
}

/// Connects the `budget` closest pairs of `points`.
///
/// # Errors
/// Returns `EdgeOutOfRange` if a consumed edge names a missing point.
pub fn connect_closest(points: &[Point], edges: &[Edge], budget: usize) -> Result<BudgetReport> {
    ClusterEngine::new(points).connect_closest(edges, budget)
}
