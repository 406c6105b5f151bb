// src/graph.rs
//! Complete-graph construction over a point set.
//!
//! Every unordered pair of points becomes one edge weighted by squared
//! Euclidean distance. Edges come back sorted by `(weight, u, v)`, so equal
//! weights are always consumed in the same order regardless of how the list
//! was generated.

use crate::error::{ClusterError, Result};
use crate::types::{Edge, Point};
use rayon::prelude::*;

/// Options for edge generation.
#[derive(Debug, Clone, Copy)]
pub struct BuildOptions {
    /// Generate and sort edges on the rayon thread pool.
    pub parallel: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Squared Euclidean distance, or `None` if it does not fit in `u64`.
#[must_use]
pub fn squared_distance(a: &Point, b: &Point) -> Option<u64> {
    let dx = axis_square(a.x, b.x)?;
    let dy = axis_square(a.y, b.y)?;
    let dz = axis_square(a.z, b.z)?;
    dx.checked_add(dy)?.checked_add(dz)
}

fn axis_square(a: i64, b: i64) -> Option<u64> {
    let delta = (i128::from(a) - i128::from(b)).unsigned_abs();
    let delta = u64::try_from(delta).ok()?;
    delta.checked_mul(delta)
}

/// Builds the sorted edge list with default options.
///
/// # Errors
/// Returns `CoordinateOverflow` if some squared distance does not fit in `u64`.
pub fn build_edges(points: &[Point]) -> Result<Vec<Edge>> {
    build_edges_with(points, BuildOptions::default())
}

/// Builds the sorted edge list of the complete graph over `points`.
///
/// Produces `n * (n - 1) / 2` edges; fewer than two points yield an empty list.
///
/// # Errors
/// Returns `CoordinateOverflow` naming the first overflowing pair in `(u, v)` order.
pub fn build_edges_with(points: &[Point], options: BuildOptions) -> Result<Vec<Edge>> {
    if points.len() < 2 {
        return Ok(Vec::new());
    }

    // The bounding box caps every pairwise distance. When even that cap overflows,
    // generate sequentially so the reported pair is the first one.
    if options.parallel && bounding_weight(points).is_some() {
        let mut edges = pairs_parallel(points)?;
        edges.par_sort_unstable();
        Ok(edges)
    } else {
        let mut edges = pairs_sequential(points)?;
        edges.sort_unstable();
        Ok(edges)
    }
}

/// Number of edges in the complete graph over `n` points.
#[must_use]
pub fn edge_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

fn pairs_sequential(points: &[Point]) -> Result<Vec<Edge>> {
    let mut edges = Vec::with_capacity(edge_count(points.len()));
    for (u, a) in points.iter().enumerate() {
        for (offset, b) in points[u + 1..].iter().enumerate() {
            let v = u + 1 + offset;
            let weight =
                squared_distance(a, b).ok_or(ClusterError::CoordinateOverflow { u, v })?;
            edges.push(Edge::new(u, v, weight));
        }
    }
    Ok(edges)
}

fn pairs_parallel(points: &[Point]) -> Result<Vec<Edge>> {
    (0..points.len())
        .into_par_iter()
        .flat_map_iter(|u| {
            let a = points[u];
            (u + 1..points.len()).map(move |v| {
                squared_distance(&a, &points[v])
                    .map(|weight| Edge::new(u, v, weight))
                    .ok_or(ClusterError::CoordinateOverflow { u, v })
            })
        })
        .collect()
}

/// Squared diagonal of the bounding box, an upper bound on every edge weight.
fn bounding_weight(points: &[Point]) -> Option<u64> {
    let first = points.first()?;
    let (mut lo, mut hi) = (*first, *first);
    for p in points {
        lo = Point::new(lo.x.min(p.x), lo.y.min(p.y), lo.z.min(p.z));
        hi = Point::new(hi.x.max(p.x), hi.y.max(p.y), hi.z.max(p.z));
    }
    squared_distance(&lo, &hi)
}
