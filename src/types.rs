// src/types.rs
//! Core data types shared by the graph builder and the clustering engine.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point in 3D integer space. Identified by its index in the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Point {
    #[must_use]
    pub const fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// An undirected edge between two point indices with `u < v`.
///
/// Ordering is by `(weight, u, v)`, which is the order the engine consumes edges in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// Squared Euclidean distance between the endpoints.
    pub weight: u64,
    pub u: usize,
    pub v: usize,
}

impl Edge {
    #[must_use]
    pub const fn new(u: usize, v: usize, weight: u64) -> Self {
        Self { weight, u, v }
    }

    /// Sort key used by the graph builder.
    #[must_use]
    pub const fn key(&self) -> (u64, usize, usize) {
        (self.weight, self.u, self.v)
    }
}

/// The edge whose union brought the component count down to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingEdge {
    pub edge: Edge,
    pub from: Point,
    pub to: Point,
}

impl ClosingEdge {
    #[must_use]
    pub fn weight(&self) -> u64 {
        self.edge.weight
    }

    /// Product of the X coordinates of both endpoints.
    #[must_use]
    pub fn x_product(&self) -> i128 {
        i128::from(self.from.x) * i128::from(self.to.x)
    }
}
