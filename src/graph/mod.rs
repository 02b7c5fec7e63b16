//! Graph representation and algorithms module

pub mod builder;
pub mod mst;

use serde::{Deserialize, Serialize};

/// Undirected weighted edge between two adjacent sample points
///
/// Endpoints are stored with `u < v` so each undirected edge has a single
/// canonical form.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Smaller endpoint id
    pub u: u32,

    /// Larger endpoint id
    pub v: u32,

    /// Derived scalar weight, >= 0 for valid inputs
    pub weight: f64,
}

impl Edge {
    /// Create an edge, normalizing endpoint order
    pub fn new(a: u32, b: u32, weight: f64) -> Self {
        let (u, v) = if a <= b { (a, b) } else { (b, a) };
        Self { u, v, weight }
    }

    /// Lexicographic endpoint pair used for deterministic tie-breaking
    pub fn endpoint_key(&self) -> (u32, u32) {
        (self.u, self.v)
    }
}
