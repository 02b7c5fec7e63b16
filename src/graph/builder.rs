//! Grid graph construction and edge weighting

use std::collections::HashMap;

use rayon::prelude::*;

use crate::data::{Node, NodeStore};
use crate::graph::Edge;

/// Non-negative coefficients combining the three edge-weight factors
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeWeights {
    /// Coefficient on |elevation(a) - elevation(b)|
    pub elevation: f64,

    /// Coefficient on |risk(a) - risk(b)|
    pub risk: f64,

    /// Coefficient on the euclidean grid distance between a and b
    pub distance: f64,
}

const ORTHOGONAL_OFFSETS: [(i64, i64); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];
const DIAGONAL_OFFSETS: [(i64, i64); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Build the weighted adjacency edge set over the grid
///
/// Two nodes are adjacent when their coordinates differ by at most 1 in each
/// axis (Chebyshev distance 1) with diagonals enabled, or by exactly 1 in one
/// axis otherwise. Each undirected edge is emitted once, with `u < v`. Grid
/// cells without a node simply produce no edges.
pub fn build_grid_graph(store: &NodeStore, weights: &EdgeWeights, use_diagonals: bool) -> Vec<Edge> {
    let coord_to_id: HashMap<(i64, i64), u32> = store
        .nodes()
        .iter()
        .map(|n| ((i64::from(n.x), i64::from(n.y)), n.id))
        .collect();

    let mut offsets: Vec<(i64, i64)> = ORTHOGONAL_OFFSETS.to_vec();
    if use_diagonals {
        offsets.extend_from_slice(&DIAGONAL_OFFSETS);
    }

    // Parallel over nodes; the ordered collect keeps edge order deterministic.
    let edges: Vec<Edge> = store
        .nodes()
        .par_iter()
        .flat_map_iter(|node| {
            let coord_to_id = &coord_to_id;
            let offsets = &offsets;
            offsets.iter().filter_map(move |&(dx, dy)| {
                let neighbor = (i64::from(node.x) + dx, i64::from(node.y) + dy);
                let &v_id = coord_to_id.get(&neighbor)?;
                // Only emit in one direction to avoid duplicate undirected edges
                if node.id < v_id {
                    let v = store.get(v_id)?;
                    Some(Edge {
                        u: node.id,
                        v: v_id,
                        weight: edge_weight(node, v, weights),
                    })
                } else {
                    None
                }
            })
        })
        .collect();

    log::debug!(
        "Built {} edges over {} nodes (diagonals: {})",
        edges.len(),
        store.len(),
        use_diagonals
    );

    edges
}

/// Weighted sum of elevation difference, risk difference, and grid distance
pub fn edge_weight(a: &Node, b: &Node, weights: &EdgeWeights) -> f64 {
    let d_elev = (a.elevation - b.elevation).abs();
    let d_risk = (a.risk_score - b.risk_score).abs();

    let dx = f64::from(a.x) - f64::from(b.x);
    let dy = f64::from(a.y) - f64::from(b.y);
    let dist = (dx * dx + dy * dy).sqrt();

    weights.elevation * d_elev + weights.risk * d_risk + weights.distance * dist
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u32, x: u32, y: u32, elevation: f64, risk_score: f64) -> Node {
        Node {
            id,
            x,
            y,
            elevation,
            risk_score,
        }
    }

    fn flat_store(coords: &[(u32, u32)]) -> NodeStore {
        let nodes = coords
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| node(id as u32, x, y, 0.0, 0.0))
            .collect();
        NodeStore::from_nodes(nodes)
    }

    const UNIT: EdgeWeights = EdgeWeights {
        elevation: 1.0,
        risk: 1.0,
        distance: 1.0,
    };

    #[test]
    fn orthogonal_two_by_two_has_four_edges() {
        let store = flat_store(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let edges = build_grid_graph(&store, &UNIT, false);

        let mut pairs: Vec<(u32, u32)> = edges.iter().map(Edge::endpoint_key).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn diagonals_add_the_two_cross_edges() {
        let store = flat_store(&[(0, 0), (1, 0), (0, 1), (1, 1)]);
        let edges = build_grid_graph(&store, &UNIT, true);

        let mut pairs: Vec<(u32, u32)> = edges.iter().map(Edge::endpoint_key).collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn absent_cells_are_skipped() {
        // Two nodes two cells apart: no adjacency, no edges.
        let store = flat_store(&[(0, 0), (2, 0)]);
        let edges = build_grid_graph(&store, &UNIT, true);
        assert!(edges.is_empty());
    }

    #[test]
    fn weight_combines_all_three_factors() {
        let a = node(0, 0, 0, 10.0, 0.1);
        let b = node(1, 1, 0, 12.0, 0.2);

        let w = edge_weight(&a, &b, &UNIT);
        assert!((w - 3.1).abs() < 1e-9);
    }

    #[test]
    fn zero_coefficients_disable_factors() {
        let a = node(0, 0, 0, 10.0, 0.1);
        let b = node(1, 1, 0, 12.0, 0.2);

        let only_elevation = EdgeWeights {
            elevation: 1.0,
            risk: 0.0,
            distance: 0.0,
        };
        assert!((edge_weight(&a, &b, &only_elevation) - 2.0).abs() < 1e-9);

        let all_zero = EdgeWeights {
            elevation: 0.0,
            risk: 0.0,
            distance: 0.0,
        };
        assert_eq!(edge_weight(&a, &b, &all_zero), 0.0);
    }

    #[test]
    fn diagonal_distance_is_euclidean() {
        let a = node(0, 0, 0, 0.0, 0.0);
        let b = node(1, 1, 1, 0.0, 0.0);

        let only_distance = EdgeWeights {
            elevation: 0.0,
            risk: 0.0,
            distance: 1.0,
        };
        assert!((edge_weight(&a, &b, &only_distance) - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_store_builds_no_edges() {
        let store = NodeStore::from_nodes(Vec::new());
        assert!(build_grid_graph(&store, &UNIT, true).is_empty());
    }
}
