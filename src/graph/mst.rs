//! Kruskal spanning-forest computation over union-find

use crate::graph::Edge;

/// Array-backed Union-Find with path compression and union by size
pub struct DisjointSets {
    /// Parent pointers (parent[i] = parent of node i)
    parent: Vec<u32>,

    /// Size of the set rooted at each node
    size: Vec<u32>,
}

impl DisjointSets {
    /// Create a structure with every node in its own set
    pub fn new(count: usize) -> Self {
        let mut parent = Vec::with_capacity(count);
        let mut size = Vec::with_capacity(count);

        for i in 0..count {
            parent.push(i as u32);
            size.push(1);
        }

        Self { parent, size }
    }

    /// Find the root of the set containing x, compressing the path
    pub fn find(&mut self, x: u32) -> u32 {
        let px = self.parent[x as usize];
        if px != x {
            self.parent[x as usize] = self.find(px);
        }
        self.parent[x as usize]
    }

    /// Merge the sets containing x and y; returns false if already merged
    pub fn union(&mut self, x: u32, y: u32) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false;
        }

        // Attach the smaller tree under the root of the larger one
        let size_x = self.size[root_x as usize];
        let size_y = self.size[root_y as usize];

        if size_x > size_y {
            self.parent[root_y as usize] = root_x;
            self.size[root_x as usize] += size_y;
        } else {
            self.parent[root_x as usize] = root_y;
            self.size[root_y as usize] += size_x;
        }

        true
    }

    /// Size of the set containing x
    pub fn size(&mut self, x: u32) -> u32 {
        let root = self.find(x);
        self.size[root as usize]
    }

    /// Whether a and b currently share a set
    pub fn same_set(&mut self, a: u32, b: u32) -> bool {
        self.find(a) == self.find(b)
    }
}

/// Compute the minimum spanning forest of the edge set
///
/// Edges are processed ascending by weight, ties broken by the lexicographic
/// (min id, max id) endpoint pair, so the forest is identical for identical
/// inputs regardless of the edge list's traversal order. One tree per
/// connected component; a disconnected or empty graph is not an error.
pub fn compute_spanning_forest(node_count: usize, edges: &[Edge]) -> Vec<Edge> {
    let mut sorted: Vec<Edge> = edges.to_vec();
    sorted.sort_unstable_by(|a, b| {
        a.weight
            .total_cmp(&b.weight)
            .then_with(|| a.endpoint_key().cmp(&b.endpoint_key()))
    });

    let mut sets = DisjointSets::new(node_count);
    let mut forest = Vec::new();

    for edge in sorted {
        if sets.union(edge.u, edge.v) {
            forest.push(edge);
            // A spanning tree of the whole graph can hold no further edges
            if forest.len() + 1 == node_count {
                break;
            }
        }
    }

    forest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(u: u32, v: u32, weight: f64) -> Edge {
        Edge::new(u, v, weight)
    }

    #[test]
    fn connected_graph_yields_n_minus_one_edges() {
        let edges = vec![
            edge(0, 1, 1.0),
            edge(1, 2, 2.0),
            edge(0, 2, 3.0),
            edge(2, 3, 1.5),
            edge(1, 3, 4.0),
        ];

        let forest = compute_spanning_forest(4, &edges);
        assert_eq!(forest.len(), 3);

        // The accepted edges contain no cycle and span all nodes.
        let mut sets = DisjointSets::new(4);
        for e in &forest {
            assert!(sets.union(e.u, e.v));
        }
        assert_eq!(sets.size(0), 4);
    }

    #[test]
    fn disconnected_graph_yields_one_tree_per_component() {
        let edges = vec![edge(0, 1, 1.0), edge(2, 3, 1.0)];

        let forest = compute_spanning_forest(4, &edges);
        assert_eq!(forest.len(), 2);

        let mut sets = DisjointSets::new(4);
        for e in &forest {
            sets.union(e.u, e.v);
        }
        assert!(sets.same_set(0, 1));
        assert!(sets.same_set(2, 3));
        assert!(!sets.same_set(1, 2));
    }

    #[test]
    fn picks_lighter_edges_first() {
        let edges = vec![edge(0, 1, 10.0), edge(1, 2, 1.0), edge(0, 2, 2.0)];

        let forest = compute_spanning_forest(3, &edges);
        let total: f64 = forest.iter().map(|e| e.weight).sum();
        assert_eq!(forest.len(), 2);
        assert!((total - 3.0).abs() < 1e-12);
    }

    #[test]
    fn ties_break_on_endpoint_pairs() {
        // All weights equal: the forest must prefer lexicographically
        // smaller endpoint pairs, whatever the input order.
        let edges = vec![edge(1, 2, 1.0), edge(0, 2, 1.0), edge(0, 1, 1.0)];
        let reversed: Vec<Edge> = edges.iter().rev().copied().collect();

        let a = compute_spanning_forest(3, &edges);
        let b = compute_spanning_forest(3, &reversed);

        assert_eq!(a, b);
        assert_eq!(a[0].endpoint_key(), (0, 1));
        assert_eq!(a[1].endpoint_key(), (0, 2));
    }

    #[test]
    fn zero_weight_edges_are_valid() {
        let edges = vec![edge(0, 1, 0.0), edge(1, 2, 0.0), edge(0, 2, 0.0)];

        let forest = compute_spanning_forest(3, &edges);
        assert_eq!(forest.len(), 2);
        assert_eq!(forest[0].endpoint_key(), (0, 1));
    }

    #[test]
    fn empty_input_yields_empty_forest() {
        assert!(compute_spanning_forest(0, &[]).is_empty());
        assert!(compute_spanning_forest(5, &[]).is_empty());
    }
}
