//! Single-linkage cut of the spanning forest into k clusters

use std::collections::HashMap;

use crate::cluster::{CutEdge, Partition};
use crate::graph::mst::DisjointSets;
use crate::graph::Edge;

/// Cut the k-1 heaviest forest edges and relabel components as clusters
///
/// Ties among equal-weight edges break on the lexicographic endpoint pair,
/// mirroring the forest computation, so repeated identical requests cut the
/// same edges. When k exceeds the achievable component count the cut simply
/// exhausts the forest; the caller observes the clamp through the number of
/// distinct cluster ids. Cluster ids are assigned densely from 0 in order of
/// first appearance during an ascending node-id sweep.
///
/// Returns the partition plus the forest edges in their original acceptance
/// order, each annotated with whether it was cut. Callers validate k >= 1.
pub fn partition_forest(node_count: usize, forest: &[Edge], k: u32) -> (Partition, Vec<CutEdge>) {
    // Heaviest-first view of the forest, without disturbing acceptance order.
    let mut order: Vec<usize> = (0..forest.len()).collect();
    order.sort_unstable_by(|&i, &j| {
        forest[j]
            .weight
            .total_cmp(&forest[i].weight)
            .then_with(|| forest[i].endpoint_key().cmp(&forest[j].endpoint_key()))
    });

    let num_cuts = (k as usize).saturating_sub(1).min(forest.len());
    let mut cut = vec![false; forest.len()];
    for &idx in order.iter().take(num_cuts) {
        cut[idx] = true;
    }

    // Each removed tree edge splits exactly one component in two.
    let mut sets = DisjointSets::new(node_count);
    for (idx, edge) in forest.iter().enumerate() {
        if !cut[idx] {
            sets.union(edge.u, edge.v);
        }
    }

    let mut root_to_cluster: HashMap<u32, u32> = HashMap::new();
    let mut labels = Vec::with_capacity(node_count);
    for node_id in 0..node_count as u32 {
        let root = sets.find(node_id);
        let next_id = root_to_cluster.len() as u32;
        let cluster_id = *root_to_cluster.entry(root).or_insert(next_id);
        labels.push(cluster_id);
    }

    let num_clusters = root_to_cluster.len() as u32;
    let annotated = forest
        .iter()
        .zip(&cut)
        .map(|(edge, &was_cut)| CutEdge {
            u: edge.u,
            v: edge.v,
            weight: edge.weight,
            cut: was_cut,
        })
        .collect();

    (Partition::new(labels, num_clusters), annotated)
}
