//! Per-cluster statistic aggregation

use crate::cluster::{ClusterStat, Partition};
use crate::data::NodeStore;

/// Compute node count and mean elevation/risk per cluster
///
/// One entry per distinct cluster id, in ascending id order. Plain arithmetic
/// means; a singleton cluster reports its single node's values.
pub fn compute_cluster_stats(store: &NodeStore, partition: &Partition) -> Vec<ClusterStat> {
    let num_clusters = partition.num_clusters() as usize;
    let mut counts = vec![0u32; num_clusters];
    let mut elevation_sums = vec![0.0f64; num_clusters];
    let mut risk_sums = vec![0.0f64; num_clusters];

    for node in store.nodes() {
        let cluster = partition.cluster_of(node.id) as usize;
        counts[cluster] += 1;
        elevation_sums[cluster] += node.elevation;
        risk_sums[cluster] += node.risk_score;
    }

    (0..num_clusters)
        .map(|cluster| {
            // Every cluster id originates from at least one node
            let n = f64::from(counts[cluster]);
            ClusterStat {
                cluster_id: cluster as u32,
                num_nodes: counts[cluster],
                avg_elevation: elevation_sums[cluster] / n,
                avg_risk_score: risk_sums[cluster] / n,
            }
        })
        .collect()
}
