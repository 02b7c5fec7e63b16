//! Cluster partitioning and statistics module

pub mod partition;
pub mod stats;

use serde::{Deserialize, Serialize};

/// Dense cluster assignment for every node in the store
///
/// Labels are indexed by node id; cluster ids are contiguous from 0. The
/// number of distinct ids is the effective cluster count, which may be lower
/// than the requested k when the forest ran out of edges to cut.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    labels: Vec<u32>,
    num_clusters: u32,
}

impl Partition {
    pub(crate) fn new(labels: Vec<u32>, num_clusters: u32) -> Self {
        Self {
            labels,
            num_clusters,
        }
    }

    /// Cluster id assigned to the given node
    pub fn cluster_of(&self, node_id: u32) -> u32 {
        self.labels[node_id as usize]
    }

    /// Labels indexed by node id
    pub fn labels(&self) -> &[u32] {
        &self.labels
    }

    /// Effective number of clusters (k_effective)
    pub fn num_clusters(&self) -> u32 {
        self.num_clusters
    }

    /// Iterate (node id, cluster id) pairs in ascending node-id order
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.labels
            .iter()
            .enumerate()
            .map(|(id, &cid)| (id as u32, cid))
    }

    /// Number of labeled nodes
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True if no nodes were labeled
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Spanning-forest edge annotated with whether the k-way cut removed it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CutEdge {
    /// Smaller endpoint id
    pub u: u32,

    /// Larger endpoint id
    pub v: u32,

    /// Edge weight in the forest
    pub weight: f64,

    /// True if this edge was one of the k-1 heaviest removed
    pub cut: bool,
}

/// Aggregate statistics for one cluster
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClusterStat {
    /// Cluster identifier
    pub cluster_id: u32,

    /// Number of nodes assigned to the cluster, >= 1
    pub num_nodes: u32,

    /// Arithmetic mean elevation over the cluster's nodes
    pub avg_elevation: f64,

    /// Arithmetic mean risk score over the cluster's nodes
    pub avg_risk_score: f64,
}
