//! Request validation and the end-to-end compute pipeline

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cluster::partition::partition_forest;
use crate::cluster::stats::compute_cluster_stats;
use crate::cluster::{ClusterStat, CutEdge};
use crate::config;
use crate::data::{Node, NodeStore};
use crate::graph::builder::{build_grid_graph, EdgeWeights};
use crate::graph::mst::compute_spanning_forest;

/// Rejection of a malformed compute request, naming the offending field
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("k must be >= 1")]
    ClusterCountTooSmall,

    #[error("k cannot exceed number of nodes ({nodes}); got {k}")]
    ClusterCountExceedsNodes { k: u32, nodes: usize },

    #[error("{field} must be >= 0; got {value}")]
    NegativeWeight { field: &'static str, value: f64 },

    #[error("{field} must be finite; got {value}")]
    NonFiniteWeight { field: &'static str, value: f64 },
}

/// Parameters for one clustering computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComputeRequest {
    /// Requested number of clusters, >= 1
    pub k: u32,

    /// Weight on elevation differences
    pub elevation_weight: f64,

    /// Weight on risk-score differences
    pub risk_weight: f64,

    /// Weight on spatial distance
    pub distance_weight: f64,

    /// Connect diagonal grid neighbors as well as orthogonal ones
    pub use_diagonals: bool,
}

impl Default for ComputeRequest {
    fn default() -> Self {
        Self {
            k: config::DEFAULT_NUM_CLUSTERS,
            elevation_weight: config::DEFAULT_ELEVATION_WEIGHT,
            risk_weight: config::DEFAULT_RISK_WEIGHT,
            distance_weight: config::DEFAULT_DISTANCE_WEIGHT,
            use_diagonals: config::DEFAULT_USE_DIAGONALS,
        }
    }
}

/// Result of one clustering computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComputeResponse {
    /// Echo of the validated request parameters
    pub params: ComputeRequest,

    /// Node id -> cluster id, dense cluster ids from 0
    pub clusters: BTreeMap<u32, u32>,

    /// Per-cluster aggregates in ascending cluster-id order
    pub cluster_stats: Vec<ClusterStat>,

    /// The full pre-cut spanning forest in acceptance order, each edge
    /// flagged with whether the k-way cut removed it
    pub mst_edges: Vec<CutEdge>,
}

/// Process status for the health surface
#[derive(Debug, Clone, Serialize)]
pub struct EngineStatus {
    /// Fixed "ok" while the process is serving
    pub status: &'static str,

    /// Number of nodes in the store
    pub nodes: usize,
}

/// Stateless clustering engine over an immutable node store
///
/// Every computation is a pure function of the store and the request, so a
/// single engine can serve concurrent callers without locking.
#[derive(Clone)]
pub struct Engine {
    store: Arc<NodeStore>,
}

impl Engine {
    /// Wrap a node store generated at process start
    pub fn new(store: NodeStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Read-only view of the node set, stable for the process lifetime
    pub fn nodes(&self) -> &[Node] {
        self.store.nodes()
    }

    /// Health snapshot
    pub fn status(&self) -> EngineStatus {
        EngineStatus {
            status: "ok",
            nodes: self.store.len(),
        }
    }

    /// Run the full pipeline: build edges, extract the spanning forest,
    /// cut it into k clusters, and aggregate per-cluster statistics
    pub fn compute(&self, request: &ComputeRequest) -> Result<ComputeResponse, ValidationError> {
        self.validate(request)?;

        let weights = EdgeWeights {
            elevation: request.elevation_weight,
            risk: request.risk_weight,
            distance: request.distance_weight,
        };

        let edges = build_grid_graph(&self.store, &weights, request.use_diagonals);
        let forest = compute_spanning_forest(self.store.len(), &edges);
        log::debug!(
            "Spanning forest holds {} of {} candidate edges",
            forest.len(),
            edges.len()
        );

        let (partition, mst_edges) = partition_forest(self.store.len(), &forest, request.k);
        let cluster_stats = compute_cluster_stats(&self.store, &partition);
        log::info!(
            "Partitioned {} nodes into {} clusters (requested k={})",
            partition.len(),
            partition.num_clusters(),
            request.k
        );

        Ok(ComputeResponse {
            params: request.clone(),
            clusters: partition.iter().collect(),
            cluster_stats,
            mst_edges,
        })
    }

    fn validate(&self, request: &ComputeRequest) -> Result<(), ValidationError> {
        if request.k < 1 {
            return Err(ValidationError::ClusterCountTooSmall);
        }
        // An empty store still accepts any k and returns empty collections.
        if !self.store.is_empty() && request.k as usize > self.store.len() {
            return Err(ValidationError::ClusterCountExceedsNodes {
                k: request.k,
                nodes: self.store.len(),
            });
        }

        let weight_fields = [
            ("elevation_weight", request.elevation_weight),
            ("risk_weight", request.risk_weight),
            ("distance_weight", request.distance_weight),
        ];
        for (field, value) in weight_fields {
            if !value.is_finite() {
                return Err(ValidationError::NonFiniteWeight { field, value });
            }
            if value < 0.0 {
                return Err(ValidationError::NegativeWeight { field, value });
            }
        }

        Ok(())
    }
}
