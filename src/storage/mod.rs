//! Result persistence for the CLI

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use itertools::Itertools;
use serde_json::{json, to_string_pretty};

use crate::data::NodeStore;
use crate::engine::ComputeResponse;

/// Save the node set and clustering result to the output directory
pub fn save_results(store: &NodeStore, response: &ComputeResponse, output_dir: &str) -> Result<()> {
    log::info!(
        "Saving {} clusters to {}",
        response.cluster_stats.len(),
        output_dir
    );

    fs::create_dir_all(output_dir)?;

    save_nodes(store, output_dir)?;
    save_response(response, output_dir)?;
    save_summary(store, response, output_dir)?;
    save_stats_csv(response, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save the full node enumeration
fn save_nodes(store: &NodeStore, output_dir: &str) -> Result<()> {
    let path = Path::new(output_dir).join("nodes.json");
    let mut file = File::create(path)?;

    let payload = json!({ "nodes": store.nodes() });
    file.write_all(to_string_pretty(&payload)?.as_bytes())?;

    Ok(())
}

/// Save the complete compute response (clusters, stats, forest edges)
fn save_response(response: &ComputeResponse, output_dir: &str) -> Result<()> {
    let path = Path::new(output_dir).join("result.json");
    let mut file = File::create(path)?;

    file.write_all(to_string_pretty(response)?.as_bytes())?;

    Ok(())
}

/// Save summary information
fn save_summary(store: &NodeStore, response: &ComputeResponse, output_dir: &str) -> Result<()> {
    let path = Path::new(output_dir).join("summary.json");
    let mut file = File::create(path)?;

    let cut_count = response.mst_edges.iter().filter(|e| e.cut).count();
    let size_range = response
        .cluster_stats
        .iter()
        .map(|s| s.num_nodes)
        .minmax()
        .into_option();

    let summary = json!({
        "node_count": store.len(),
        "forest_edge_count": response.mst_edges.len(),
        "cut_edge_count": cut_count,
        "requested_k": response.params.k,
        "effective_k": response.cluster_stats.len(),
        "smallest_cluster_size": size_range.map(|(min, _)| min),
        "largest_cluster_size": size_range.map(|(_, max)| max),
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save cluster statistics as CSV for external plotting
fn save_stats_csv(response: &ComputeResponse, output_dir: &str) -> Result<()> {
    let path = Path::new(output_dir).join("cluster_stats.csv");
    let mut file = File::create(path)?;

    writeln!(file, "cluster_id,num_nodes,avg_elevation,avg_risk_score")?;
    for stat in &response.cluster_stats {
        writeln!(
            file,
            "{},{},{:.6},{:.6}",
            stat.cluster_id, stat.num_nodes, stat.avg_elevation, stat.avg_risk_score
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::data::generator::generate_grid_nodes;
    use crate::engine::{ComputeRequest, Engine};

    #[test]
    fn writes_all_result_files() {
        let store = generate_grid_nodes(&GridConfig::new(4, 4, 42));
        let engine = Engine::new(store.clone());
        let response = engine
            .compute(&ComputeRequest {
                k: 3,
                ..ComputeRequest::default()
            })
            .unwrap();

        let dir = std::env::temp_dir().join("flood-cluster-storage-test");
        let dir_str = dir.to_str().unwrap();
        save_results(&store, &response, dir_str).unwrap();

        for name in ["nodes.json", "result.json", "summary.json", "cluster_stats.csv"] {
            assert!(dir.join(name).exists(), "missing {name}");
        }

        let result: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.join("result.json")).unwrap()).unwrap();
        assert_eq!(result["clusters"].as_object().unwrap().len(), 16);
        assert_eq!(result["cluster_stats"].as_array().unwrap().len(), 3);

        fs::remove_dir_all(dir).unwrap();
    }
}
