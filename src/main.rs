use anyhow::Result;
use clap::Parser;

use flood_cluster_engine::config::GridConfig;
use flood_cluster_engine::data::generator::generate_grid_nodes;
use flood_cluster_engine::engine::{ComputeRequest, Engine};
use flood_cluster_engine::storage;

#[derive(Parser, Debug)]
#[clap(
    name = "flood-cluster-engine",
    about = "MST-based flood-risk clustering over a synthetic terrain grid"
)]
struct Cli {
    /// Number of clusters to cut the spanning forest into
    #[clap(long, default_value = "5")]
    k: u32,

    /// Weight on elevation differences between adjacent nodes
    #[clap(long, default_value = "1.0")]
    elevation_weight: f64,

    /// Weight on risk-score differences between adjacent nodes
    #[clap(long, default_value = "1.0")]
    risk_weight: f64,

    /// Weight on spatial distance between adjacent nodes
    #[clap(long, default_value = "0.5")]
    distance_weight: f64,

    /// Restrict adjacency to orthogonal neighbors
    #[clap(long)]
    no_diagonals: bool,

    /// Grid width in cells
    #[clap(long, default_value = "20")]
    grid_width: u32,

    /// Grid height in cells
    #[clap(long, default_value = "20")]
    grid_height: u32,

    /// Seed for the synthetic risk noise
    #[clap(long, default_value = "42")]
    seed: u64,

    /// Output directory for results
    #[clap(long, default_value = "cluster_results")]
    output_dir: String,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    log::info!(
        "Generating {}x{} grid (seed {})",
        args.grid_width,
        args.grid_height,
        args.seed
    );
    let config = GridConfig::new(args.grid_width, args.grid_height, args.seed);
    let store = generate_grid_nodes(&config);

    let engine = Engine::new(store.clone());
    let status = engine.status();
    log::info!("Engine ready: status={}, nodes={}", status.status, status.nodes);

    let request = ComputeRequest {
        k: args.k,
        elevation_weight: args.elevation_weight,
        risk_weight: args.risk_weight,
        distance_weight: args.distance_weight,
        use_diagonals: !args.no_diagonals,
    };

    let response = engine.compute(&request)?;

    log::info!(
        "Computed {} clusters over {} forest edges",
        response.cluster_stats.len(),
        response.mst_edges.len()
    );
    for stat in &response.cluster_stats {
        log::debug!(
            "Cluster {}: {} nodes, avg elevation {:.2}, avg risk {:.3}",
            stat.cluster_id,
            stat.num_nodes,
            stat.avg_elevation,
            stat.avg_risk_score
        );
    }

    storage::save_results(&store, &response, &args.output_dir)?;

    log::info!("Clustering complete. Results saved to {}", args.output_dir);

    Ok(())
}
