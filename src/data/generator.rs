//! Synthetic grid generation

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use crate::config::GridConfig;
use crate::data::{Node, NodeStore};

/// Generate a rectangular grid of nodes with synthetic elevation and flood risk
///
/// Elevation is a plane sloping down from the (0, 0) corner. Risk is the
/// inverse normalized elevation plus uniform noise in [-0.1, 0.1], clamped to
/// the configured range. The noise comes from a PCG generator seeded from the
/// config, so the same seed always yields the same store.
pub fn generate_grid_nodes(config: &GridConfig) -> NodeStore {
    let mut rng = Pcg64::seed_from_u64(config.seed);
    let mut nodes = Vec::with_capacity(config.cell_count());

    let elevation_span = config.elevation_max - config.elevation_min;
    let norm_x = f64::from(config.width.saturating_sub(1).max(1));
    let norm_y = f64::from(config.height.saturating_sub(1).max(1));

    let mut node_id = 0;
    for y in 0..config.height {
        for x in 0..config.width {
            let dx = f64::from(x) / norm_x;
            let dy = f64::from(y) / norm_y;
            let elevation = config.elevation_max * (1.0 - 0.5 * dx - 0.5 * dy);

            let base_risk = 1.0 - (elevation - config.elevation_min) / elevation_span;
            let noise = rng.gen_range(-0.1..=0.1);
            let risk_score = (base_risk + noise).clamp(config.risk_min, config.risk_max);

            nodes.push(Node {
                id: node_id,
                x,
                y,
                elevation,
                risk_score,
            });
            node_id += 1;
        }
    }

    NodeStore::from_nodes(nodes)
}
