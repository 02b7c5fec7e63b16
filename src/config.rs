//! Configuration for the flood clustering engine

/// Default number of clusters when a request leaves `k` unset
pub const DEFAULT_NUM_CLUSTERS: u32 = 5;

/// Default weight applied to elevation differences
pub const DEFAULT_ELEVATION_WEIGHT: f64 = 1.0;

/// Default weight applied to risk-score differences
pub const DEFAULT_RISK_WEIGHT: f64 = 1.0;

/// Default weight applied to spatial distance
pub const DEFAULT_DISTANCE_WEIGHT: f64 = 0.5;

/// Whether diagonal grid neighbors are connected by default
pub const DEFAULT_USE_DIAGONALS: bool = true;

/// Grid dimensions and synthetic-terrain ranges
#[derive(Debug, Clone)]
pub struct GridConfig {
    /// Number of grid columns
    pub width: u32,

    /// Number of grid rows
    pub height: u32,

    /// Lowest elevation on the synthetic terrain
    pub elevation_min: f64,

    /// Highest elevation on the synthetic terrain
    pub elevation_max: f64,

    /// Lower clamp for risk scores
    pub risk_min: f64,

    /// Upper clamp for risk scores
    pub risk_max: f64,

    /// Seed for the risk-noise generator
    pub seed: u64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            elevation_min: 0.0,
            elevation_max: 100.0,
            risk_min: 0.0,
            risk_max: 1.0,
            seed: 42,
        }
    }
}

impl GridConfig {
    /// Create a configuration with custom grid dimensions and seed
    pub fn new(width: u32, height: u32, seed: u64) -> Self {
        Self {
            width,
            height,
            seed,
            ..Self::default()
        }
    }

    /// Total number of grid cells
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
