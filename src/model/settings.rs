use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration for world generation and the event layer.
///
/// The event core reads only `seed`, `disaster_intensity`, `moisture`,
/// `plate_activity`, `weather_patterns`, and `world_changes`; the remaining
/// knobs belong to the generation pipeline that produces the world this
/// layer mutates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldSettings {
    /// RNG seed for deterministic generation and severity sampling.
    pub seed: u64,
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Relative weight of each weather label (e.g. "rain", "dry", "snow").
    pub weather_patterns: HashMap<String, f64>,
    /// Global moisture level (0.0–1.0).
    pub moisture: f64,
    /// Base elevation bias (0.0–1.0).
    pub elevation: f64,
    /// Global temperature bias (0.0–1.0).
    pub temperature: f64,
    /// Rainfall intensity multiplier.
    pub rainfall_intensity: f64,
    /// World-wide amplifier applied to every disaster severity (≥ 0).
    pub disaster_intensity: f64,
    /// Amplitude of seasonal variation.
    pub seasonal_amplitude: f64,
    /// Elevation below which tiles are ocean.
    pub sea_level: f64,
    /// Tectonic activity level; scales earthquake likelihood.
    pub plate_activity: f64,
    /// Baseline terrain height.
    pub base_height: f64,
    /// Prevailing wind strength.
    pub wind_strength: f64,
    /// Prevailing wind direction: 0=N, 1=E, 2=S, 3=W.
    pub wind_dir: u8,
    /// Temperature drop per unit elevation.
    pub lapse_rate: f64,
    /// Elevation above which mountains block moisture transport.
    pub orographic_threshold: f64,
    /// Fraction of moisture lost when crossing that threshold.
    pub orographic_factor: f64,
    /// Minimum accumulated flow for a tile to source a river.
    pub river_threshold: f64,
    /// Whether events may permanently reshape terrain.
    pub world_changes: bool,
    /// Elevation above which terrain is mountains.
    pub mountain_elev: f64,
    /// Elevation above which terrain is hills.
    pub hill_elev: f64,
    /// Temperature below which terrain is tundra.
    pub tundra_temp: f64,
    /// Rainfall below which terrain is desert.
    pub desert_rain: f64,
    /// How strongly fantastical features are favored.
    pub fantasy_level: f64,
    /// Whether the map wraps instead of ending at its edges.
    pub infinite: bool,
    /// Flow volume above which rivers may branch.
    pub river_branch_threshold: f64,
    /// Chance per segment that a qualifying river branches.
    pub river_branch_chance: f64,
    /// Inflow-to-capacity ratio at which lakes overflow.
    pub lake_overflow_fraction: f64,
    /// Inflow-to-capacity ratio at which lakes persist year-round.
    pub persistent_lake_fraction: f64,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            seed: 0,
            width: 50,
            height: 50,
            weather_patterns: HashMap::from([
                ("rain".to_string(), 0.3),
                ("dry".to_string(), 0.5),
                ("snow".to_string(), 0.2),
            ]),
            moisture: 0.5,
            elevation: 0.5,
            temperature: 0.5,
            rainfall_intensity: 0.5,
            disaster_intensity: 0.0,
            seasonal_amplitude: 0.0,
            sea_level: 0.3,
            plate_activity: 0.5,
            base_height: 0.5,
            wind_strength: 0.5,
            wind_dir: 1,
            lapse_rate: 0.3,
            orographic_threshold: 0.6,
            orographic_factor: 0.3,
            river_threshold: 0.1,
            world_changes: true,
            mountain_elev: 0.8,
            hill_elev: 0.6,
            tundra_temp: 0.25,
            desert_rain: 0.2,
            fantasy_level: 0.0,
            infinite: false,
            river_branch_threshold: 0.3,
            river_branch_chance: 0.05,
            lake_overflow_fraction: 1.5,
            persistent_lake_fraction: 1.7,
        }
    }
}

impl WorldSettings {
    /// Weight of a weather label, with a neutral fallback for missing keys
    /// so a sparse pattern map never breaks event selection.
    pub fn weather_weight(&self, label: &str) -> f64 {
        self.weather_patterns.get(label).copied().unwrap_or(0.1)
    }
}
