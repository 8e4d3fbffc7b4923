use rand::Rng;

use super::seed::coord_rng;
use crate::model::{SettlementState, World};
use crate::noise::perlin_noise;

/// Noise sampling scale: tile coordinates are compressed by this factor
/// before hitting the noise field.
const NOISE_SCALE: f64 = 0.1;

/// Floor for the pre-jitter base, keeping severity strictly positive even
/// where the noise field dips below the baseline.
const MIN_BASE: f64 = 0.05;

/// Location-dependent disaster severity, amplified by the world's
/// disaster intensity.
///
/// Unlocated settlements get a neutral base of 1.0. Located ones sample the
/// noise field at their coordinates and add a deterministic per-tile jitter
/// of at most ±10%, keyed to tile+seed rather than to any shared RNG stream,
/// so repeated queries for the same tile and seed agree.
pub fn severity(state: &SettlementState, world: &World) -> f64 {
    let base = match state.location {
        None => 1.0,
        Some(coord) => {
            let n = perlin_noise(
                coord.x as f64,
                coord.y as f64,
                world.settings.seed,
                NOISE_SCALE,
            );
            let base = (0.3 + n * 3.0).max(MIN_BASE);
            let jitter =
                coord_rng(coord.x, coord.y, world.settings.seed, "severity").random::<f64>() - 0.5;
            base * (1.0 + jitter * 0.2)
        }
    };
    base * (1.0 + world.settings.disaster_intensity)
}
