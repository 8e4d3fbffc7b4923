//! The five disaster variants and their damage / terrain-mutation rules.
//!
//! Every rule damages the settlement first, then mutates the world tile only
//! when the settlement is located, `world_changes` is enabled, and the tile
//! lookup succeeds. Mutations beyond the baseline flags (flooded, ruined,
//! moisture) are gated on severity exceeding [`TERRAIN_SHIFT_SEVERITY`] and
//! each variant hardcodes its own before/after terrain pairs.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::seed::coord_rng;
use super::severity::severity;
use crate::model::{SettlementState, Terrain, World};

/// Severity above which a disaster permanently reshapes terrain.
pub const TERRAIN_SHIFT_SEVERITY: f64 = 1.3;

/// The closed set of disasters the scheduler can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisasterKind {
    Flood,
    Drought,
    Raid,
    Earthquake,
    Hurricane,
}

impl DisasterKind {
    pub const ALL: [DisasterKind; 5] = [
        DisasterKind::Flood,
        DisasterKind::Drought,
        DisasterKind::Raid,
        DisasterKind::Earthquake,
        DisasterKind::Hurricane,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DisasterKind::Flood => "flood",
            DisasterKind::Drought => "drought",
            DisasterKind::Raid => "raid",
            DisasterKind::Earthquake => "earthquake",
            DisasterKind::Hurricane => "hurricane",
        }
    }

    /// Apply this disaster to a settlement, mutating the world tile at its
    /// location when terrain changes are enabled.
    pub fn apply(self, state: &mut SettlementState, world: &mut World) {
        let sev = severity(state, world);
        tracing::debug!(kind = self.as_str(), severity = sev, "applying disaster");
        match self {
            DisasterKind::Flood => apply_flood(state, world, sev),
            DisasterKind::Drought => apply_drought(state, world, sev),
            DisasterKind::Raid => apply_raid(state, world, sev),
            DisasterKind::Earthquake => apply_earthquake(state, world, sev),
            DisasterKind::Hurricane => apply_hurricane(state, world, sev),
        }
    }
}

fn apply_flood(state: &mut SettlementState, world: &mut World, sev: f64) {
    // Surge term: 0 or 1, keyed to the tile so reruns agree.
    let (sx, sy) = state.location.map(|c| (c.x, c.y)).unwrap_or((0, 0));
    let surge: i64 = coord_rng(sx, sy, world.settings.seed, "flood_surge").random_range(0..=1);

    let raw = (0.3 * state.buildings as f64 * sev).round() as i64 - state.defenses as i64 + surge;
    let loss = raw.clamp(0, i64::from(u32::MAX)) as u32;
    state.buildings = state.buildings.saturating_sub(loss);

    let res_loss = ((loss as f64 * 2.0 * sev).round() as u32).min(state.resources);
    state.resources -= res_loss;

    let Some(coord) = state.location else { return };
    if !world.settings.world_changes {
        return;
    }
    let Some(tile) = world.get_mut(coord.x, coord.y) else {
        return;
    };
    tile.flooded = true;
    if sev > TERRAIN_SHIFT_SEVERITY {
        let severed = tile.river;
        if severed {
            tile.river = false;
            tile.lake = true;
            tile.terrain = Terrain::Water;
        }
        // A drowned hill rises instead of sinking; anything else goes under.
        if tile.terrain == Terrain::Hills {
            tile.terrain = Terrain::Mountains;
        } else {
            tile.terrain = Terrain::Water;
            tile.lake = true;
        }
        if severed {
            world.sever_river_at(coord);
        }
    }
}

fn apply_drought(state: &mut SettlementState, world: &mut World, sev: f64) {
    let res_loss = (0.2 * state.resources as f64 * sev) as u32;
    state.resources = state.resources.saturating_sub(res_loss);
    let pop_loss = (0.1 * state.population as f64 * sev) as u32;
    state.population = state.population.saturating_sub(pop_loss);

    let Some(coord) = state.location else { return };
    if !world.settings.world_changes {
        return;
    }
    let Some(tile) = world.get_mut(coord.x, coord.y) else {
        return;
    };
    tile.moisture = (tile.moisture - 0.1 * sev).max(0.0);
    if sev > TERRAIN_SHIFT_SEVERITY {
        if tile.lake {
            tile.lake = false;
            tile.terrain = Terrain::Plains;
            world.drain_lake_at(coord);
        } else {
            tile.terrain = Terrain::Desert;
        }
    }
}

fn apply_raid(state: &mut SettlementState, world: &mut World, sev: f64) {
    // Severity is unbounded above, so the raid strength arithmetic stays in
    // wide integers and saturates instead of overflowing.
    let effective = (((5.0 - state.defenses as f64) * sev).floor() as i64).max(1) as u64;
    let res_loss = effective.saturating_mul(3).min(state.resources as u64) as u32;
    state.resources -= res_loss;
    state.buildings = (state.buildings as u64).saturating_sub(effective - 1) as u32;

    let Some(coord) = state.location else { return };
    if !world.settings.world_changes {
        return;
    }
    let Some(tile) = world.get_mut(coord.x, coord.y) else {
        return;
    };
    tile.ruined = true;
    if sev > TERRAIN_SHIFT_SEVERITY {
        state.buildings = 0;
        if tile.terrain == Terrain::Hills {
            tile.terrain = Terrain::Mountains;
        }
    }
}

fn apply_earthquake(state: &mut SettlementState, world: &mut World, sev: f64) {
    let bld_loss = (0.4 * state.buildings as f64 * sev) as u32;
    state.buildings = state.buildings.saturating_sub(bld_loss);
    let pop_loss = (0.2 * state.population as f64 * sev) as u32;
    state.population = state.population.saturating_sub(pop_loss);

    let Some(coord) = state.location else { return };
    if !world.settings.world_changes {
        return;
    }
    if let Some(tile) = world.get_mut(coord.x, coord.y)
        && sev > TERRAIN_SHIFT_SEVERITY
    {
        tile.terrain = Terrain::Mountains;
    }
}

fn apply_hurricane(state: &mut SettlementState, world: &mut World, sev: f64) {
    let raw = (0.3 * state.buildings as f64 * sev) as i64 - state.defenses as i64;
    let loss = raw.clamp(0, i64::from(u32::MAX)) as u32;
    state.buildings = state.buildings.saturating_sub(loss);

    let res_loss = ((state.resources as f64 * 0.3 * sev) as u32).min(state.resources);
    state.resources -= res_loss;

    let Some(coord) = state.location else { return };
    if !world.settings.world_changes {
        return;
    }
    let Some(tile) = world.get_mut(coord.x, coord.y) else {
        return;
    };
    tile.flooded = true;
    if sev > TERRAIN_SHIFT_SEVERITY {
        let severed = tile.river;
        if severed {
            tile.river = false;
        }
        tile.terrain = Terrain::Water;
        tile.lake = true;
        if severed {
            world.sever_river_at(coord);
        }
    }
}
