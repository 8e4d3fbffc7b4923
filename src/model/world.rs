use std::collections::HashMap;

use super::settings::WorldSettings;
use super::terrain::Terrain;
use super::tile::{Coord, RiverSegment, Tile};

/// The world grid plus its hydrology registries.
///
/// The event layer only flips flags and terrain on existing tiles; tiles are
/// created here (or by an external generation pipeline) and never destroyed.
#[derive(Debug, Clone)]
pub struct World {
    pub settings: WorldSettings,
    pub tiles: HashMap<Coord, Tile>,
    pub rivers: Vec<RiverSegment>,
    pub lakes: Vec<Coord>,
}

impl World {
    /// Build a flat `width × height` grid of plains tiles at the settings'
    /// base moisture. Terrain, rivers, and lakes come from the generation
    /// pipeline (or from tests) afterwards.
    pub fn new(settings: WorldSettings) -> Self {
        let mut tiles = HashMap::new();
        for y in 0..settings.height as i32 {
            for x in 0..settings.width as i32 {
                let coord = Coord::new(x, y);
                tiles.insert(coord, Tile::new(coord, Terrain::Plains, settings.moisture));
            }
        }
        Self {
            settings,
            tiles,
            rivers: Vec::new(),
            lakes: Vec::new(),
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Option<&Tile> {
        self.tiles.get(&Coord::new(x, y))
    }

    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut Tile> {
        self.tiles.get_mut(&Coord::new(x, y))
    }

    /// Insert or replace a tile. Used by generation and by tests that need
    /// bespoke terrain at specific coordinates.
    pub fn insert_tile(&mut self, tile: Tile) {
        self.tiles.insert(tile.coord, tile);
    }

    /// Cut every river segment touching `coord` and register the stranded
    /// water as a lake (deduplicated).
    pub fn sever_river_at(&mut self, coord: Coord) {
        self.rivers.retain(|seg| !seg.touches(coord));
        if !self.lakes.contains(&coord) {
            self.lakes.push(coord);
        }
    }

    /// Remove `coord` from the lake registry.
    pub fn drain_lake_at(&mut self, coord: Coord) {
        self.lakes.retain(|c| *c != coord);
    }
}
