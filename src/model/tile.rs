use serde::{Deserialize, Serialize};

use super::terrain::Terrain;

/// Integer tile coordinate in the world grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// One directed stretch of a river between two tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiverSegment {
    pub start: Coord,
    pub end: Coord,
}

impl RiverSegment {
    /// Whether this segment touches the given coordinate at either end.
    pub fn touches(&self, coord: Coord) -> bool {
        self.start == coord || self.end == coord
    }
}

/// A single cell of the world grid: terrain plus hydrology and damage flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tile {
    pub coord: Coord,
    pub terrain: Terrain,
    pub moisture: f64,
    pub flooded: bool,
    pub ruined: bool,
    pub river: bool,
    pub lake: bool,
}

impl Tile {
    pub fn new(coord: Coord, terrain: Terrain, moisture: f64) -> Self {
        Self {
            coord,
            terrain,
            moisture,
            flooded: false,
            ruined: false,
            river: false,
            lake: false,
        }
    }
}
