use serde::{Deserialize, Serialize};

use super::tile::Coord;

/// Mutable economy of one settlement.
///
/// All counters are unsigned and damaged via `saturating_sub`, so no event
/// rule can drive them negative. `defenses` mitigates flood/raid/hurricane
/// damage and is never consumed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementState {
    pub resources: u32,
    pub population: u32,
    pub buildings: u32,
    pub defenses: u32,
    /// Anchor into the world grid; `None` means the settlement is not
    /// spatially resolved and severity falls back to its baseline.
    pub location: Option<Coord>,
}

impl Default for SettlementState {
    fn default() -> Self {
        Self {
            resources: 100,
            population: 100,
            buildings: 10,
            defenses: 0,
            location: None,
        }
    }
}

impl SettlementState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Anchor the settlement at a grid coordinate.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.location = Some(Coord::new(x, y));
        self
    }
}
