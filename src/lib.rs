pub mod model;
pub mod noise;
pub mod sim;

pub use model::{Coord, RiverSegment, SettlementState, Terrain, Tile, World, WorldSettings};
pub use sim::{DisasterKind, EventSystem, EventWeights};
