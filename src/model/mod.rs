pub mod settings;
pub mod settlement;
pub mod terrain;
pub mod tile;
pub mod world;

pub use settings::WorldSettings;
pub use settlement::SettlementState;
pub use terrain::Terrain;
pub use tile::{Coord, RiverSegment, Tile};
pub use world::World;
