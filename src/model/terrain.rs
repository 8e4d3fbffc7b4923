use serde::{Deserialize, Serialize};

/// Terrain classification for a world tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Terrain {
    Plains,
    Hills,
    Mountains,
    Desert,
    Forest,
    Swamp,
    Tundra,
    Water,
}

impl Terrain {
    pub const ALL: [Terrain; 8] = [
        Terrain::Plains,
        Terrain::Hills,
        Terrain::Mountains,
        Terrain::Desert,
        Terrain::Forest,
        Terrain::Swamp,
        Terrain::Tundra,
        Terrain::Water,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Terrain::Plains => "plains",
            Terrain::Hills => "hills",
            Terrain::Mountains => "mountains",
            Terrain::Desert => "desert",
            Terrain::Forest => "forest",
            Terrain::Swamp => "swamp",
            Terrain::Tundra => "tundra",
            Terrain::Water => "water",
        }
    }

    pub fn is_water(self) -> bool {
        self == Terrain::Water
    }
}
