pub mod events;
pub mod seed;
pub mod severity;
pub mod system;

pub use events::{DisasterKind, TERRAIN_SHIFT_SEVERITY};
pub use severity::severity;
pub use system::{EventSystem, EventWeights};
