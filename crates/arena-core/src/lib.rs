pub mod constants;
pub mod coords;
pub mod direction;
pub mod error;
pub mod random;
pub mod types;

pub use direction::{CardinalDirection, Facing};
pub use error::LevelError;
pub use random::ArenaRandom;
pub use types::{ClimateType, GridPos, VoxelId, WeatherType, WorldType};
