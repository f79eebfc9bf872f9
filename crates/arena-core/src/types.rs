use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Index into a level's voxel definition table. 0 is always air.
pub type VoxelId = u16;

/// Position on the XZ plane of a level grid.
pub type GridPos = IVec2;

/// Coordinate in the legacy (x, y) layout, where the axes are swapped
/// relative to the level grid.
pub type OriginalPos = IVec2;

/// Kind of level being decoded. Several decode tables are world-type specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorldType {
    City,
    Interior,
    Wilderness,
}

impl WorldType {
    /// Whether *MENU ids resolve through the city table.
    pub fn is_city(self) -> bool {
        self == WorldType::City
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClimateType {
    Temperate,
    Desert,
    Mountain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WeatherType {
    Clear,
    Overcast,
    Rain,
    Snow,
    SnowOvercast,
    Rain2,
    Overcast2,
    SnowOvercast2,
}
