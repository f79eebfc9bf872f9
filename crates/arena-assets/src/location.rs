use arena_core::types::ClimateType;
use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Replacement name for one temple that main-quest dialogue depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainQuestTempleOverride {
    pub model_index: usize,
    pub suffix_index: usize,
    /// Position in the level's menu-name list to overwrite.
    pub menu_names_index: usize,
}

/// Everything a city or its surrounding wilderness is generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityDefinition {
    pub name: String,
    /// "City", "Town" or "Village"; substituted into some shop names.
    pub type_display_name: String,
    /// Skeleton layout the city blocks are written into.
    pub map_filename: String,
    pub city_seed: u32,
    pub wild_seed: u32,
    /// Race used for generated NPC names in shop names.
    #[serde(default)]
    pub race_id: u32,
    pub climate: ClimateType,
    pub city_blocks_per_side: usize,
    #[serde(default)]
    pub reserved_blocks: Vec<u8>,
    /// Skeleton position of the first block, in layer (column, row) order.
    pub block_start_pos: IVec2,
    #[serde(default)]
    pub coastal: bool,
    #[serde(default)]
    pub premade: bool,
    #[serde(default)]
    pub main_quest_temple_override: Option<MainQuestTempleOverride>,
}

impl CityDefinition {
    /// The city's position within its province, packed into the seed.
    pub fn local_city_point(&self) -> IVec2 {
        IVec2::new((self.city_seed >> 16) as i32, (self.city_seed & 0xFFFF) as i32)
    }
}

/// A lock as stored in a legacy level, in layer (x, y) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyLock {
    pub x: i32,
    pub y: i32,
    pub level: u8,
}
