use arena_assets::InfData;
use arena_core::constants::UPPER_Y;
use arena_core::LevelError;

use crate::def_table::DefKey;
use crate::level::Level;
use crate::voxel_def::VoxelDefinition;

/// Texture used when the INF has no *CEILING texture.
const DEFAULT_CEILING_TEXTURE: i32 = 1;

/// Fill y = 2 with the INF ceiling. Used by interiors without MAP2 data.
pub fn decode_ceiling(level: &mut Level, inf: &InfData) -> Result<(), LevelError> {
    let texture = inf
        .ceiling
        .texture_index
        .unwrap_or(DEFAULT_CEILING_TEXTURE);
    let id = level
        .defs
        .get_or_create(DefKey::Ceiling(texture), || Ok(VoxelDefinition::Ceiling { texture }))?;

    for x in 0..level.grid.width() as i32 {
        for z in 0..level.grid.depth() as i32 {
            level.grid.set(x, UPPER_Y as i32, z, id)?;
        }
    }
    Ok(())
}
