use arena_assets::{Layer, LayerSet};
use arena_core::constants::UPPER_Y;
use arena_core::LevelError;

use super::{check_layer, read_code};
use crate::def_table::DefKey;
use crate::level::Level;
use crate::voxel_def::{VoxelDefinition, WallKind};

/// Stories a MAP2 wall spans: bit 0x80 adds one, bit 0x8000 adds two.
pub fn map2_stories(code: u16) -> usize {
    match (code & 0x0080 != 0, code & 0x8000 != 0) {
        (true, true) => 4,
        (false, true) => 3,
        (true, false) => 2,
        (false, false) => 1,
    }
}

/// Upper-story walls stacked from y = 2.
pub fn decode_map2(level: &mut Level, layers: &LayerSet) -> Result<(), LevelError> {
    check_layer(level, layers, Layer::Map2)?;
    let (gw, gd) = (layers.grid_width(), layers.grid_depth());

    for x in 0..gw {
        for z in 0..gd {
            let code = read_code(&layers.map2, gw, gd, x, z);
            if code == 0 {
                continue;
            }

            let id = level.defs.get_or_create(DefKey::Map2(code), || {
                Ok(VoxelDefinition::wall(
                    i32::from(code & 0x007F) - 1,
                    WallKind::Solid,
                    None,
                ))
            })?;

            let base = UPPER_Y as i32;
            for y in base..base + map2_stories(code) as i32 {
                level.grid.set(x as i32, y, z as i32, id)?;
            }
        }
    }

    Ok(())
}
