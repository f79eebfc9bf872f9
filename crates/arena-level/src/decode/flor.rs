use arena_assets::{InfData, Layer, LayerSet};
use arena_core::constants::{DRY_CHASM, FLOOR_Y, LAVA_CHASM, WET_CHASM};
use arena_core::{GridPos, LevelError};

use super::{check_layer, read_code};
use crate::def_table::DefKey;
use crate::level::Level;
use crate::voxel_def::{ChasmAdjacency, ChasmKind, VoxelDefinition};

fn chasm_kind(texture: u16) -> Option<ChasmKind> {
    match texture {
        DRY_CHASM => Some(ChasmKind::Dry),
        WET_CHASM => Some(ChasmKind::Wet),
        LAVA_CHASM => Some(ChasmKind::Lava),
        _ => None,
    }
}

fn is_chasm(code: u16) -> bool {
    chasm_kind((code & 0xFF00) >> 8).is_some()
}

/// A side is "open" when the neighbour there is solid floor.
fn chasm_adjacency(codes: &[u16], gw: usize, gd: usize, x: usize, z: usize) -> ChasmAdjacency {
    let floor_at = |nx: usize, nz: usize| !is_chasm(read_code(codes, gw, gd, nx, nz));
    ChasmAdjacency {
        north: floor_at((x + 1).min(gw - 1), z),
        east: floor_at(x, (z + 1).min(gd - 1)),
        south: floor_at(x.saturating_sub(1), z),
        west: floor_at(x, z.saturating_sub(1)),
    }
}

fn chasm_texture(inf: &InfData, kind: ChasmKind) -> i32 {
    let id = match kind {
        ChasmKind::Dry => inf.dry_chasm,
        ChasmKind::Wet => inf.wet_chasm,
        ChasmKind::Lava => inf.lava_chasm,
    };
    id.unwrap_or_else(|| {
        log::warn!("Missing {:?} chasm id in {}, using 0", kind, inf.name);
        0
    })
}

/// Floors and chasms at y = 0, plus flat placements from the low byte.
pub fn decode_flor(level: &mut Level, layers: &LayerSet, inf: &InfData) -> Result<(), LevelError> {
    check_layer(level, layers, Layer::Flor)?;
    let (gw, gd) = (layers.grid_width(), layers.grid_depth());
    let codes = &layers.flor;

    for x in 0..gw {
        for z in 0..gd {
            let code = read_code(codes, gw, gd, x, z);
            let texture = (code & 0xFF00) >> 8;

            let id = match chasm_kind(texture) {
                Some(kind) => {
                    let adjacency = chasm_adjacency(codes, gw, gd, x, z);
                    level.defs.get_or_create(DefKey::Chasm(code, adjacency), || {
                        Ok(VoxelDefinition::Chasm {
                            texture: chasm_texture(inf, kind),
                            kind,
                            adjacency,
                        })
                    })?
                }
                None => level.defs.get_or_create(DefKey::Floor(code), || {
                    Ok(VoxelDefinition::Floor {
                        texture: i32::from(texture),
                    })
                })?,
            };
            level.grid.set(x as i32, FLOOR_Y as i32, z as i32, id)?;

            let flat = code & 0x00FF;
            if flat > 0 {
                level
                    .flats
                    .add(i32::from(flat) - 1, GridPos::new(x as i32, z as i32));
            }
        }
    }

    Ok(())
}
