use arena_assets::tables::table_entry;
use arena_assets::{ExeData, InfData, Layer, LayerSet};
use arena_core::constants::{ARENA_UNITS, MAIN_FLOOR_Y};
use arena_core::{Facing, GridPos, LevelError, VoxelId, WorldType};

use super::{check_layer, read_code};
use crate::def_table::DefKey;
use crate::level::Level;
use crate::menu::menu_type;
use crate::voxel_def::{DoorKind, MenuRef, VoxelDefinition, WallKind};

/// Decode context shared by every cell of one MAP1 pass.
struct Map1Context<'a> {
    inf: &'a InfData,
    exe: &'a ExeData,
    world_type: WorldType,
}

/// Structure at y = 1. Tagged codes with the top bit set carry flats,
/// transparent walls, edges, doors and diagonals.
pub fn decode_map1(
    level: &mut Level,
    layers: &LayerSet,
    inf: &InfData,
    exe: &ExeData,
) -> Result<(), LevelError> {
    check_layer(level, layers, Layer::Map1)?;
    let (gw, gd) = (layers.grid_width(), layers.grid_depth());
    let ctx = Map1Context {
        inf,
        exe,
        world_type: level.world_type(),
    };
    let mut skipped_0xc = 0usize;

    for x in 0..gw {
        for z in 0..gd {
            let code = read_code(&layers.map1, gw, gd, x, z);
            let (xi, zi) = (x as i32, z as i32);

            if code & 0x8000 == 0 {
                if code == 0 {
                    continue;
                }
                let id = structural_id(level, &ctx, code, xi, zi)?;
                level.grid.set(xi, MAIN_FLOOR_Y as i32, zi, id)?;
                continue;
            }

            let id = match (code & 0xF000) >> 12 {
                0x8 => {
                    let flat = code & 0x00FF;
                    if flat > 0 {
                        level.flats.add(i32::from(flat) - 1, GridPos::new(xi, zi));
                    }
                    None
                }
                0x9 => Some(level.defs.get_or_create(DefKey::Map1(code), || {
                    Ok(VoxelDefinition::TransparentWall {
                        texture: i32::from(code & 0x00FF) - 1,
                        collider: code & 0x0100 == 0,
                    })
                })?),
                0xA => {
                    let texture = i32::from(code & 0x003F) - 1;
                    // A zero texture shows up in legacy data and is left empty.
                    if texture >= 0 {
                        Some(level.defs.get_or_create(DefKey::Map1(code), || {
                            Ok(edge_definition(code, texture, ctx.world_type))
                        })?)
                    } else {
                        None
                    }
                }
                0xB => Some(
                    level
                        .defs
                        .get_or_create(DefKey::Map1(code), || door_definition(code))?,
                ),
                0xC => {
                    skipped_0xc += 1;
                    None
                }
                0xD => Some(level.defs.get_or_create(DefKey::Map1(code), || {
                    Ok(VoxelDefinition::Diagonal {
                        texture: i32::from(code & 0x00FF) - 1,
                        right_diagonal: code & 0x0100 == 0,
                    })
                })?),
                nibble => {
                    log::debug!("Ignoring MAP1 tag {:#x} at ({}, {})", nibble, x, z);
                    None
                }
            };

            if let Some(id) = id {
                level.grid.set(xi, MAIN_FLOOR_Y as i32, zi, id)?;
            }
        }
    }

    if skipped_0xc > 0 {
        log::warn!(
            "Skipped {} MAP1 voxels of unsupported type 0xC in {}",
            skipped_0xc,
            level.name
        );
    }

    Ok(())
}

fn structural_id(
    level: &mut Level,
    ctx: &Map1Context<'_>,
    code: u16,
    x: i32,
    z: i32,
) -> Result<VoxelId, LevelError> {
    let msb = (code & 0x7F00) >> 8;
    let lsb = code & 0x007F;
    if msb == lsb {
        level
            .defs
            .get_or_create(DefKey::Map1(code), || Ok(wall_definition(ctx, msb)))
    } else {
        level
            .defs
            .get_or_create(DefKey::Map1(code), || raised_definition(ctx, code, msb, x, z))
    }
}

fn wall_definition(ctx: &Map1Context<'_>, msb: u16) -> VoxelDefinition {
    let texture = i32::from(msb) - 1;
    let menu_index = ctx.inf.menu_index(texture);

    let kind = if ctx.inf.level_up == Some(texture) {
        WallKind::LevelUp
    } else if ctx.inf.level_down == Some(texture) {
        WallKind::LevelDown
    } else if menu_index.is_some() {
        WallKind::Menu
    } else {
        WallKind::Solid
    };

    let menu = menu_index.map(|id| MenuRef {
        id,
        menu_type: menu_type(id, ctx.world_type.is_city()),
    });

    VoxelDefinition::wall(texture, kind, menu)
}

fn raised_definition(
    ctx: &Map1Context<'_>,
    code: u16,
    msb: u16,
    x: i32,
    z: i32,
) -> Result<VoxelDefinition, LevelError> {
    let inf = ctx.inf;
    let side_id = code & 0x000F;
    let cap_id = (code & 0x00F0) >> 4;

    let side = inf.box_side(side_id).unwrap_or_else(|| {
        log::warn!("Missing *BOXSIDE id {} in {}", side_id, inf.name);
        0
    });
    let floor = inf.ceiling.texture_index.unwrap_or_else(|| {
        log::warn!("Missing platform floor id at ({}, {}) in {}", x, z, inf.name);
        0
    });
    let ceiling = inf.box_cap(cap_id).unwrap_or_else(|| {
        log::warn!("Missing *BOXCAP id {} in {}", cap_id, inf.name);
        0
    });

    let tables = &ctx.exe.wall_heights;
    let height_index = usize::from(msb & 0x07);
    let thickness_index = usize::from((msb & 0x78) >> 3);
    let box_scale = inf.ceiling.box_scale;

    let (base_offset, base_size) = match ctx.world_type {
        WorldType::City => (
            *table_entry(&tables.box1b, "box1b", height_index)?,
            *table_entry(&tables.box2b, "box2b", thickness_index)?,
        ),
        WorldType::Interior => {
            let size = *table_entry(&tables.box2a, "box2a", thickness_index)?;
            (
                *table_entry(&tables.box1a, "box1a", height_index)?,
                box_scale.map_or(size, |scale| (size * scale) / 256),
            )
        }
        WorldType::Wilderness => (
            *table_entry(&tables.box1c, "box1c", height_index)?,
            (32 * box_scale.unwrap_or(192)) / 256,
        ),
    };

    let normalized_scale = f64::from(inf.ceiling.height) / ARENA_UNITS;
    let y_offset = (f64::from(base_offset) / ARENA_UNITS) / normalized_scale;
    let y_size = (f64::from(base_size) / ARENA_UNITS) / normalized_scale;
    let v_top = (1.0 - y_offset - y_size).max(0.0);
    let v_bottom = (v_top + y_size).min(1.0);

    Ok(VoxelDefinition::Raised {
        side,
        floor,
        ceiling,
        y_offset,
        y_size,
        v_top,
        v_bottom,
    })
}

fn edge_definition(code: u16, texture: i32, world_type: WorldType) -> VoxelDefinition {
    let base_offset = i32::from((code & 0x0E00) >> 9);
    let full_offset = if world_type == WorldType::Interior {
        base_offset * 8
    } else {
        base_offset * 32 - 8
    };
    let collider = code & 0x0100 != 0;

    VoxelDefinition::Edge {
        texture,
        y_offset: f64::from(full_offset) / ARENA_UNITS,
        collider,
        flipped: collider,
        facing: Facing::from_orientation((code & 0x00C0) >> 6),
    }
}

fn door_definition(code: u16) -> Result<VoxelDefinition, LevelError> {
    let door_type = (code & 0x00C0) >> 6;
    let kind = match door_type {
        0 => DoorKind::Swinging,
        1 => DoorKind::Sliding,
        2 => DoorKind::Raising,
        _ => return Err(LevelError::UnsupportedDoor { code, door_type }),
    };
    Ok(VoxelDefinition::Door {
        texture: i32::from(code & 0x003F) - 1,
        kind,
    })
}
