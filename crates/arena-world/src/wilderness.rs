use arena_assets::tables::WildernessBlockLists;
use arena_assets::{AssetLibrary, CityDefinition, ExeData, LayerSet};
use arena_core::constants::{RMD_DIM, WILD_CHUNKS_PER_SIDE};
use arena_core::{ArenaRandom, LevelError};
use glam::IVec2;

use crate::city_plan::generate_city;

const NORMAL_WEIGHT: u32 = 0x6666;
const VILLAGE_WEIGHT: u32 = 0x4000;
const DUNGEON_WEIGHT: u32 = 0x2666;
const TAVERN_WEIGHT: u32 = 0x1999;

/// Terrain chunk id of every wilderness chunk, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildIndexGrid {
    side: usize,
    indices: Vec<u8>,
}

impl WildIndexGrid {
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.indices[x + y * self.side]
    }

    pub fn indices(&self) -> &[u8] {
        &self.indices
    }
}

/// Block list for one category draw. Each threshold is tested against what
/// is left after subtracting the ones before it.
fn pick_list(lists: &WildernessBlockLists, value: u32) -> (&'static str, &[u8]) {
    let mut value = value;
    if value < NORMAL_WEIGHT {
        return ("normal wild blocks", &lists.normal);
    }
    value -= NORMAL_WEIGHT;
    if value < VILLAGE_WEIGHT {
        return ("village wild blocks", &lists.village);
    }
    value -= VILLAGE_WEIGHT;
    if value < DUNGEON_WEIGHT {
        return ("dungeon wild blocks", &lists.dungeon);
    }
    value -= DUNGEON_WEIGHT;
    if value < TAVERN_WEIGHT {
        return ("tavern wild blocks", &lists.tavern);
    }
    ("temple wild blocks", &lists.temple)
}

pub fn generate_wilderness_indices(
    wild_seed: u32,
    lists: &WildernessBlockLists,
) -> Result<WildIndexGrid, LevelError> {
    generate_wilderness_indices_sized(wild_seed, lists, WILD_CHUNKS_PER_SIDE)
}

/// Draw a chunk id for every cell of a `side` x `side` grid, then put the
/// four city placeholder chunks in the middle.
pub fn generate_wilderness_indices_sized(
    wild_seed: u32,
    lists: &WildernessBlockLists,
    side: usize,
) -> Result<WildIndexGrid, LevelError> {
    if side < 2 {
        return Err(LevelError::WildernessTooSmall(side));
    }

    let mut random = ArenaRandom::new(wild_seed);
    let mut indices = Vec::with_capacity(side * side);
    for _ in 0..side * side {
        let (table, list) = pick_list(lists, random.next());
        if list.is_empty() {
            return Err(LevelError::MissingTableEntry { table, index: 0 });
        }
        let index = (random.next() & 0xFF) as usize % list.len();
        indices.push(list[index]);
    }

    let mut grid = WildIndexGrid { side, indices };
    let city = side / 2 - 1;
    for (dx, dy, id) in [(0, 0, 1), (1, 0, 2), (0, 1, 3), (1, 1, 4)] {
        grid.indices[(city + dx) + (city + dy) * side] = id;
    }
    Ok(grid)
}

/// Stitch the terrain chunks named by `indices` into one layer set. The
/// chunk at (x, y) starts at column `x * 64`, row `y * 64`.
pub fn assemble_wilderness(
    indices: &WildIndexGrid,
    library: &AssetLibrary,
) -> Result<LayerSet, LevelError> {
    let dim = RMD_DIM;
    let side = indices.side();
    let mut layers = LayerSet::new(side * dim, side * dim);

    for y in 0..side {
        for x in 0..side {
            let id = indices.get(x, y);
            let chunk = library.wild_chunk(id)?;
            let name = format!("WILD{id:03}.RMD");
            layers.blit(chunk, &name, (x * dim) as i32, (y * dim) as i32)?;
        }
    }

    Ok(layers)
}

/// Column and row at which the city replaces the placeholder chunks.
pub fn wilderness_city_origin(chunks_per_side: usize) -> usize {
    (chunks_per_side / 2 - 1) * RMD_DIM
}

/// Rewrite city codes for use inside the wilderness. Only the city walls
/// survive, swapped for their wilderness variants.
pub fn convert_city_to_wilderness(city: &mut LayerSet) {
    for (map1, map2) in city.map1.iter_mut().zip(city.map2.iter_mut()) {
        let upper = 0x3030 | (*map2 & 0x8080);
        match *map1 {
            code if code & 0x8000 != 0 => {
                *map1 = 0;
                *map2 = 0;
            }
            0x2F2F => {
                *map1 = 0x3030;
                *map2 = upper;
            }
            0x2D2D => {
                *map1 = 0x2F2F;
                *map2 = upper;
            }
            0x2E2E => *map2 = upper,
            _ => {
                *map1 = 0;
                *map2 = 0;
            }
        }
    }
}

/// Replace the placeholder chunks in the middle of an assembled wilderness
/// with the city itself.
pub fn revise_wilderness_city(
    wild: &mut LayerSet,
    city: &CityDefinition,
    exe: &ExeData,
    library: &AssetLibrary,
    chunks_per_side: usize,
) -> Result<(), LevelError> {
    let origin = wilderness_city_origin(chunks_per_side);
    let span = RMD_DIM * 2;
    wild.clear_region(origin, origin, span, span);

    let mut skeleton = library.layout(&city.map_filename)?.clone();
    if !city.premade {
        let mut random = ArenaRandom::new(city.city_seed);
        generate_city(city, &mut skeleton, &mut random, &exe.city_blocks, library)?;
    }

    convert_city_to_wilderness(&mut skeleton);
    wild.blit(&skeleton, &city.map_filename, origin as i32, origin as i32)
}

/// Corner of the 128x128 wilderness area containing `voxel`.
pub fn relative_wild_origin(voxel: IVec2) -> IVec2 {
    let span = (RMD_DIM * 2) as i32;
    IVec2::new(voxel.x - voxel.x % span, voxel.y - voxel.y % span)
}

/// Chunk-aligned origin of a 128x128 area roughly centred on `voxel`.
pub fn centered_wild_origin(voxel: IVec2) -> IVec2 {
    let dim = RMD_DIM as i32;
    IVec2::new(
        ((voxel.x - 32).max(0) / dim) * dim,
        ((voxel.y - 32).max(0) / dim) * dim,
    )
}
