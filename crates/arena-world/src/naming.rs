//! Display names for *MENU buildings.
//!
//! City names come from three passes over the main floor (taverns, then
//! equipment stores, then temples). The equipment and temple passes reseed
//! the shared random generator from the city's local point; the tavern pass
//! continues the sequence left by city generation. Each pass rejects
//! component pairs it has already used.

use std::collections::HashSet;

use arena_assets::tables::{table_entry, CityGenNames};
use arena_assets::{CityDefinition, ExeData, NameChunks};
use arena_core::constants::{MAIN_FLOOR_Y, RMD_DIM};
use arena_core::{ArenaRandom, GridPos, LevelError};
use arena_level::{Level, MenuType};
use glam::IVec2;

const TAVERN_PREFIXES: u32 = 23;
const TAVERN_SUFFIXES: u32 = 23;
const EQUIPMENT_PREFIXES: u32 = 20;
const EQUIPMENT_SUFFIXES: u32 = 10;
const TEMPLE_MODELS: u32 = 3;
const TEMPLE_MODEL_SUFFIXES: [u32; 3] = [5, 9, 10];

/// Source of generated NPC names, used by equipment store templates.
pub trait NpcNameSource {
    fn generate_npc_name(
        &self,
        race_id: u32,
        is_male: bool,
        random: &mut ArenaRandom,
    ) -> Result<String, LevelError>;
}

impl NpcNameSource for NameChunks {
    fn generate_npc_name(
        &self,
        race_id: u32,
        is_male: bool,
        random: &mut ArenaRandom,
    ) -> Result<String, LevelError> {
        self.generate(race_id, is_male, random)
    }
}

fn component<'a>(table: &'a [String], name: &'static str, index: u32) -> Result<&'a str, LevelError> {
    table_entry(table, name, index as usize).map(String::as_str)
}

pub fn tavern_name(names: &CityGenNames, m: u32, n: u32, coastal: bool) -> Result<String, LevelError> {
    let prefix = component(&names.tavern_prefixes, "tavern prefixes", m)?;
    let suffix = if coastal {
        component(&names.tavern_marine_suffixes, "tavern marine suffixes", n)?
    } else {
        component(&names.tavern_suffixes, "tavern suffixes", n)?
    };
    Ok(format!("{prefix} {suffix}"))
}

pub fn temple_name(names: &CityGenNames, model: u32, n: u32) -> Result<String, LevelError> {
    let prefix = component(&names.temple_prefixes, "temple prefixes", model)?;
    let suffix = component(names.temple_suffixes(model as usize), "temple suffixes", n)?;
    Ok(format!("{prefix}{suffix}"))
}

/// Equipment store name with its `%ct`, `%ef` and `%n` tokens filled in.
/// NPC names are seeded from the store's grid position.
pub fn equipment_name(
    names: &CityGenNames,
    m: u32,
    n: u32,
    position: GridPos,
    city: &CityDefinition,
    npc_names: &dyn NpcNameSource,
) -> Result<String, LevelError> {
    let prefix = component(&names.equipment_prefixes, "equipment prefixes", m)?;
    let suffix = component(&names.equipment_suffixes, "equipment suffixes", n)?;
    let mut name = format!("{prefix} {suffix}");
    let (x, z) = (position.x, position.y);

    if name.contains("%ct") {
        name = name.replacen("%ct", &city.type_display_name, 1);
    }

    if name.contains("%ef") {
        let mut random = ArenaRandom::new(((x << 16) + z) as u32);
        let full = npc_names.generate_npc_name(city.race_id, true, &mut random)?;
        let first = full.split_whitespace().next().unwrap_or_default();
        name = name.replacen("%ef", first, 1);
    }

    if name.contains("%n") {
        let mut random = ArenaRandom::new(((z << 16) + x) as u32);
        let full = npc_names.generate_npc_name(city.race_id, true, &mut random)?;
        name = name.replacen("%n", &full, 1);
    }

    Ok(name)
}

fn pair_hash(m: u32, n: u32) -> u32 {
    (m << 8) + n
}

fn draw_temple(random: &mut ArenaRandom) -> (u32, u32) {
    let model = random.next() % TEMPLE_MODELS;
    let n = random.next() % TEMPLE_MODEL_SUFFIXES[model as usize];
    (model, n)
}

fn pair_count(menu_type: MenuType) -> usize {
    match menu_type {
        MenuType::Tavern => (TAVERN_PREFIXES * TAVERN_SUFFIXES) as usize,
        MenuType::Equipment => (EQUIPMENT_PREFIXES * EQUIPMENT_SUFFIXES) as usize,
        _ => TEMPLE_MODEL_SUFFIXES.iter().sum::<u32>() as usize,
    }
}

/// Draw component indices for one building until an unused pair comes up.
fn draw_unique(
    menu_type: MenuType,
    random: &mut ArenaRandom,
    seen: &mut HashSet<u32>,
) -> (u32, u32) {
    if seen.len() >= pair_count(menu_type) {
        log::warn!("All {:?} name pairs used, allowing repeats", menu_type);
        seen.clear();
    }

    loop {
        let (m, n) = match menu_type {
            MenuType::Tavern => (random.next() % TAVERN_PREFIXES, random.next() % TAVERN_SUFFIXES),
            MenuType::Equipment => (
                random.next() % EQUIPMENT_PREFIXES,
                random.next() % EQUIPMENT_SUFFIXES,
            ),
            _ => draw_temple(random),
        };
        if seen.insert(pair_hash(m, n)) {
            return (m, n);
        }
    }
}

fn is_menu_at(level: &Level, x: i32, z: i32, menu_type: MenuType) -> Result<bool, LevelError> {
    Ok(level
        .voxel_def(x, MAIN_FLOOR_Y as i32, z)?
        .is_menu_of(menu_type))
}

/// Name every tavern, equipment store and temple in a decoded city.
///
/// Buildings are visited from the highest (x, z) down, matching the legacy
/// right-to-left, top-to-bottom order.
pub fn generate_building_names(
    level: &mut Level,
    city: &CityDefinition,
    exe: &ExeData,
    npc_names: &dyn NpcNameSource,
    random: &mut ArenaRandom,
) -> Result<(), LevelError> {
    let names = &exe.city_gen;
    let local = city.local_city_point();
    let width = level.grid().width() as i32;
    let depth = level.grid().depth() as i32;

    for menu_type in [MenuType::Tavern, MenuType::Equipment, MenuType::Temple] {
        if menu_type != MenuType::Tavern {
            random.srand(((local.x << 16) + local.y) as u32);
        }

        let mut seen = HashSet::new();
        for x in (0..width).rev() {
            for z in (0..depth).rev() {
                if !is_menu_at(level, x, z, menu_type)? {
                    continue;
                }

                let (m, n) = draw_unique(menu_type, random, &mut seen);
                let position = IVec2::new(x, z);
                let name = match menu_type {
                    MenuType::Tavern => tavern_name(names, m, n, city.coastal)?,
                    MenuType::Equipment => equipment_name(names, m, n, position, city, npc_names)?,
                    _ => temple_name(names, m, n)?,
                };
                level.push_menu_name(position, name);
            }
        }

        if menu_type == MenuType::Temple {
            if let Some(patch) = city.main_quest_temple_override {
                let name = temple_name(names, patch.model_index as u32, patch.suffix_index as u32)?;
                let menu_names = level.menu_names_mut();
                let len = menu_names.len();
                let entry = menu_names
                    .get_mut(patch.menu_names_index)
                    .ok_or(LevelError::MenuNameIndex {
                        index: patch.menu_names_index,
                        len,
                    })?;
                entry.name = name;
            }
        }
    }

    log::debug!("Named {} buildings in {}", level.menu_names().len(), city.name);
    Ok(())
}

/// Grid position of voxel (x, z) of the wilderness chunk at (wild_x, wild_y).
/// Chunk rows run against grid X and chunk columns against grid Z.
pub fn wild_chunk_voxel_position(
    wild_x: i32,
    wild_y: i32,
    x: i32,
    z: i32,
    chunks_per_side: usize,
) -> GridPos {
    let dim = RMD_DIM as i32;
    let last_chunk = chunks_per_side as i32 - 1;
    let origin = IVec2::new((last_chunk - wild_x) * dim, (last_chunk - wild_y) * dim);
    IVec2::new(origin.y + (dim - 1 - x), origin.x + (dim - 1 - z))
}

/// Name the taverns and temples of every wilderness chunk. Each building
/// draws from a fresh generator seeded by its chunk, and names may repeat.
pub fn generate_wild_chunk_building_names(
    level: &mut Level,
    exe: &ExeData,
    chunks_per_side: usize,
) -> Result<(), LevelError> {
    let names = &exe.city_gen;
    let dim = RMD_DIM as i32;
    let side = chunks_per_side as i32;

    for wild_y in 0..side {
        for wild_x in 0..side {
            let seed = ((wild_y << 16) + wild_x) as u32;
            for menu_type in [MenuType::Tavern, MenuType::Temple] {
                for x in 0..dim {
                    for z in 0..dim {
                        let pos = wild_chunk_voxel_position(wild_x, wild_y, x, z, chunks_per_side);
                        if !is_menu_at(level, pos.x, pos.y, menu_type)? {
                            continue;
                        }

                        let mut random = ArenaRandom::new(seed);
                        let name = if menu_type == MenuType::Tavern {
                            let m = random.next() % TAVERN_PREFIXES;
                            let n = random.next() % TAVERN_SUFFIXES;
                            tavern_name(names, m, n, false)?
                        } else {
                            let (model, n) = draw_temple(&mut random);
                            temple_name(names, model, n)?
                        };
                        level.push_menu_name(pos, name);
                    }
                }
            }
        }
    }

    Ok(())
}
