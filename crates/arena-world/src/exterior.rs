//! Whole-level loads: a city, the wilderness around it, or an interior.

use arena_assets::AssetPack;
use arena_core::constants::{WILD_CHUNKS_PER_SIDE, WILD_LEVEL_HEIGHT};
use arena_core::{ArenaRandom, LevelError, WeatherType, WorldType};
use arena_level::Level;

use crate::city_plan::generate_city;
use crate::inf_name::{city_inf_name, wilderness_inf_name};
use crate::naming::{generate_building_names, generate_wild_chunk_building_names};
use crate::palace::revise_palace_graphics;
use crate::wilderness::{assemble_wilderness, generate_wilderness_indices_sized, revise_wilderness_city};

/// Build the pack's city: generate its blocks unless it is premade, fix up
/// the palace, decode all three layers and name its buildings.
///
/// Building names continue the random sequence left by block generation.
pub fn load_city(pack: &AssetPack, weather: WeatherType) -> Result<Level, LevelError> {
    let city = &pack.city;
    let mut layers = pack.library.layout(&city.map_filename)?.clone();
    let mut random = ArenaRandom::new(city.city_seed);

    if !city.premade {
        generate_city(city, &mut layers, &mut random, &pack.exe.city_blocks, &pack.library)?;
    }
    revise_palace_graphics(&mut layers);

    let inf_name = city_inf_name(city.climate, weather);
    let inf = pack.library.inf(&inf_name)?;
    let mut level = Level::for_layers(&city.name, &inf_name, WorldType::City, &layers);
    level.decode_flor(&layers, inf)?;
    level.decode_map1(&layers, inf, &pack.exe)?;
    level.decode_map2(&layers)?;

    generate_building_names(&mut level, city, &pack.exe, &pack.names, &mut random)?;

    log::info!(
        "Loaded city {} ({}x{}x{}, {} definitions, {} named buildings)",
        city.name,
        level.grid().width(),
        level.grid().height(),
        level.grid().depth(),
        level.defs().len(),
        level.menu_names().len()
    );
    Ok(level)
}

pub fn load_wilderness(pack: &AssetPack, weather: WeatherType) -> Result<Level, LevelError> {
    load_wilderness_sized(pack, weather, WILD_CHUNKS_PER_SIDE)
}

/// Wilderness load over a `chunks_per_side` square of terrain chunks.
/// The full legacy wilderness is 64 chunks per side.
pub fn load_wilderness_sized(
    pack: &AssetPack,
    weather: WeatherType,
    chunks_per_side: usize,
) -> Result<Level, LevelError> {
    let city = &pack.city;
    let indices = generate_wilderness_indices_sized(city.wild_seed, &pack.exe.wild, chunks_per_side)?;
    let mut layers = assemble_wilderness(&indices, &pack.library)?;
    revise_wilderness_city(&mut layers, city, &pack.exe, &pack.library, chunks_per_side)?;
    layers.height = WILD_LEVEL_HEIGHT;

    let inf_name = wilderness_inf_name(city.climate, weather);
    let inf = pack.library.inf(&inf_name)?;
    let mut level = Level::for_layers("WILD", &inf_name, WorldType::Wilderness, &layers);
    level.decode_flor(&layers, inf)?;
    level.decode_map1(&layers, inf, &pack.exe)?;
    level.decode_map2(&layers)?;

    generate_wild_chunk_building_names(&mut level, &pack.exe, chunks_per_side)?;

    log::info!(
        "Loaded wilderness of {} ({} chunks per side, {} definitions)",
        city.name,
        chunks_per_side,
        level.defs().len()
    );
    Ok(level)
}

/// Decode the pack's interior. Levels without MAP2 data get a flat ceiling.
pub fn load_interior(pack: &AssetPack) -> Result<Level, LevelError> {
    let interior = pack
        .interior
        .as_ref()
        .ok_or_else(|| LevelError::MissingAsset(format!("interior in pack {}", pack.name)))?;
    let layers = pack.library.layout(&interior.layout)?;

    let mut level = Level::for_layers(&interior.layout, &interior.inf.name, WorldType::Interior, layers);
    level.decode_flor(layers, &interior.inf)?;
    level.decode_map1(layers, &interior.inf, &pack.exe)?;
    if layers.map2.iter().any(|&code| code != 0) {
        level.decode_map2(layers)?;
    } else {
        level.decode_ceiling(&interior.inf)?;
    }
    level.decode_locks(&interior.locks);

    log::info!(
        "Loaded interior {} ({} definitions, {} locks)",
        interior.layout,
        level.defs().len(),
        level.locks().len()
    );
    Ok(level)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::city_plan::BlockType;
    use crate::test_support;
    use arena_level::{MenuType, VoxelDefinition};
    use glam::IVec2;

    #[test]
    fn test_load_city_names_every_shop() {
        let pack = test_support::pack();
        let level = load_city(&pack, WeatherType::Clear).expect("load");
        assert_eq!(level.inf_name, "TCN.INF");
        assert_eq!((level.grid().width(), level.grid().depth()), (64, 64));

        let mut skeleton = test_support::skeleton();
        let plan = generate_city(
            &pack.city,
            &mut skeleton,
            &mut ArenaRandom::new(pack.city.city_seed),
            &pack.exe.city_blocks,
            &pack.library,
        )
        .expect("generate");
        let shops = plan.count(BlockType::Tavern) + plan.count(BlockType::Equipment) + plan.count(BlockType::Temple);
        assert_eq!(level.menu_names().len(), shops);

        let taverns = level
            .menu_names()
            .iter()
            .filter(|m| {
                level
                    .voxel_def(m.position.x, 1, m.position.y)
                    .map(|d| d.is_menu_of(MenuType::Tavern))
                    .unwrap_or(false)
            })
            .count();
        assert_eq!(taverns, plan.count(BlockType::Tavern));
    }

    #[test]
    fn test_load_city_is_deterministic() {
        let pack = test_support::pack();
        let a = load_city(&pack, WeatherType::Snow).expect("load");
        let b = load_city(&pack, WeatherType::Snow).expect("load");
        assert_eq!(a.grid().voxels(), b.grid().voxels());
        assert_eq!(a.menu_names(), b.menu_names());
    }

    #[test]
    fn test_weather_selects_city_inf() {
        let pack = test_support::pack();
        let clear = load_city(&pack, WeatherType::Clear).expect("clear");
        let snow = load_city(&pack, WeatherType::SnowOvercast).expect("snow");
        assert_eq!(snow.inf_name, "TCS.INF");
        assert_eq!(clear.grid().voxels().len(), snow.grid().voxels().len());

        // Only the tavern texture is a *MENU wall under TCS.INF.
        let is_tavern = |level: &Level, position: IVec2| {
            level
                .voxel_def(position.x, 1, position.y)
                .map(|d| d.is_menu_of(MenuType::Tavern))
                .unwrap_or(false)
        };
        let clear_taverns = clear.menu_names().iter().filter(|m| is_tavern(&clear, m.position)).count();
        assert!(clear.menu_names().len() > clear_taverns);
        assert_eq!(snow.menu_names().len(), clear_taverns);
        assert!(snow.menu_names().iter().all(|m| is_tavern(&snow, m.position)));
    }

    #[test]
    fn test_missing_weather_inf() {
        let pack = test_support::pack();
        assert!(matches!(
            load_city(&pack, WeatherType::Rain),
            Err(LevelError::MissingAsset(name)) if name == "TCR.INF"
        ));
        assert!(matches!(
            load_wilderness_sized(&pack, WeatherType::Snow, 4),
            Err(LevelError::MissingAsset(name)) if name == "TWS.INF"
        ));
    }

    #[test]
    fn test_load_city_revises_palace() {
        let pack = test_support::pack();
        let level = load_city(&pack, WeatherType::Clear).expect("load");
        // Skeleton row 0, column 10 is grid (63, 53).
        match level.voxel_def(63, 1, 53).expect("in bounds") {
            VoxelDefinition::Edge { collider, .. } => assert!(*collider),
            other => panic!("expected palace edge, got {:?}", other),
        }
    }

    #[test]
    fn test_load_premade_city_skips_generation() {
        let mut pack = test_support::pack();
        pack.city.premade = true;
        let level = load_city(&pack, WeatherType::Clear).expect("load");
        assert!(level.menu_names().is_empty());
        assert!(level.flats().is_empty());
    }

    #[test]
    fn test_load_wilderness() {
        let pack = test_support::pack();
        let level = load_wilderness_sized(&pack, WeatherType::Clear, 4).expect("load");
        assert_eq!(level.inf_name, "TWN.INF");
        assert_eq!(
            (level.grid().width(), level.grid().height(), level.grid().depth()),
            (256, 6, 256)
        );

        // Every tavern chunk outside the city contributes one named building.
        let indices = generate_wilderness_indices_sized(pack.city.wild_seed, &pack.exe.wild, 4).expect("indices");
        let city_chunks = [(1, 1), (2, 1), (1, 2), (2, 2)];
        let tavern_chunks = (0..4)
            .flat_map(|y| (0..4).map(move |x| (x, y)))
            .filter(|&(x, y)| !city_chunks.contains(&(x, y)) && indices.get(x, y) == test_support::TAVERN_CHUNK)
            .count();
        assert_eq!(level.menu_names().len(), tavern_chunks);
    }

    #[test]
    fn test_load_interior_with_ceiling_and_locks() {
        let pack = test_support::pack();
        let level = load_interior(&pack).expect("load");
        assert_eq!(level.world_type(), WorldType::Interior);
        assert_eq!(
            *level.voxel_def(0, 2, 0).expect("in bounds"),
            VoxelDefinition::Ceiling { texture: 7 }
        );
        assert_eq!(level.lock_at(IVec2::new(5, 6)).map(|l| l.level), Some(3));
    }

    #[test]
    fn test_load_interior_requires_definition() {
        let mut pack = test_support::pack();
        pack.interior = None;
        assert!(matches!(load_interior(&pack), Err(LevelError::MissingAsset(_))));
    }
}
