//! Small synthetic asset set shared by the tests in this crate.

use arena_assets::loader::InteriorDefinition;
use arena_assets::names::RaceNameRules;
use arena_assets::tables::{
    CeilingData, CityBlockTables, CityGenNames, WallHeightTables, WildernessBlockLists,
};
use arena_assets::{AssetLibrary, AssetPack, CityDefinition, ExeData, InfData, LayerSet, LegacyLock, NameChunks};
use arena_core::constants::{CITY_BLOCK_DIM, RMD_DIM};
use arena_core::ClimateType;
use glam::IVec2;

pub const SKELETON: &str = "TESTCITY.MIF";
pub const INTERIOR: &str = "DUNGEON.MIF";
/// Wilderness chunk holding one tavern.
pub const TAVERN_CHUNK: u8 = 9;

fn numbered(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}{i}")).collect()
}

pub fn block_tables() -> CityBlockTables {
    CityBlockTables {
        variations: vec![2; 7],
        ..CityBlockTables::default()
    }
}

pub fn wild_lists() -> WildernessBlockLists {
    WildernessBlockLists {
        normal: vec![5, 6],
        village: vec![7],
        dungeon: vec![8],
        tavern: vec![TAVERN_CHUNK],
        temple: vec![5, 9],
    }
}

pub fn exe() -> ExeData {
    ExeData {
        wall_heights: WallHeightTables {
            box1a: vec![0, 16, 32, 48, 64, 80, 96, 112],
            box1b: vec![0, 32, 64, 96, 128, 160, 192, 224],
            box1c: vec![0, 8, 16, 24, 32, 40, 48, 56],
            box2a: vec![32; 16],
            box2b: vec![32; 16],
        },
        city_gen: CityGenNames {
            tavern_prefixes: numbered("TP", 23),
            tavern_suffixes: numbered("TS", 23),
            tavern_marine_suffixes: numbered("TM", 23),
            equipment_prefixes: numbered("EP", 20),
            equipment_suffixes: numbered("ES", 10),
            temple_prefixes: vec![
                "Temple of ".to_string(),
                "Chapel of ".to_string(),
                "Shrine of ".to_string(),
            ],
            temple1_suffixes: numbered("A", 5),
            temple2_suffixes: numbered("B", 9),
            temple3_suffixes: numbered("C", 10),
        },
        wild: wild_lists(),
        city_blocks: block_tables(),
    }
}

/// City INF: textures 0, 1 and 3 are the equipment, tavern and temple
/// *MENU walls.
pub fn inf() -> InfData {
    let mut inf = InfData {
        name: "TCN.INF".to_string(),
        ceiling: CeilingData {
            texture_index: Some(1),
            ..CeilingData::default()
        },
        ..InfData::default()
    };
    inf.menus.insert(0, 0);
    inf.menus.insert(1, 1);
    inf.menus.insert(3, 3);
    inf
}

/// Snowy city INF: a different ceiling, and only texture 1 is a *MENU wall.
pub fn snow_inf() -> InfData {
    let mut inf = InfData {
        name: "TCS.INF".to_string(),
        ceiling: CeilingData {
            texture_index: Some(2),
            ..CeilingData::default()
        },
        ..InfData::default()
    };
    inf.menus.insert(1, 1);
    inf
}

/// Wilderness INF: texture 1 is a tavern, texture 3 a temple.
pub fn wild_inf() -> InfData {
    let mut inf = InfData {
        name: "TWN.INF".to_string(),
        ..InfData::default()
    };
    inf.menus.insert(1, 3);
    inf.menus.insert(3, 4);
    inf
}

pub fn city(side: usize, reserved: Vec<u8>) -> CityDefinition {
    CityDefinition {
        name: "Testville".to_string(),
        type_display_name: "Town".to_string(),
        map_filename: SKELETON.to_string(),
        city_seed: 0x0012_0034,
        wild_seed: 0x1234,
        race_id: 0,
        climate: ClimateType::Temperate,
        city_blocks_per_side: side,
        reserved_blocks: reserved,
        block_start_pos: IVec2::new(2, 2),
        coastal: false,
        premade: false,
        main_quest_temple_override: None,
    }
}

pub fn names() -> NameChunks {
    NameChunks {
        races: vec![RaceNameRules {
            male: vec![numbered("Al", 4), vec![" ".to_string()], numbered("Stone", 3)],
            female: vec![numbered("Ia", 2)],
        }],
    }
}

/// 64x64 city skeleton: a wall in the corner, a non-wall code at (5, 5)
/// and a palace facade on the top edge with its gate one row in.
pub fn skeleton() -> LayerSet {
    let mut layers = LayerSet::new(64, 64);
    layers.map1[0] = 0x2F2F;
    layers.map1[5 + 5 * 64] = 0x0505;
    layers.map1[10] = 0x9001;
    layers.map1[10 + 64] = 0xA002;
    layers
}

/// Floor code of every cell of a block from table row `index`.
pub fn block_floor(index: usize) -> u16 {
    ((index as u16) + 1) << 8
}

fn block_menu_code(index: usize) -> u16 {
    match index {
        0 => 0x0101,
        3 => 0x0404,
        4 => 0x0202,
        _ => 0,
    }
}

/// Every block layout the city generator can ask for under
/// `block_tables`, plus the skeleton.
pub fn block_library() -> AssetLibrary {
    let tables = block_tables();
    let dim = CITY_BLOCK_DIM as usize;
    let mut library = AssetLibrary::new();

    for (index, code) in tables.codes.iter().enumerate() {
        let mut block = LayerSet::new(dim, dim);
        block.flor.fill(block_floor(index));
        block.map1[dim / 2 + (dim / 2) * dim] = block_menu_code(index);
        for rotation in &tables.rotations {
            library.insert_layout(&CityBlockTables::layout_name(code, 1, rotation), block.clone());
        }
    }

    library.insert_layout(SKELETON, skeleton());
    library
}

pub fn wild_floor(id: u8) -> u16 {
    (0x10 + id as u16) << 8
}

/// `block_library` plus terrain chunks 1 to 9 and the interior layout.
pub fn wild_library() -> AssetLibrary {
    let mut library = block_library();
    for id in 1..=9u8 {
        let mut chunk = LayerSet::new(RMD_DIM, RMD_DIM);
        chunk.flor.fill(wild_floor(id));
        if id == TAVERN_CHUNK {
            chunk.map1[20 + 30 * RMD_DIM] = 0x0202;
        }
        library.push_wild_chunk(chunk);
    }

    let mut interior = LayerSet::new(8, 8);
    interior.flor.fill(0x0100);
    interior.map1[3] = 0x0303;
    library.insert_layout(INTERIOR, interior);
    library
}

pub fn pack() -> AssetPack {
    let mut interior_inf = InfData {
        name: "DUNGEON.INF".to_string(),
        ..InfData::default()
    };
    interior_inf.ceiling.texture_index = Some(7);

    let mut library = wild_library();
    library.insert_inf(inf());
    library.insert_inf(snow_inf());
    library.insert_inf(wild_inf());

    AssetPack {
        name: "test".to_string(),
        exe: exe(),
        names: names(),
        city: city(3, vec![4]),
        interior: Some(InteriorDefinition {
            layout: INTERIOR.to_string(),
            inf: interior_inf,
            locks: vec![LegacyLock { x: 1, y: 2, level: 3 }],
        }),
        library,
    }
}
