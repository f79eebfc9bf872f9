//! Built-in demo pack, used when no `--pack` is given. Small enough that
//! every load mode runs in well under a second.

use arena_assets::loader::InteriorDefinition;
use arena_assets::names::RaceNameRules;
use arena_assets::tables::{
    CeilingData, CityBlockTables, CityGenNames, WallHeightTables, WildernessBlockLists,
};
use arena_assets::{
    AssetLibrary, AssetPack, CityDefinition, ExeData, InfData, LayerSet, LegacyLock, NameChunks,
};
use arena_core::constants::{CITY_BLOCK_DIM, RMD_DIM};
use arena_core::ClimateType;
use glam::IVec2;

pub const SKELETON: &str = "DEMOCITY.MIF";
pub const INTERIOR: &str = "DEMOKEEP.MIF";

/// Chunks per side used for the demo wilderness.
pub const DEMO_WILD_CHUNKS: usize = 4;

const TAVERN_WORDS: [&str; 6] = ["Golden", "Rusty", "Sleeping", "Drunken", "Silver", "Black"];
const TAVERN_NOUNS: [&str; 6] = ["Dragon", "Flagon", "Griffin", "Lantern", "Boar", "Anchor"];
const MARINE_NOUNS: [&str; 4] = ["Kraken", "Gull", "Mermaid", "Wave"];
const SHOP_WORDS: [&str; 5] = ["Finest", "Honest", "Iron", "Royal", "Common"];
const SHOP_NOUNS: [&str; 5] = ["Armory", "Smithy", "Forge", "Weapons", "Goods"];
const GODS: [&str; 4] = ["Akatosh", "Arkay", "Dibella", "Julianos"];

fn cycled(words: &[&str], count: usize) -> Vec<String> {
    words.iter().cycle().take(count).map(|w| w.to_string()).collect()
}

fn exe() -> ExeData {
    ExeData {
        wall_heights: WallHeightTables {
            box1a: vec![0, 16, 32, 48, 64, 80, 96, 112],
            box1b: vec![0, 32, 64, 96, 128, 160, 192, 224],
            box1c: vec![0, 8, 16, 24, 32, 40, 48, 56],
            box2a: vec![32; 16],
            box2b: vec![32; 16],
        },
        city_gen: CityGenNames {
            tavern_prefixes: cycled(&TAVERN_WORDS, 23),
            tavern_suffixes: cycled(&TAVERN_NOUNS, 23),
            tavern_marine_suffixes: cycled(&MARINE_NOUNS, 23),
            equipment_prefixes: cycled(&["%ct's", "%ef's", "%n's", "The"], 20)
                .into_iter()
                .zip(cycled(&SHOP_WORDS, 20))
                .map(|(a, b)| format!("{a} {b}"))
                .collect(),
            equipment_suffixes: cycled(&SHOP_NOUNS, 10),
            temple_prefixes: vec![
                "Temple of ".to_string(),
                "Chapel of ".to_string(),
                "Shrine of ".to_string(),
            ],
            temple1_suffixes: cycled(&GODS, 5),
            temple2_suffixes: cycled(&GODS, 9),
            temple3_suffixes: cycled(&GODS, 10),
        },
        wild: WildernessBlockLists {
            normal: vec![1, 2],
            village: vec![1],
            dungeon: vec![2],
            tavern: vec![3],
            temple: vec![4],
        },
        city_blocks: CityBlockTables {
            variations: vec![1; 7],
            ..CityBlockTables::default()
        },
    }
}

/// Textures 0, 1, 2 and 3 are the equipment, tavern, guild and temple walls.
fn city_inf() -> InfData {
    let mut inf = InfData {
        name: "TCN.INF".to_string(),
        ceiling: CeilingData {
            texture_index: Some(1),
            ..CeilingData::default()
        },
        ..InfData::default()
    };
    for texture in 0..4 {
        inf.menus.insert(texture, texture);
    }
    inf
}

/// Texture 1 is a tavern, texture 3 a temple.
fn wild_inf() -> InfData {
    let mut inf = InfData {
        name: "TWN.INF".to_string(),
        ..InfData::default()
    };
    inf.menus.insert(1, 3);
    inf.menus.insert(3, 4);
    inf
}

/// The same INF under each weather letter, so every `--weather` loads.
fn weather_variants(inf: InfData) -> Vec<InfData> {
    ['N', 'R', 'S']
        .into_iter()
        .map(|letter| {
            let mut variant = inf.clone();
            variant.name.replace_range(2..3, &letter.to_string());
            variant
        })
        .collect()
}

fn interior_inf() -> InfData {
    let mut inf = InfData {
        name: "DEMOKEEP.INF".to_string(),
        ceiling: CeilingData {
            texture_index: Some(9),
            ..CeilingData::default()
        },
        wet_chasm: Some(12),
        level_up: Some(7),
        ..InfData::default()
    };
    inf.box_sides.insert(2, 20);
    inf.box_caps.insert(3, 30);
    inf
}

fn city() -> CityDefinition {
    CityDefinition {
        name: "Demoford".to_string(),
        type_display_name: "Town".to_string(),
        map_filename: SKELETON.to_string(),
        city_seed: 0x002A_0017,
        wild_seed: 0x0BAD_5EED,
        race_id: 0,
        climate: ClimateType::Temperate,
        city_blocks_per_side: 3,
        reserved_blocks: Vec::new(),
        block_start_pos: IVec2::new(2, 2),
        coastal: false,
        premade: false,
        main_quest_temple_override: None,
    }
}

fn names() -> NameChunks {
    NameChunks {
        races: vec![RaceNameRules {
            male: vec![
                cycled(&["Bren", "Ald", "Tor", "Cas"], 4),
                cycled(&["ric", "an", "ius"], 3),
                vec![" ".to_string()],
                cycled(&["Stone", "Hale", "Marsh"], 3),
            ],
            female: vec![cycled(&["Ia", "Sel", "Mira"], 3), cycled(&["na", "ine"], 2)],
        }],
    }
}

/// Wall ring with a palace facade on the top edge and its gate below it.
fn skeleton() -> LayerSet {
    let mut layers = LayerSet::new(RMD_DIM, RMD_DIM);
    layers.flor.fill(0x0100);
    for i in 0..RMD_DIM {
        layers.map1[i] = 0x0606;
        layers.map1[i + (RMD_DIM - 1) * RMD_DIM] = 0x0606;
        layers.map1[i * RMD_DIM] = 0x0606;
        layers.map1[RMD_DIM - 1 + i * RMD_DIM] = 0x0606;
    }
    layers.map1[30] = 0x9001;
    layers.map1[30 + RMD_DIM] = 0xA002;
    layers
}

/// *MENU wall at the centre of the block from table row `index`.
fn block_menu_code(index: usize) -> u16 {
    match index {
        0 => 0x0101,
        1 => 0x0303,
        3 => 0x0404,
        4 => 0x0202,
        _ => 0x0707,
    }
}

fn block(index: usize) -> LayerSet {
    let dim = CITY_BLOCK_DIM as usize;
    let mut block = LayerSet::new(dim, dim);
    block.flor.fill(0x0200);
    block.map1[dim / 2 + (dim / 2) * dim] = block_menu_code(index);
    // A lamp post in one corner.
    block.map1[1 + dim] = 0x8002;
    block
}

fn wild_chunk(id: u8) -> LayerSet {
    let mut chunk = LayerSet::new(RMD_DIM, RMD_DIM);
    chunk.flor.fill(0x0300);
    match id {
        2 => {
            for i in (4..RMD_DIM).step_by(9) {
                chunk.map1[i + i * RMD_DIM] = 0x8003;
            }
        }
        3 => chunk.map1[20 + 30 * RMD_DIM] = 0x0202,
        4 => chunk.map1[40 + 12 * RMD_DIM] = 0x0404,
        _ => {}
    }
    chunk
}

/// 16x16 keep: wall ring, a wet chasm, a raised platform, a door, a
/// stairway up and a flat.
fn interior() -> LayerSet {
    let dim = 16;
    let mut keep = LayerSet::new(dim, dim);
    keep.flor.fill(0x0100);
    for i in 0..dim {
        keep.map1[i] = 0x0303;
        keep.map1[i + (dim - 1) * dim] = 0x0303;
        keep.map1[i * dim] = 0x0303;
        keep.map1[dim - 1 + i * dim] = 0x0303;
    }
    for z in 6..9 {
        for x in 6..9 {
            keep.flor[x + z * dim] = 0x0D00;
        }
    }
    keep.map1[3 + 3 * dim] = 0x0A32;
    keep.map1[8 + dim] = 0xB003;
    keep.map1[12 + 12 * dim] = 0x0808;
    keep.map1[4 + 11 * dim] = 0x8005;
    keep
}

fn library() -> AssetLibrary {
    let tables = exe().city_blocks;
    let mut library = AssetLibrary::new();

    for (index, code) in tables.codes.iter().enumerate() {
        let layout = block(index);
        for rotation in &tables.rotations {
            library.insert_layout(&CityBlockTables::layout_name(code, 1, rotation), layout.clone());
        }
    }
    library.insert_layout(SKELETON, skeleton());
    library.insert_layout(INTERIOR, interior());
    for id in 1..=4 {
        library.push_wild_chunk(wild_chunk(id));
    }
    for inf in weather_variants(city_inf()).into_iter().chain(weather_variants(wild_inf())) {
        library.insert_inf(inf);
    }
    library
}

pub fn demo_pack() -> AssetPack {
    AssetPack {
        name: "demo".to_string(),
        exe: exe(),
        names: names(),
        city: city(),
        interior: Some(InteriorDefinition {
            layout: INTERIOR.to_string(),
            inf: interior_inf(),
            locks: vec![LegacyLock { x: 8, y: 1, level: 2 }],
        }),
        library: library(),
    }
}
