use thiserror::Error;

use crate::defaults::CITY_BLOCK_CATEGORIES;
use crate::layers::{LayerSet, ALL_LAYERS};
use crate::loader::AssetPack;
use crate::tables::{CityGenNames, ExeData, WallHeightTables};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name table '{table}' has {len} entries, naming draws up to {required}")]
    NameTableTooShort {
        table: &'static str,
        len: usize,
        required: usize,
    },
    #[error("wall height table '{table}' has {len} entries, codes can index {required}")]
    HeightTableTooShort {
        table: &'static str,
        len: usize,
        required: usize,
    },
    #[error("wilderness block list '{0}' is empty")]
    EmptyBlockList(&'static str),
    #[error("wilderness block list '{list}' references chunk {id}, only {count} loaded")]
    UnknownWildChunk { list: &'static str, id: u8, count: usize },
    #[error("city block table '{table}' has {len} entries, expected {expected}")]
    CityBlockTable {
        table: &'static str,
        len: usize,
        expected: usize,
    },
    #[error("city block category {0} has zero variations")]
    ZeroVariations(usize),
    #[error("city skeleton layout \"{0}\" is not in the pack")]
    MissingSkeleton(String),
    #[error("layer set \"{name}\": {layer} has {actual} codes, expected {expected}")]
    LayerSize {
        name: String,
        layer: &'static str,
        expected: usize,
        actual: usize,
    },
}

fn check_names(names: &CityGenNames, errors: &mut Vec<ValidationError>) {
    let tables: [(&'static str, &Vec<String>, usize); 9] = [
        ("tavern_prefixes", &names.tavern_prefixes, 23),
        ("tavern_suffixes", &names.tavern_suffixes, 23),
        ("tavern_marine_suffixes", &names.tavern_marine_suffixes, 23),
        ("equipment_prefixes", &names.equipment_prefixes, 20),
        ("equipment_suffixes", &names.equipment_suffixes, 10),
        ("temple_prefixes", &names.temple_prefixes, 3),
        ("temple1_suffixes", &names.temple1_suffixes, 5),
        ("temple2_suffixes", &names.temple2_suffixes, 9),
        ("temple3_suffixes", &names.temple3_suffixes, 10),
    ];
    for (table, entries, required) in tables {
        if entries.len() < required {
            errors.push(ValidationError::NameTableTooShort {
                table,
                len: entries.len(),
                required,
            });
        }
    }
}

fn check_heights(heights: &WallHeightTables, errors: &mut Vec<ValidationError>) {
    // Height index is 3 bits, thickness index 4 bits.
    let tables: [(&'static str, &Vec<i32>, usize); 5] = [
        ("box1a", &heights.box1a, 8),
        ("box1b", &heights.box1b, 8),
        ("box1c", &heights.box1c, 8),
        ("box2a", &heights.box2a, 16),
        ("box2b", &heights.box2b, 16),
    ];
    for (table, entries, required) in tables {
        if entries.len() < required {
            errors.push(ValidationError::HeightTableTooShort {
                table,
                len: entries.len(),
                required,
            });
        }
    }
}

fn check_wild(exe: &ExeData, chunk_count: usize, errors: &mut Vec<ValidationError>) {
    let lists: [(&'static str, &Vec<u8>); 5] = [
        ("normal", &exe.wild.normal),
        ("village", &exe.wild.village),
        ("dungeon", &exe.wild.dungeon),
        ("tavern", &exe.wild.tavern),
        ("temple", &exe.wild.temple),
    ];
    for (list, ids) in lists {
        if ids.is_empty() {
            errors.push(ValidationError::EmptyBlockList(list));
        }
        if chunk_count == 0 {
            continue;
        }
        for &id in ids {
            if id == 0 || id as usize > chunk_count {
                errors.push(ValidationError::UnknownWildChunk {
                    list,
                    id,
                    count: chunk_count,
                });
            }
        }
    }
}

fn check_city_blocks(exe: &ExeData, errors: &mut Vec<ValidationError>) {
    let blocks = &exe.city_blocks;
    if blocks.codes.len() != CITY_BLOCK_CATEGORIES {
        errors.push(ValidationError::CityBlockTable {
            table: "codes",
            len: blocks.codes.len(),
            expected: CITY_BLOCK_CATEGORIES,
        });
    }
    if blocks.variations.len() != CITY_BLOCK_CATEGORIES {
        errors.push(ValidationError::CityBlockTable {
            table: "variations",
            len: blocks.variations.len(),
            expected: CITY_BLOCK_CATEGORIES,
        });
    }
    if blocks.rotations.is_empty() {
        errors.push(ValidationError::CityBlockTable {
            table: "rotations",
            len: 0,
            expected: 4,
        });
    }
    for (i, &count) in blocks.variations.iter().enumerate() {
        if count == 0 {
            errors.push(ValidationError::ZeroVariations(i));
        }
    }
}

fn check_layers(name: &str, set: &LayerSet, errors: &mut Vec<ValidationError>) {
    let expected = set.len();
    for layer in ALL_LAYERS {
        let actual = set.layer(layer).len();
        if actual != expected {
            errors.push(ValidationError::LayerSize {
                name: name.to_string(),
                layer: layer.name(),
                expected,
                actual,
            });
        }
    }
}

/// Check a pack for gaps that would abort a city or wilderness load.
pub fn validate_pack(pack: &AssetPack) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_names(&pack.exe.city_gen, &mut errors);
    check_heights(&pack.exe.wall_heights, &mut errors);
    check_wild(&pack.exe, pack.library.wild_chunks().len(), &mut errors);
    check_city_blocks(&pack.exe, &mut errors);

    for (name, set) in pack.library.layouts() {
        check_layers(name, set, &mut errors);
    }
    for (i, chunk) in pack.library.wild_chunks().iter().enumerate() {
        check_layers(&format!("WILD{:03}.RMD", i + 1), chunk, &mut errors);
    }

    if !pack.library.has_layout(&pack.city.map_filename) {
        errors.push(ValidationError::MissingSkeleton(pack.city.map_filename.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::library::AssetLibrary;
    use crate::location::CityDefinition;
    use arena_core::types::ClimateType;
    use glam::IVec2;

    fn strings(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("s{i}")).collect()
    }

    fn valid_pack() -> AssetPack {
        let mut exe = ExeData::default();
        exe.city_gen = CityGenNames {
            tavern_prefixes: strings(23),
            tavern_suffixes: strings(23),
            tavern_marine_suffixes: strings(23),
            equipment_prefixes: strings(20),
            equipment_suffixes: strings(10),
            temple_prefixes: strings(3),
            temple1_suffixes: strings(5),
            temple2_suffixes: strings(9),
            temple3_suffixes: strings(10),
        };
        exe.wall_heights = WallHeightTables {
            box1a: vec![0; 8],
            box1b: vec![0; 8],
            box1c: vec![0; 8],
            box2a: vec![0; 16],
            box2b: vec![0; 16],
        };
        exe.wild.normal = vec![1];
        exe.wild.village = vec![1];
        exe.wild.dungeon = vec![1];
        exe.wild.tavern = vec![1];
        exe.wild.temple = vec![1];

        let mut library = AssetLibrary::new();
        library.insert_layout("SKEL.MIF", LayerSet::new(4, 4));

        AssetPack {
            name: "valid".into(),
            exe,
            names: Default::default(),
            city: CityDefinition {
                name: "V".into(),
                type_display_name: "City".into(),
                map_filename: "SKEL.MIF".into(),
                city_seed: 1,
                wild_seed: 2,
                race_id: 0,
                climate: ClimateType::Temperate,
                city_blocks_per_side: 2,
                reserved_blocks: Vec::new(),
                block_start_pos: IVec2::ZERO,
                coastal: false,
                premade: false,
                main_quest_temple_override: None,
            },
            interior: None,
            library,
        }
    }

    #[test]
    fn test_valid_pack_passes() {
        assert_eq!(validate_pack(&valid_pack()), Ok(()));
    }

    #[test]
    fn test_short_name_table_rejected() {
        let mut pack = valid_pack();
        pack.exe.city_gen.tavern_prefixes.truncate(22);
        let errors = validate_pack(&pack).expect_err("should fail");
        assert_eq!(
            errors,
            vec![ValidationError::NameTableTooShort {
                table: "tavern_prefixes",
                len: 22,
                required: 23
            }]
        );
    }

    #[test]
    fn test_empty_block_list_rejected() {
        let mut pack = valid_pack();
        pack.exe.wild.dungeon.clear();
        let errors = validate_pack(&pack).expect_err("should fail");
        assert!(errors.contains(&ValidationError::EmptyBlockList("dungeon")));
    }

    #[test]
    fn test_unknown_wild_chunk_rejected() {
        let mut pack = valid_pack();
        pack.library.push_wild_chunk(LayerSet::new(1, 1));
        pack.exe.wild.temple = vec![1, 2];
        let errors = validate_pack(&pack).expect_err("should fail");
        assert_eq!(
            errors,
            vec![ValidationError::UnknownWildChunk {
                list: "temple",
                id: 2,
                count: 1
            }]
        );
    }

    #[test]
    fn test_missing_skeleton_and_tables() {
        let mut pack = valid_pack();
        pack.city.map_filename = "OTHER.MIF".into();
        pack.exe.city_blocks.variations = vec![1, 0];
        pack.exe.wall_heights.box2b.pop();
        let errors = validate_pack(&pack).expect_err("should fail");
        assert!(errors.contains(&ValidationError::MissingSkeleton("OTHER.MIF".into())));
        assert!(errors.contains(&ValidationError::ZeroVariations(1)));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::CityBlockTable { table: "variations", .. }
        )));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::HeightTableTooShort { table: "box2b", .. }
        )));
    }

    #[test]
    fn test_short_layer_rejected() {
        let mut pack = valid_pack();
        let mut broken = LayerSet::new(2, 2);
        broken.map1.pop();
        pack.library.insert_layout("BROKEN.MIF", broken);
        let errors = validate_pack(&pack).expect_err("should fail");
        assert_eq!(
            errors,
            vec![ValidationError::LayerSize {
                name: "BROKEN.MIF".into(),
                layer: "MAP1",
                expected: 4,
                actual: 3
            }]
        );
    }
}
