//! Parameter tables shared by every level of a world: the per-level INF
//! data and the tables baked into the game executable.

use std::collections::BTreeMap;

use arena_core::LevelError;
use serde::{Deserialize, Serialize};

use crate::defaults;

/// Fetch a required table entry. A missing entry aborts the load.
pub fn table_entry<'a, T>(
    table: &'a [T],
    name: &'static str,
    index: usize,
) -> Result<&'a T, LevelError> {
    table
        .get(index)
        .ok_or(LevelError::MissingTableEntry { table: name, index })
}

fn default_ceiling_height() -> i32 {
    100
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CeilingData {
    #[serde(default = "default_ceiling_height")]
    pub height: i32,
    #[serde(default)]
    pub texture_index: Option<i32>,
    /// Platform thickness scale out of 256.
    #[serde(default)]
    pub box_scale: Option<i32>,
}

impl Default for CeilingData {
    fn default() -> Self {
        Self {
            height: default_ceiling_height(),
            texture_index: None,
            box_scale: None,
        }
    }
}

/// The subset of a level's .INF file the decoders consult.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfData {
    pub name: String,
    #[serde(default)]
    pub ceiling: CeilingData,
    /// *BOXSIDE: platform wall texture by 4-bit id.
    #[serde(default)]
    pub box_sides: BTreeMap<u16, i32>,
    /// *BOXCAP: platform cap texture by 4-bit id.
    #[serde(default)]
    pub box_caps: BTreeMap<u16, i32>,
    #[serde(default)]
    pub dry_chasm: Option<i32>,
    #[serde(default)]
    pub wet_chasm: Option<i32>,
    #[serde(default)]
    pub lava_chasm: Option<i32>,
    #[serde(default)]
    pub level_up: Option<i32>,
    #[serde(default)]
    pub level_down: Option<i32>,
    /// *MENU: menu id by texture index.
    #[serde(default)]
    pub menus: BTreeMap<i32, i32>,
}

impl InfData {
    pub fn box_side(&self, id: u16) -> Option<i32> {
        self.box_sides.get(&id).copied()
    }

    pub fn box_cap(&self, id: u16) -> Option<i32> {
        self.box_caps.get(&id).copied()
    }

    pub fn menu_index(&self, texture_index: i32) -> Option<i32> {
        self.menus.get(&texture_index).copied()
    }
}

/// Raised-platform offset and thickness tables, in Arena units.
/// `a` tables are for interiors, `b` for cities, `box1c` for the wilderness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WallHeightTables {
    pub box1a: Vec<i32>,
    pub box1b: Vec<i32>,
    pub box1c: Vec<i32>,
    pub box2a: Vec<i32>,
    pub box2b: Vec<i32>,
}

/// Building name components.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityGenNames {
    pub tavern_prefixes: Vec<String>,
    pub tavern_suffixes: Vec<String>,
    pub tavern_marine_suffixes: Vec<String>,
    pub equipment_prefixes: Vec<String>,
    pub equipment_suffixes: Vec<String>,
    pub temple_prefixes: Vec<String>,
    pub temple1_suffixes: Vec<String>,
    pub temple2_suffixes: Vec<String>,
    pub temple3_suffixes: Vec<String>,
}

impl CityGenNames {
    /// Suffix table for temple model 0, 1 or 2.
    pub fn temple_suffixes(&self, model: usize) -> &[String] {
        match model {
            0 => &self.temple1_suffixes,
            1 => &self.temple2_suffixes,
            _ => &self.temple3_suffixes,
        }
    }
}

/// Terrain chunk ids (1-based) available to each wilderness category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WildernessBlockLists {
    pub normal: Vec<u8>,
    pub village: Vec<u8>,
    pub dungeon: Vec<u8>,
    pub tavern: Vec<u8>,
    pub temple: Vec<u8>,
}

/// Premade block naming tables, indexed by block category
/// (Equipment, MagesGuild, NobleHouse, Temple, Tavern, Spacer, Houses).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityBlockTables {
    pub codes: Vec<String>,
    pub variations: Vec<u32>,
    pub rotations: Vec<String>,
}

impl Default for CityBlockTables {
    fn default() -> Self {
        Self {
            codes: defaults::CITY_BLOCK_CODES.iter().map(|s| s.to_string()).collect(),
            variations: defaults::CITY_BLOCK_VARIATIONS.to_vec(),
            rotations: defaults::CITY_BLOCK_ROTATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl CityBlockTables {
    /// Layout name of a block, e.g. `EQBD1A.MIF`.
    pub fn layout_name(code: &str, variation: u32, rotation: &str) -> String {
        format!("{code}BD{variation}{rotation}.MIF")
    }
}

/// Tables baked into the game executable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExeData {
    pub wall_heights: WallHeightTables,
    pub city_gen: CityGenNames,
    pub wild: WildernessBlockLists,
    #[serde(default)]
    pub city_blocks: CityBlockTables,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_entry() {
        let table = vec![10, 20, 30];
        assert_eq!(*table_entry(&table, "t", 2).expect("in range"), 30);
        assert!(matches!(
            table_entry(&table, "t", 3),
            Err(LevelError::MissingTableEntry { table: "t", index: 3 })
        ));
    }

    #[test]
    fn test_layout_name() {
        assert_eq!(CityBlockTables::layout_name("EQ", 1, "A"), "EQBD1A.MIF");
        assert_eq!(CityBlockTables::layout_name("BS", 20, "D"), "BSBD20D.MIF");
    }

    #[test]
    fn test_inf_lookups() {
        let mut inf = InfData::default();
        inf.box_sides.insert(3, 42);
        inf.menus.insert(7, 1);
        assert_eq!(inf.box_side(3), Some(42));
        assert_eq!(inf.box_side(4), None);
        assert_eq!(inf.menu_index(7), Some(1));
        assert_eq!(inf.ceiling.height, 100);
    }

    #[test]
    fn test_inf_from_ron_defaults() {
        let inf: InfData = ron::Options::default()
            .from_str(r#"(name: "TCN.INF", dry_chasm: Some(5))"#)
            .expect("should parse");
        assert_eq!(inf.dry_chasm, Some(5));
        assert_eq!(inf.ceiling, CeilingData::default());
        assert!(inf.menus.is_empty());
    }
}
