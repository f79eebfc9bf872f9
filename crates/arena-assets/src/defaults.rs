//! Legacy city block tables, indexed by block category
//! (Equipment, MagesGuild, NobleHouse, Temple, Tavern, Spacer, Houses).

pub const CITY_BLOCK_CODES: [&str; 7] = ["EQ", "MG", "NB", "TP", "TV", "TS", "BS"];

pub const CITY_BLOCK_VARIATIONS: [u32; 7] = [13, 11, 10, 12, 15, 11, 20];

pub const CITY_BLOCK_ROTATIONS: [&str; 4] = ["A", "B", "C", "D"];

/// Number of block categories a city plan can place.
pub const CITY_BLOCK_CATEGORIES: usize = CITY_BLOCK_CODES.len();
