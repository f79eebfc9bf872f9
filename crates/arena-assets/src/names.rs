use arena_core::{ArenaRandom, LevelError};
use serde::{Deserialize, Serialize};

use crate::tables::table_entry;

/// Name chunk lists for one race. A name is built by drawing one chunk from
/// each list in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceNameRules {
    pub male: Vec<Vec<String>>,
    pub female: Vec<Vec<String>>,
}

/// NPC name generation rules, indexed by race id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameChunks {
    pub races: Vec<RaceNameRules>,
}

impl NameChunks {
    pub fn generate(
        &self,
        race_id: u32,
        is_male: bool,
        random: &mut ArenaRandom,
    ) -> Result<String, LevelError> {
        let rules = table_entry(&self.races, "name chunk races", race_id as usize)?;
        let parts = if is_male { &rules.male } else { &rules.female };

        let mut name = String::new();
        for chunks in parts.iter().filter(|c| !c.is_empty()) {
            let index = random.next() as usize % chunks.len();
            name.push_str(&chunks[index]);
        }
        Ok(name)
    }
}
