use std::collections::HashMap;

use arena_core::{LevelError, VoxelId};

use crate::voxel_def::{ChasmAdjacency, VoxelDefinition};

/// Lookup key for an already-decoded tile code. Codes are scoped by layer
/// since the same value means different things in FLOR, MAP1 and MAP2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DefKey {
    Floor(u16),
    Chasm(u16, ChasmAdjacency),
    Map1(u16),
    Map2(u16),
    Ceiling(i32),
}

/// Deduplicated voxel definitions of one level. Index 0 is air.
///
/// The definition list is the source of truth and only ever grows, so ids
/// handed out stay valid for the level's lifetime. `by_key` caches the id
/// each raw code resolved to. Two codes that decode to the same definition
/// share one id.
#[derive(Debug, Clone)]
pub struct VoxelDefTable {
    defs: Vec<VoxelDefinition>,
    by_key: HashMap<DefKey, VoxelId>,
}

impl Default for VoxelDefTable {
    fn default() -> Self {
        Self::new()
    }
}

impl VoxelDefTable {
    pub fn new() -> Self {
        Self {
            defs: vec![VoxelDefinition::Empty],
            by_key: HashMap::new(),
        }
    }

    /// Id for `key`, decoding and appending a definition on first sight.
    pub fn get_or_create<F>(&mut self, key: DefKey, decode: F) -> Result<VoxelId, LevelError>
    where
        F: FnOnce() -> Result<VoxelDefinition, LevelError>,
    {
        if let Some(&id) = self.by_key.get(&key) {
            return Ok(id);
        }

        let def = decode()?;
        let id = match self.defs.iter().position(|existing| *existing == def) {
            Some(index) => index as VoxelId,
            None => {
                let index = self.defs.len();
                if index > VoxelId::MAX as usize {
                    return Err(LevelError::DefinitionTableFull(index));
                }
                self.defs.push(def);
                index as VoxelId
            }
        };

        self.by_key.insert(key, id);
        Ok(id)
    }

    /// # Panics
    /// If `id` was not handed out by this table.
    pub fn get(&self, id: VoxelId) -> &VoxelDefinition {
        &self.defs[id as usize]
    }

    pub fn find(&self, key: &DefKey) -> Option<VoxelId> {
        self.by_key.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (VoxelId, &VoxelDefinition)> {
        self.defs.iter().enumerate().map(|(i, d)| (i as VoxelId, d))
    }
}
