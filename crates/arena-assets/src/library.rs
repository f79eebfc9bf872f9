use std::collections::HashMap;

use arena_core::LevelError;

use crate::layers::LayerSet;
use crate::tables::InfData;

/// Read-only store of the block layouts, terrain chunks and exterior INFs a
/// load draws from.
#[derive(Debug, Clone, Default)]
pub struct AssetLibrary {
    layouts: HashMap<String, LayerSet>,
    wild_chunks: Vec<LayerSet>,
    infs: HashMap<String, InfData>,
}

impl AssetLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Layout names are matched case-insensitively, like the legacy file system.
    pub fn insert_layout(&mut self, name: &str, layout: LayerSet) {
        self.layouts.insert(name.to_ascii_uppercase(), layout);
    }

    /// INFs are keyed by their own name, case-insensitively.
    pub fn insert_inf(&mut self, inf: InfData) {
        self.infs.insert(inf.name.to_ascii_uppercase(), inf);
    }

    pub fn inf(&self, name: &str) -> Result<&InfData, LevelError> {
        self.infs
            .get(&name.to_ascii_uppercase())
            .ok_or_else(|| LevelError::MissingAsset(name.to_string()))
    }

    pub fn inf_count(&self) -> usize {
        self.infs.len()
    }

    pub fn push_wild_chunk(&mut self, chunk: LayerSet) {
        self.wild_chunks.push(chunk);
    }

    pub fn layout(&self, name: &str) -> Result<&LayerSet, LevelError> {
        self.layouts
            .get(&name.to_ascii_uppercase())
            .ok_or_else(|| LevelError::MissingAsset(name.to_string()))
    }

    pub fn has_layout(&self, name: &str) -> bool {
        self.layouts.contains_key(&name.to_ascii_uppercase())
    }

    /// Terrain chunk by its 1-based id.
    pub fn wild_chunk(&self, id: u8) -> Result<&LayerSet, LevelError> {
        (id as usize)
            .checked_sub(1)
            .and_then(|index| self.wild_chunks.get(index))
            .ok_or_else(|| LevelError::MissingAsset(format!("WILD{id:03}.RMD")))
    }

    pub fn layouts(&self) -> impl Iterator<Item = (&String, &LayerSet)> {
        self.layouts.iter()
    }

    pub fn wild_chunks(&self) -> &[LayerSet] {
        &self.wild_chunks
    }

    pub fn layout_count(&self) -> usize {
        self.layouts.len()
    }
}
