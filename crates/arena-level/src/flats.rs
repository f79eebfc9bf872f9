use std::collections::HashMap;

use arena_core::GridPos;
use serde::{Deserialize, Serialize};

/// Every grid position a flat (sprite or entity template) appears at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatPlacement {
    pub flat_index: i32,
    pub positions: Vec<GridPos>,
}

/// One placement per distinct flat index, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FlatPlacements {
    entries: Vec<FlatPlacement>,
    by_index: HashMap<i32, usize>,
}

impl FlatPlacements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, flat_index: i32, position: GridPos) {
        let entry = *self.by_index.entry(flat_index).or_insert_with(|| {
            self.entries.push(FlatPlacement {
                flat_index,
                positions: Vec::new(),
            });
            self.entries.len() - 1
        });
        self.entries[entry].positions.push(position);
    }

    pub fn get(&self, flat_index: i32) -> Option<&FlatPlacement> {
        self.by_index.get(&flat_index).map(|&i| &self.entries[i])
    }

    pub fn entries(&self) -> &[FlatPlacement] {
        &self.entries
    }

    /// Total positions across all flats.
    pub fn instance_count(&self) -> usize {
        self.entries.iter().map(|e| e.positions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
