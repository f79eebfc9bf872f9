use std::collections::HashMap;

use arena_assets::{ExeData, InfData, LayerSet, LegacyLock};
use arena_core::{GridPos, LevelError, VoxelId, WorldType};
use serde::{Deserialize, Serialize};

use crate::decode;
use crate::def_table::VoxelDefTable;
use crate::flats::FlatPlacements;
use crate::grid::VoxelGrid;
use crate::voxel_def::VoxelDefinition;

/// Display name of one *MENU building.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuName {
    pub position: GridPos,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lock {
    pub position: GridPos,
    pub level: u8,
}

/// A decoded level. Owns its grid, definitions, flats, menu names and locks.
#[derive(Debug, Clone)]
pub struct Level {
    pub name: String,
    pub inf_name: String,
    world_type: WorldType,
    pub(crate) defs: VoxelDefTable,
    pub(crate) grid: VoxelGrid,
    pub(crate) flats: FlatPlacements,
    menu_names: Vec<MenuName>,
    locks: HashMap<GridPos, Lock>,
}

impl Level {
    pub fn new(
        name: &str,
        inf_name: &str,
        world_type: WorldType,
        width: usize,
        height: usize,
        depth: usize,
    ) -> Self {
        Self {
            name: name.to_string(),
            inf_name: inf_name.to_string(),
            world_type,
            defs: VoxelDefTable::new(),
            grid: VoxelGrid::new(width, height, depth),
            flats: FlatPlacements::new(),
            menu_names: Vec::new(),
            locks: HashMap::new(),
        }
    }

    /// Empty level sized to hold `layers`.
    pub fn for_layers(name: &str, inf_name: &str, world_type: WorldType, layers: &LayerSet) -> Self {
        Self::new(
            name,
            inf_name,
            world_type,
            layers.grid_width(),
            layers.height,
            layers.grid_depth(),
        )
    }

    pub fn world_type(&self) -> WorldType {
        self.world_type
    }

    pub fn defs(&self) -> &VoxelDefTable {
        &self.defs
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    pub fn flats(&self) -> &FlatPlacements {
        &self.flats
    }

    pub fn menu_names(&self) -> &[MenuName] {
        &self.menu_names
    }

    pub fn menu_names_mut(&mut self) -> &mut Vec<MenuName> {
        &mut self.menu_names
    }

    pub fn push_menu_name(&mut self, position: GridPos, name: String) {
        self.menu_names.push(MenuName { position, name });
    }

    pub fn locks(&self) -> &HashMap<GridPos, Lock> {
        &self.locks
    }

    pub fn lock_at(&self, position: GridPos) -> Option<&Lock> {
        self.locks.get(&position)
    }

    pub fn voxel(&self, x: i32, y: i32, z: i32) -> Result<VoxelId, LevelError> {
        self.grid.get(x, y, z)
    }

    /// Definition of the voxel at a grid position.
    pub fn voxel_def(&self, x: i32, y: i32, z: i32) -> Result<&VoxelDefinition, LevelError> {
        let id = self.grid.get(x, y, z)?;
        Ok(self.defs.get(id))
    }

    pub fn decode_flor(&mut self, layers: &LayerSet, inf: &InfData) -> Result<(), LevelError> {
        decode::flor::decode_flor(self, layers, inf)
    }

    pub fn decode_map1(
        &mut self,
        layers: &LayerSet,
        inf: &InfData,
        exe: &ExeData,
    ) -> Result<(), LevelError> {
        decode::map1::decode_map1(self, layers, inf, exe)
    }

    pub fn decode_map2(&mut self, layers: &LayerSet) -> Result<(), LevelError> {
        decode::map2::decode_map2(self, layers)
    }

    pub fn decode_ceiling(&mut self, inf: &InfData) -> Result<(), LevelError> {
        decode::ceiling::decode_ceiling(self, inf)
    }

    /// Store legacy locks at their grid positions.
    pub fn decode_locks(&mut self, locks: &[LegacyLock]) {
        let (width, depth) = (self.grid.width(), self.grid.depth());
        for lock in locks {
            let position = arena_core::coords::transformed_coordinate(
                GridPos::new(lock.x, lock.y),
                width,
                depth,
            );
            self.locks.insert(
                position,
                Lock {
                    position,
                    level: lock.level,
                },
            );
        }
    }
}
