use arena_core::Facing;
use serde::{Deserialize, Serialize};

use crate::menu::MenuType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChasmKind {
    Dry,
    Wet,
    Lava,
}

/// Which sides of a chasm border solid floor, and so get a wall drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChasmAdjacency {
    pub north: bool,
    pub east: bool,
    pub south: bool,
    pub west: bool,
}

impl ChasmAdjacency {
    pub fn all(value: bool) -> Self {
        Self {
            north: value,
            east: value,
            south: value,
            west: value,
        }
    }

    pub fn as_array(&self) -> [bool; 4] {
        [self.north, self.east, self.south, self.west]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WallKind {
    Solid,
    LevelUp,
    LevelDown,
    Menu,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoorKind {
    Swinging,
    Sliding,
    Raising,
}

/// *MENU id of a wall plus the building type it resolves to for this level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MenuRef {
    pub id: i32,
    pub menu_type: MenuType,
}

/// Decoded meaning of a tile code. Texture ids index the level's INF textures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VoxelDefinition {
    Empty,
    Floor {
        texture: i32,
    },
    Chasm {
        texture: i32,
        kind: ChasmKind,
        adjacency: ChasmAdjacency,
    },
    Wall {
        side: i32,
        floor: i32,
        ceiling: i32,
        kind: WallKind,
        menu: Option<MenuRef>,
    },
    /// Platform whose vertical extent and V range are normalized to the
    /// ceiling height.
    Raised {
        side: i32,
        floor: i32,
        ceiling: i32,
        y_offset: f64,
        y_size: f64,
        v_top: f64,
        v_bottom: f64,
    },
    TransparentWall {
        texture: i32,
        collider: bool,
    },
    Edge {
        texture: i32,
        y_offset: f64,
        collider: bool,
        flipped: bool,
        facing: Facing,
    },
    Door {
        texture: i32,
        kind: DoorKind,
    },
    Diagonal {
        texture: i32,
        right_diagonal: bool,
    },
    Ceiling {
        texture: i32,
    },
}

impl VoxelDefinition {
    /// Wall with the same texture on every face.
    pub fn wall(texture: i32, kind: WallKind, menu: Option<MenuRef>) -> Self {
        VoxelDefinition::Wall {
            side: texture,
            floor: texture,
            ceiling: texture,
            kind,
            menu,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            VoxelDefinition::Empty => "Empty",
            VoxelDefinition::Floor { .. } => "Floor",
            VoxelDefinition::Chasm { .. } => "Chasm",
            VoxelDefinition::Wall { .. } => "Wall",
            VoxelDefinition::Raised { .. } => "Raised",
            VoxelDefinition::TransparentWall { .. } => "TransparentWall",
            VoxelDefinition::Edge { .. } => "Edge",
            VoxelDefinition::Door { .. } => "Door",
            VoxelDefinition::Diagonal { .. } => "Diagonal",
            VoxelDefinition::Ceiling { .. } => "Ceiling",
        }
    }

    /// Menu reference of a *MENU wall.
    pub fn menu(&self) -> Option<MenuRef> {
        match self {
            VoxelDefinition::Wall {
                kind: WallKind::Menu,
                menu,
                ..
            } => *menu,
            _ => None,
        }
    }

    pub fn is_menu_of(&self, menu_type: MenuType) -> bool {
        self.menu().is_some_and(|m| m.menu_type == menu_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_only_on_menu_walls() {
        let menu = Some(MenuRef {
            id: 1,
            menu_type: MenuType::Tavern,
        });
        let tavern = VoxelDefinition::wall(4, WallKind::Menu, menu);
        assert!(tavern.is_menu_of(MenuType::Tavern));
        assert!(!tavern.is_menu_of(MenuType::Temple));

        let stairs = VoxelDefinition::wall(4, WallKind::LevelUp, menu);
        assert_eq!(stairs.menu(), None);
        assert_eq!(VoxelDefinition::Floor { texture: 1 }.menu(), None);
    }

    #[test]
    fn test_adjacency_array_order() {
        let adj = ChasmAdjacency {
            north: true,
            east: false,
            south: true,
            west: false,
        };
        assert_eq!(adj.as_array(), [true, false, true, false]);
        assert_eq!(ChasmAdjacency::all(true).as_array(), [true; 4]);
    }
}
