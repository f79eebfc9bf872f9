//! Decoding of FLOR/MAP1/MAP2 code layers into a voxel grid backed by a
//! deduplicated definition table.

pub mod decode;
pub mod def_table;
pub mod flats;
pub mod grid;
pub mod level;
pub mod menu;
pub mod voxel_def;

pub use def_table::{DefKey, VoxelDefTable};
pub use flats::{FlatPlacement, FlatPlacements};
pub use grid::VoxelGrid;
pub use level::{Level, Lock, MenuName};
pub use menu::{menu_type, MenuType};
pub use voxel_def::{ChasmAdjacency, ChasmKind, DoorKind, MenuRef, VoxelDefinition, WallKind};
