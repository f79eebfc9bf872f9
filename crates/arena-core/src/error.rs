use thiserror::Error;

/// Conditions that abort a level load. Recoverable gaps in legacy data are
/// logged at the point of detection and never reach this type.
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("voxel ({x}, {y}, {z}) is outside the {width}x{height}x{depth} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        z: i32,
        width: usize,
        height: usize,
        depth: usize,
    },

    #[error("required asset \"{0}\" not found")]
    MissingAsset(String),

    #[error("table '{table}' has no entry at index {index}")]
    MissingTableEntry { table: &'static str, index: usize },

    #[error("block \"{name}\" at offset ({x}, {z}) does not fit in a {width}x{depth} layer")]
    BlockOverflow {
        name: String,
        x: i32,
        z: i32,
        width: usize,
        depth: usize,
    },

    #[error("unsupported door type {door_type:#x} in MAP1 code {code:#06x}")]
    UnsupportedDoor { code: u16, door_type: u16 },

    #[error("{layer} has {actual} codes, expected {expected}")]
    LayerSizeMismatch {
        layer: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("voxel definition table is full ({0} entries)")]
    DefinitionTableFull(usize),

    #[error("wilderness needs at least 2 chunks per side, got {0}")]
    WildernessTooSmall(usize),

    #[error("menu name index {index} out of range ({len} names)")]
    MenuNameIndex { index: usize, len: usize },
}
