//! Fixed values of the legacy level formats. Everything that the asset
//! files themselves do not carry lives here.

/// Vertical units per voxel in the legacy wall-height tables.
pub const ARENA_UNITS: f64 = 128.0;

/// FLOR texture marker for a dry chasm.
pub const DRY_CHASM: u16 = 0x0C;

/// FLOR texture marker for a wet (water) chasm.
pub const WET_CHASM: u16 = 0x0D;

/// FLOR texture marker for a lava chasm.
pub const LAVA_CHASM: u16 = 0x0E;

/// Edge length of a wilderness terrain chunk (.RMD) in voxels.
pub const RMD_DIM: usize = 64;

/// Codes per layer in one terrain chunk.
pub const RMD_LAYER_LEN: usize = RMD_DIM * RMD_DIM;

/// Wilderness chunks along each side of the chunk-index grid.
pub const WILD_CHUNKS_PER_SIDE: usize = 64;

/// Voxel height of a wilderness level.
pub const WILD_LEVEL_HEIGHT: usize = 6;

/// Edge length of a procedurally placed city block.
pub const CITY_BLOCK_DIM: i32 = 20;

/// Furthest a palace gate can sit from its palace graphic.
pub const MAX_GATE_DIST: i32 = 8;

/// Chunk edge used by the chunk/voxel coordinate helpers.
pub const CHUNK_DIM: i32 = 64;

/// Y level of the floor layer.
pub const FLOOR_Y: usize = 0;

/// Y level of the main structure layer (MAP1).
pub const MAIN_FLOOR_Y: usize = 1;

/// First Y level of the upper-story layer (MAP2) and of interior ceilings.
pub const UPPER_Y: usize = 2;

/// Default `ArenaRandom` seed when none is supplied.
pub const DEFAULT_RANDOM_SEED: u32 = 12345;
