//! Conversions between the legacy (x, y) layout, level-grid positions and
//! chunk-relative positions.

use glam::IVec2;

use crate::constants::CHUNK_DIM;
use crate::types::{GridPos, OriginalPos};

/// Chunk index plus the voxel offset inside that chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub chunk: IVec2,
    pub voxel: IVec2,
}

/// Legacy positions store the axes swapped relative to the level grid.
pub fn original_to_grid(pos: OriginalPos) -> GridPos {
    IVec2::new(pos.y, pos.x)
}

pub fn grid_to_original(pos: GridPos) -> OriginalPos {
    original_to_grid(pos)
}

/// Map a legacy layer position onto the level grid, where both axes are
/// swapped and reversed. Matches the order the layer decoders read codes in.
pub fn transformed_coordinate(pos: OriginalPos, grid_width: usize, grid_depth: usize) -> GridPos {
    IVec2::new(
        grid_width as i32 - 1 - pos.y,
        grid_depth as i32 - 1 - pos.x,
    )
}

/// Smallest multiple of `CHUNK_DIM` that is >= `n`.
pub fn next_higher_chunk_multiple(n: usize) -> i32 {
    let dim = CHUNK_DIM as usize;
    (n.div_ceil(dim) * dim) as i32
}

pub fn chunk_voxel_to_absolute(chunk: IVec2, voxel: IVec2) -> IVec2 {
    chunk * CHUNK_DIM + voxel
}

pub fn absolute_to_chunk_voxel(absolute: IVec2) -> ChunkCoord {
    ChunkCoord {
        chunk: IVec2::new(
            absolute.x.div_euclid(CHUNK_DIM),
            absolute.y.div_euclid(CHUNK_DIM),
        ),
        voxel: IVec2::new(
            absolute.x.rem_euclid(CHUNK_DIM),
            absolute.y.rem_euclid(CHUNK_DIM),
        ),
    }
}

/// Chunk-space position to a level-grid position. Chunk X runs against grid Z.
pub fn chunk_voxel_to_grid(chunk: IVec2, voxel: IVec2, grid_depth: usize) -> GridPos {
    let absolute = chunk_voxel_to_absolute(chunk, voxel);
    let higher_x = next_higher_chunk_multiple(grid_depth);
    IVec2::new(absolute.y, (higher_x - 1) - absolute.x)
}

pub fn grid_to_chunk_voxel(pos: GridPos, grid_depth: usize) -> ChunkCoord {
    let higher_x = next_higher_chunk_multiple(grid_depth);
    absolute_to_chunk_voxel(IVec2::new((higher_x - 1) - pos.y, pos.x))
}
