//! Layer decoders. Each walks a layer in grid order and registers the
//! definitions and placements its codes describe.
//!
//! Layer buffers are read back to front: grid (x, z) is the code at row
//! `grid_width - 1 - x`, column `grid_depth - 1 - z`.

pub mod ceiling;
pub mod flor;
pub mod map1;
pub mod map2;

use arena_assets::{Layer, LayerSet};
use arena_core::LevelError;

use crate::level::Level;

/// Code at grid (x, z) of a layer with the given grid dimensions.
pub(crate) fn read_code(codes: &[u16], grid_width: usize, grid_depth: usize, x: usize, z: usize) -> u16 {
    let index = ((grid_depth - 1) - z) + ((grid_width - 1) - x) * grid_depth;
    codes[index]
}

/// Reject a layer that does not match the level grid.
pub(crate) fn check_layer(level: &Level, layers: &LayerSet, layer: Layer) -> Result<(), LevelError> {
    let expected = level.grid.width() * level.grid.depth();
    let actual = layers.layer(layer).len();
    let dims_match = layers.grid_width() == level.grid.width()
        && layers.grid_depth() == level.grid.depth();
    if !dims_match || actual != expected {
        return Err(LevelError::LayerSizeMismatch {
            layer: layer.name(),
            expected,
            actual,
        });
    }
    Ok(())
}
