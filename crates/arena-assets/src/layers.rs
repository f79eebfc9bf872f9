use arena_core::constants::WILD_LEVEL_HEIGHT;
use arena_core::LevelError;
use serde::{Deserialize, Serialize};

use crate::error::AssetError;

/// One of the three parallel code layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Flor,
    Map1,
    Map2,
}

pub const ALL_LAYERS: [Layer; 3] = [Layer::Flor, Layer::Map1, Layer::Map2];

impl Layer {
    pub fn name(self) -> &'static str {
        match self {
            Layer::Flor => "FLOR",
            Layer::Map1 => "MAP1",
            Layer::Map2 => "MAP2",
        }
    }
}

fn default_height() -> usize {
    WILD_LEVEL_HEIGHT
}

/// FLOR/MAP1/MAP2 codes of a block layout, terrain chunk or whole level.
///
/// Codes are stored in file order: `depth` rows of `width` codes each. The
/// level grid is the transpose of this layout, so a grid is `depth` voxels
/// wide along X and `width` voxels deep along Z.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerSet {
    pub width: usize,
    pub depth: usize,
    #[serde(default = "default_height")]
    pub height: usize,
    pub flor: Vec<u16>,
    pub map1: Vec<u16>,
    #[serde(default)]
    pub map2: Vec<u16>,
}

impl LayerSet {
    /// All-zero layers.
    pub fn new(width: usize, depth: usize) -> Self {
        let len = width * depth;
        Self {
            width,
            depth,
            height: default_height(),
            flor: vec![0; len],
            map1: vec![0; len],
            map2: vec![0; len],
        }
    }

    /// Decode three consecutive little-endian u16 layers.
    pub fn from_le_bytes(
        name: &str,
        width: usize,
        depth: usize,
        bytes: &[u8],
    ) -> Result<Self, AssetError> {
        let layer_bytes = width * depth * 2;
        let expected = layer_bytes * 3;
        if bytes.len() != expected {
            return Err(AssetError::LayerFileSize {
                name: name.to_string(),
                expected,
                actual: bytes.len(),
            });
        }

        let read = |i: usize| -> Vec<u16> {
            bytes[i * layer_bytes..(i + 1) * layer_bytes]
                .chunks_exact(2)
                .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                .collect()
        };

        Ok(Self {
            width,
            depth,
            height: default_height(),
            flor: read(0),
            map1: read(1),
            map2: read(2),
        })
    }

    pub fn len(&self) -> usize {
        self.width * self.depth
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Level grid extent along X.
    pub fn grid_width(&self) -> usize {
        self.depth
    }

    /// Level grid extent along Z.
    pub fn grid_depth(&self) -> usize {
        self.width
    }

    pub fn layer(&self, layer: Layer) -> &[u16] {
        match layer {
            Layer::Flor => &self.flor,
            Layer::Map1 => &self.map1,
            Layer::Map2 => &self.map2,
        }
    }

    pub fn layer_mut(&mut self, layer: Layer) -> &mut Vec<u16> {
        match layer {
            Layer::Flor => &mut self.flor,
            Layer::Map1 => &mut self.map1,
            Layer::Map2 => &mut self.map2,
        }
    }

    /// Check every layer holds `width * depth` codes. An empty MAP2 is
    /// accepted and padded with zeros.
    pub fn normalize(&mut self, name: &str) -> Result<(), AssetError> {
        let expected = self.len();
        if self.map2.is_empty() {
            self.map2 = vec![0; expected];
        }
        for layer in ALL_LAYERS {
            let actual = self.layer(layer).len();
            if actual != expected {
                return Err(AssetError::LayerSize {
                    name: name.to_string(),
                    layer: layer.name(),
                    expected,
                    actual,
                });
            }
        }
        Ok(())
    }

    /// Copy every row of `src` into these layers with its top-left code at
    /// column `x_offset`, row `z_offset`.
    pub fn blit(
        &mut self,
        src: &LayerSet,
        src_name: &str,
        x_offset: i32,
        z_offset: i32,
    ) -> Result<(), LevelError> {
        let fits = x_offset >= 0
            && z_offset >= 0
            && x_offset as usize + src.width <= self.width
            && z_offset as usize + src.depth <= self.depth;
        if !fits {
            return Err(LevelError::BlockOverflow {
                name: src_name.to_string(),
                x: x_offset,
                z: z_offset,
                width: self.width,
                depth: self.depth,
            });
        }

        let width = self.width;
        for layer in ALL_LAYERS {
            let src_codes = src.layer(layer);
            let dst_codes = self.layer_mut(layer);
            for z in 0..src.depth {
                let src_index = z * src.width;
                let dst_index = x_offset as usize + (z + z_offset as usize) * width;
                dst_codes[dst_index..dst_index + src.width]
                    .copy_from_slice(&src_codes[src_index..src_index + src.width]);
            }
        }
        Ok(())
    }

    /// Zero a `rows` x `cols` rectangle starting at row `row`, column `col`.
    pub fn clear_region(&mut self, row: usize, col: usize, rows: usize, cols: usize) {
        let width = self.width;
        let depth = self.depth;
        for layer in ALL_LAYERS {
            let codes = self.layer_mut(layer);
            for r in row..(row + rows).min(depth) {
                let start = col + r * width;
                let end = (start + cols).min((r + 1) * width);
                if start < end {
                    codes[start..end].fill(0);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: usize, depth: usize) -> LayerSet {
        let mut set = LayerSet::new(width, depth);
        for i in 0..set.len() {
            set.flor[i] = i as u16 + 1;
            set.map1[i] = 0x100 + i as u16;
            set.map2[i] = 0x200 + i as u16;
        }
        set
    }

    #[test]
    fn test_from_le_bytes() {
        let mut bytes = Vec::new();
        for v in [0x6300u16, 0x0001, 0x2F2F, 0x8005, 0x0080, 0x8080] {
            bytes.extend_from_slice(&v.to_le_bytes());
        }
        let set = LayerSet::from_le_bytes("T", 2, 1, &bytes).expect("valid size");
        assert_eq!(set.flor, vec![0x6300, 0x0001]);
        assert_eq!(set.map1, vec![0x2F2F, 0x8005]);
        assert_eq!(set.map2, vec![0x0080, 0x8080]);
    }

    #[test]
    fn test_from_le_bytes_wrong_size() {
        let result = LayerSet::from_le_bytes("T", 2, 2, &[0u8; 10]);
        assert!(matches!(
            result,
            Err(AssetError::LayerFileSize { expected: 24, actual: 10, .. })
        ));
    }

    #[test]
    fn test_grid_dims_are_transposed() {
        let set = LayerSet::new(30, 10);
        assert_eq!(set.grid_width(), 10);
        assert_eq!(set.grid_depth(), 30);
    }

    #[test]
    fn test_normalize_pads_map2() {
        let mut set = LayerSet::new(2, 2);
        set.map2.clear();
        set.normalize("T").expect("padded");
        assert_eq!(set.map2.len(), 4);

        set.map1.pop();
        assert!(set.normalize("T").is_err());
    }

    #[test]
    fn test_blit_rows() {
        let src = numbered(2, 2);
        let mut dst = LayerSet::new(4, 3);
        dst.blit(&src, "SRC", 1, 1).expect("fits");
        assert_eq!(dst.flor, vec![0, 0, 0, 0, 0, 1, 2, 0, 0, 3, 4, 0]);
        assert_eq!(dst.map1[5], 0x100);
        assert_eq!(dst.map2[10], 0x203);
    }

    #[test]
    fn test_blit_overflow_rejected() {
        let src = numbered(2, 2);
        let mut dst = LayerSet::new(3, 3);
        assert!(matches!(
            dst.blit(&src, "SRC", 2, 0),
            Err(LevelError::BlockOverflow { .. })
        ));
        assert!(dst.blit(&src, "SRC", -1, 0).is_err());
    }

    #[test]
    fn test_clear_region() {
        let mut set = numbered(4, 4);
        set.clear_region(1, 1, 2, 2);
        assert_eq!(set.flor[5], 0);
        assert_eq!(set.flor[10], 0);
        assert_eq!(set.flor[4], 5);
        assert_eq!(set.map1[6], 0);
        assert_eq!(set.map2[15], 0x20F);
    }
}
