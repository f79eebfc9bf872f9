//! Wilderness terrain chunks (.RMD): three uncompressed 64x64 little-endian
//! u16 layers back to back, FLOR first.

use std::path::Path;

use arena_core::constants::{RMD_DIM, RMD_LAYER_LEN};

use crate::error::AssetError;
use crate::layers::LayerSet;

/// Exact size of an .RMD file in bytes.
pub const RMD_FILE_SIZE: usize = RMD_LAYER_LEN * 2 * 3;

pub fn parse_rmd(name: &str, bytes: &[u8]) -> Result<LayerSet, AssetError> {
    LayerSet::from_le_bytes(name, RMD_DIM, RMD_DIM, bytes)
}

pub fn read_rmd(path: &Path) -> Result<LayerSet, AssetError> {
    let bytes = std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_rmd(&path.display().to_string(), &bytes)
}

/// Serialize a chunk back to the on-disk layout.
pub fn write_rmd_bytes(chunk: &LayerSet) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(RMD_FILE_SIZE);
    for codes in [&chunk.flor, &chunk.map1, &chunk.map2] {
        for code in codes.iter() {
            bytes.extend_from_slice(&code.to_le_bytes());
        }
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rmd_layers_in_order() {
        let mut chunk = LayerSet::new(RMD_DIM, RMD_DIM);
        chunk.flor[0] = 0x0100;
        chunk.map1[RMD_LAYER_LEN - 1] = 0x2F2F;
        chunk.map2[64] = 0x8080;

        let bytes = write_rmd_bytes(&chunk);
        assert_eq!(bytes.len(), RMD_FILE_SIZE);
        assert_eq!(&bytes[0..2], &[0x00, 0x01]);

        let parsed = parse_rmd("WILD.RMD", &bytes).expect("valid rmd");
        assert_eq!(parsed.flor[0], 0x0100);
        assert_eq!(parsed.map1[RMD_LAYER_LEN - 1], 0x2F2F);
        assert_eq!(parsed.map2[64], 0x8080);
    }

    #[test]
    fn test_truncated_rmd_rejected() {
        let bytes = vec![0u8; RMD_FILE_SIZE - 2];
        assert!(matches!(
            parse_rmd("SHORT.RMD", &bytes),
            Err(AssetError::LayerFileSize { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let result = read_rmd(Path::new("/nonexistent/dir/NOPE.RMD"));
        assert!(matches!(result, Err(AssetError::Io { .. })));
    }
}
