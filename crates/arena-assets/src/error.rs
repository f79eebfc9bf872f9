use std::path::PathBuf;

/// Errors raised while reading an asset pack or a binary layer file.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse asset pack RON: {0}")]
    PackParse(String),

    #[error("layer file \"{name}\" is {actual} bytes, expected {expected}")]
    LayerFileSize {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("layer set \"{name}\": {layer} has {actual} codes, expected {expected}")]
    LayerSize {
        name: String,
        layer: &'static str,
        expected: usize,
        actual: usize,
    },
}
