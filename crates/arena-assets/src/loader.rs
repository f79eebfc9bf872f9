//! Asset packs: a RON manifest bundling the parameter tables, the location
//! and the layer data (inline, or as binary files next to the manifest).

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AssetError;
use crate::layers::LayerSet;
use crate::library::AssetLibrary;
use crate::location::{CityDefinition, LegacyLock};
use crate::names::NameChunks;
use crate::rmd;
use crate::tables::{ExeData, InfData};

/// Where a layer set's codes come from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerSource {
    Inline(LayerSet),
    /// Three little-endian u16 layers, path relative to the manifest.
    File {
        path: String,
        width: usize,
        depth: usize,
    },
    /// A 64x64 terrain chunk file, path relative to the manifest.
    Rmd(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteriorDefinition {
    pub layout: String,
    pub inf: InfData,
    #[serde(default)]
    pub locks: Vec<LegacyLock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackManifest {
    pub name: String,
    /// Exterior INF files, looked up by name at load time. Each weather and
    /// climate combination a load asks for needs its own entry.
    #[serde(default)]
    pub infs: Vec<InfData>,
    pub exe: ExeData,
    #[serde(default)]
    pub names: NameChunks,
    pub city: CityDefinition,
    #[serde(default)]
    pub layouts: BTreeMap<String, LayerSource>,
    #[serde(default)]
    pub wild_chunks: Vec<LayerSource>,
    #[serde(default)]
    pub interior: Option<InteriorDefinition>,
}

/// A fully resolved asset pack, ready to drive level loads.
#[derive(Debug, Clone)]
pub struct AssetPack {
    pub name: String,
    pub exe: ExeData,
    pub names: NameChunks,
    pub city: CityDefinition,
    pub interior: Option<InteriorDefinition>,
    pub library: AssetLibrary,
}

pub fn parse_manifest(ron_str: &str) -> Result<PackManifest, AssetError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| AssetError::PackParse(e.to_string()))
}

fn read_file(path: &Path) -> Result<Vec<u8>, AssetError> {
    std::fs::read(path).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn resolve_source(name: &str, source: LayerSource, base_dir: &Path) -> Result<LayerSet, AssetError> {
    let mut set = match source {
        LayerSource::Inline(set) => set,
        LayerSource::File { path, width, depth } => {
            let bytes = read_file(&base_dir.join(&path))?;
            LayerSet::from_le_bytes(&path, width, depth, &bytes)?
        }
        LayerSource::Rmd(path) => rmd::read_rmd(&base_dir.join(path))?,
    };
    set.normalize(name)?;
    Ok(set)
}

/// Resolve every layer source of a manifest into an [`AssetPack`].
pub fn resolve_manifest(manifest: PackManifest, base_dir: &Path) -> Result<AssetPack, AssetError> {
    let mut library = AssetLibrary::new();

    for (name, source) in manifest.layouts {
        let set = resolve_source(&name, source, base_dir)?;
        library.insert_layout(&name, set);
    }

    for inf in manifest.infs {
        library.insert_inf(inf);
    }

    for (i, source) in manifest.wild_chunks.into_iter().enumerate() {
        let name = format!("WILD{:03}.RMD", i + 1);
        library.push_wild_chunk(resolve_source(&name, source, base_dir)?);
    }

    log::info!(
        "Asset pack '{}': {} layouts, {} wilderness chunks, {} INFs",
        manifest.name,
        library.layout_count(),
        library.wild_chunks().len(),
        library.inf_count()
    );

    Ok(AssetPack {
        name: manifest.name,
        exe: manifest.exe,
        names: manifest.names,
        city: manifest.city,
        interior: manifest.interior,
        library,
    })
}

pub fn load_pack_from_str(ron_str: &str, base_dir: &Path) -> Result<AssetPack, AssetError> {
    resolve_manifest(parse_manifest(ron_str)?, base_dir)
}

/// Load a pack manifest from disk. Relative layer paths resolve against the
/// manifest's directory.
pub fn load_pack(path: &Path) -> Result<AssetPack, AssetError> {
    let bytes = read_file(path)?;
    let text = String::from_utf8_lossy(&bytes);
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    load_pack_from_str(&text, base_dir)
}

/// Write a manifest as pretty RON.
pub fn manifest_to_string(manifest: &PackManifest) -> Result<String, AssetError> {
    ron::ser::to_string_pretty(manifest, ron::ser::PrettyConfig::default())
        .map_err(|e| AssetError::PackParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_PACK: &str = r#"(
        name: "Test",
        infs: [(name: "TCN.INF", box_sides: {1: 10}), (name: "tws.inf")],
        exe: (
            wall_heights: (box1a: [], box1b: [], box1c: [], box2a: [], box2b: []),
            city_gen: (
                tavern_prefixes: [], tavern_suffixes: [], tavern_marine_suffixes: [],
                equipment_prefixes: [], equipment_suffixes: [],
                temple_prefixes: [], temple1_suffixes: [], temple2_suffixes: [], temple3_suffixes: [],
            ),
            wild: (normal: [1], village: [1], dungeon: [1], tavern: [1], temple: [1]),
        ),
        city: (
            name: "Testville",
            type_display_name: "Village",
            map_filename: "SKEL.MIF",
            city_seed: 4660,
            wild_seed: 99,
            climate: Temperate,
            city_blocks_per_side: 2,
            block_start_pos: (4, 4),
        ),
        layouts: {
            "skel.mif": Inline((width: 2, depth: 1, flor: [1, 2], map1: [0, 0])),
        },
    )"#;

    #[test]
    fn test_minimal_pack() {
        let pack = load_pack_from_str(MINIMAL_PACK, Path::new(".")).expect("should load");
        assert_eq!(pack.name, "Test");
        assert_eq!(pack.library.inf("tcn.inf").expect("city inf").box_side(1), Some(10));
        assert!(pack.library.inf("TWS.INF").is_ok());
        assert!(pack.library.inf("TCR.INF").is_err());
        assert_eq!(pack.exe.city_blocks.codes.len(), 7);
        assert_eq!(pack.city.city_seed, 0x1234);
        let skel = pack.library.layout("SKEL.MIF").expect("layout");
        assert_eq!(skel.map2, vec![0, 0]);
    }

    #[test]
    fn test_malformed_ron_rejected() {
        let result = load_pack_from_str("(name: ", Path::new("."));
        assert!(matches!(result, Err(AssetError::PackParse(_))));
    }

    #[test]
    fn test_bad_layer_size_rejected() {
        let text = MINIMAL_PACK.replace("map1: [0, 0]", "map1: [0]");
        assert!(matches!(
            load_pack_from_str(&text, Path::new(".")),
            Err(AssetError::LayerSize { layer: "MAP1", .. })
        ));
    }

    #[test]
    fn test_missing_rmd_file() {
        let text = MINIMAL_PACK.replace("layouts:", r#"wild_chunks: [Rmd("missing/WILD001.RMD")], layouts:"#);
        assert!(matches!(
            load_pack_from_str(&text, Path::new("/nonexistent")),
            Err(AssetError::Io { .. })
        ));
    }

    #[test]
    fn test_manifest_round_trips_through_ron() {
        let manifest = parse_manifest(MINIMAL_PACK).expect("parse");
        let text = manifest_to_string(&manifest).expect("serialize");
        assert_eq!(parse_manifest(&text).expect("reparse"), manifest);
    }
}
