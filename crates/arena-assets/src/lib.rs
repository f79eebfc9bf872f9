pub mod defaults;
pub mod error;
pub mod layers;
pub mod library;
pub mod loader;
pub mod location;
pub mod names;
pub mod rmd;
pub mod tables;
pub mod validator;

pub use error::AssetError;
pub use layers::{Layer, LayerSet};
pub use library::AssetLibrary;
pub use loader::{load_pack, load_pack_from_str, AssetPack, LayerSource, PackManifest};
pub use location::{CityDefinition, LegacyLock, MainQuestTempleOverride};
pub use names::NameChunks;
pub use tables::{ExeData, InfData};
pub use validator::{validate_pack, ValidationError};
