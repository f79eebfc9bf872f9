//! Procedural city and wilderness assembly on top of the layer decoders.

pub mod city_plan;
pub mod exterior;
pub mod inf_name;
pub mod naming;
pub mod palace;
pub mod wilderness;

#[cfg(test)]
pub(crate) mod test_support;

pub use city_plan::{generate_city, BlockType, CityPlan};
pub use exterior::{load_city, load_interior, load_wilderness, load_wilderness_sized};
pub use naming::NpcNameSource;
pub use palace::{revise_palace_graphics, PalaceRevision};
pub use wilderness::{generate_wilderness_indices, WildIndexGrid};
