use arena_assets::tables::{table_entry, CityBlockTables};
use arena_assets::{AssetLibrary, CityDefinition, LayerSet};
use arena_core::constants::CITY_BLOCK_DIM;
use arena_core::{ArenaRandom, LevelError};

/// Category of one city plan slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BlockType {
    Empty = 0,
    Reserved = 1,
    Equipment = 2,
    MagesGuild = 3,
    NobleHouse = 4,
    Temple = 5,
    Tavern = 6,
    Spacer = 7,
    Houses = 8,
}

/// Blocks every generated city gets exactly one of, in placement order.
pub const UNIQUE_BLOCKS: [BlockType; 6] = [
    BlockType::Equipment,
    BlockType::MagesGuild,
    BlockType::NobleHouse,
    BlockType::Temple,
    BlockType::Tavern,
    BlockType::Spacer,
];

impl BlockType {
    /// Row in the block code and variation tables. Only placeable blocks
    /// have one.
    pub fn table_index(self) -> Option<usize> {
        match self {
            BlockType::Empty | BlockType::Reserved => None,
            other => Some(other as usize - 2),
        }
    }

    /// Block category for one fill-phase draw.
    pub fn from_fill_value(value: u32) -> Self {
        match value {
            0..=0x7333 => BlockType::Houses,
            0x7334..=0xA666 => BlockType::Tavern,
            0xA667..=0xCCCC => BlockType::Equipment,
            0xCCCD..=0xE666 => BlockType::Temple,
            _ => BlockType::NobleHouse,
        }
    }
}

/// Square grid of block slots, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityPlan {
    side: usize,
    slots: Vec<BlockType>,
}

impl CityPlan {
    pub fn new(side: usize) -> Self {
        Self {
            side,
            slots: vec![BlockType::Empty; side * side],
        }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn slots(&self) -> &[BlockType] {
        &self.slots
    }

    pub fn get(&self, index: usize) -> Option<BlockType> {
        self.slots.get(index).copied()
    }

    pub fn count(&self, block: BlockType) -> usize {
        self.slots.iter().filter(|&&b| b == block).count()
    }

    /// Mark reserved slots. Legacy lists can name slots past the end of a
    /// small plan; those are ignored.
    pub fn reserve(&mut self, reserved: &[u8]) {
        for &index in reserved {
            if let Some(slot) = self.slots.get_mut(index as usize) {
                *slot = BlockType::Reserved;
            }
        }
    }

    /// Put `block` in a random empty slot, redrawing until one is hit.
    /// Returns false without drawing when the plan has no empty slot left.
    pub fn place(&mut self, block: BlockType, random: &mut ArenaRandom) -> bool {
        if self.slots.is_empty() || !self.slots.contains(&BlockType::Empty) {
            log::warn!("No empty city plan slot left for {:?}", block);
            return false;
        }

        let size = self.slots.len();
        loop {
            let index = random.next() as usize % size;
            if self.slots[index] == BlockType::Empty {
                self.slots[index] = block;
                return true;
            }
        }
    }

    pub fn place_unique_blocks(&mut self, random: &mut ArenaRandom) {
        for block in UNIQUE_BLOCKS {
            self.place(block, random);
        }
    }

    /// One draw per remaining empty slot, each classified by
    /// `BlockType::from_fill_value` and placed like the unique blocks.
    pub fn fill_remaining(&mut self, random: &mut ArenaRandom) {
        let remaining = self.count(BlockType::Empty);
        for _ in 0..remaining {
            let block = BlockType::from_fill_value(random.next());
            self.place(block, random);
        }
    }
}

fn draw_index(
    random: &mut ArenaRandom,
    len: usize,
    table: &'static str,
) -> Result<usize, LevelError> {
    if len == 0 {
        return Err(LevelError::MissingTableEntry { table, index: 0 });
    }
    Ok(random.next() as usize % len)
}

/// Plan a procedural city and copy each block's layout into `skeleton`.
///
/// Blocks are copied in plan order, left to right along each skeleton row
/// and then down, starting at the city's block start position. Every draw
/// comes from `random` in legacy order, so the same seed rebuilds the same
/// city.
pub fn generate_city(
    city: &CityDefinition,
    skeleton: &mut LayerSet,
    random: &mut ArenaRandom,
    tables: &CityBlockTables,
    library: &AssetLibrary,
) -> Result<CityPlan, LevelError> {
    let mut plan = CityPlan::new(city.city_blocks_per_side);
    plan.reserve(&city.reserved_blocks);
    plan.place_unique_blocks(random);
    plan.fill_remaining(random);

    let side = plan.side();
    for (index, &block) in plan.slots().iter().enumerate() {
        let table_index = match block.table_index() {
            Some(i) => i,
            None => {
                if block == BlockType::Empty {
                    log::warn!("City plan slot {} was never filled", index);
                }
                continue;
            }
        };

        let code = table_entry(&tables.codes, "city block codes", table_index)?;
        let rotation_index = draw_index(random, tables.rotations.len(), "city block rotations")?;
        let rotation = &tables.rotations[rotation_index];
        let variations = *table_entry(&tables.variations, "city block variations", table_index)?;
        let variation = draw_index(random, variations as usize, "city block variations")?.max(1);

        let name = CityBlockTables::layout_name(code, variation as u32, rotation);
        let layout = library.layout(&name)?;

        let x_dim = (index % side) as i32;
        let y_dim = (index / side) as i32;
        let x_offset = city.block_start_pos.x + x_dim * CITY_BLOCK_DIM;
        let z_offset = city.block_start_pos.y + y_dim * CITY_BLOCK_DIM;
        skeleton.blit(layout, &name, x_offset, z_offset)?;
        log::trace!("Placed {} at ({}, {})", name, x_offset, z_offset);
    }

    log::debug!(
        "Generated {}x{} city plan for {} ({} reserved)",
        side,
        side,
        city.name,
        plan.count(BlockType::Reserved)
    );
    Ok(plan)
}
