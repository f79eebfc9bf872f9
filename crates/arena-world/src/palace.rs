use arena_assets::LayerSet;
use arena_core::constants::MAX_GATE_DIST;
use arena_core::CardinalDirection;
use glam::IVec2;

/// Codes written over a palace facade and its gate, per city edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PalaceCodes {
    first: u16,
    second: u16,
    gate: u16,
}

fn palace_codes(edge: CardinalDirection) -> PalaceCodes {
    let (first, second, gate) = match edge {
        CardinalDirection::North => (0xA5B5, 0xA5B4, 0xA1B3),
        CardinalDirection::South => (0xA534, 0xA535, 0xA133),
        CardinalDirection::East => (0xA574, 0xA575, 0xA173),
        CardinalDirection::West => (0xA5F5, 0xA5F4, 0xA1F3),
    };
    PalaceCodes {
        first,
        second,
        gate,
    }
}

/// Step from the first palace cell to the second one.
fn palace_step(edge: CardinalDirection) -> IVec2 {
    match edge {
        CardinalDirection::North | CardinalDirection::South => IVec2::new(0, -1),
        CardinalDirection::East | CardinalDirection::West => IVec2::new(-1, 0),
    }
}

/// What a palace revision rewrote. Positions are (row, column) in MAP1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PalaceRevision {
    pub edge: CardinalDirection,
    pub palace: [IVec2; 2],
    pub gates: Option<[IVec2; 2]>,
}

/// MAP1 viewed as rows (x) by columns (z), without the decoder's reversal.
struct Map1View<'a> {
    codes: &'a mut [u16],
    rows: i32,
    columns: i32,
}

impl Map1View<'_> {
    fn contains(&self, pos: IVec2) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.rows && pos.y < self.columns
    }

    fn index(&self, pos: IVec2) -> usize {
        (pos.y + pos.x * self.columns) as usize
    }

    fn nibble(&self, pos: IVec2) -> u16 {
        (self.codes[self.index(pos)] & 0xF000) >> 12
    }

    fn set(&mut self, pos: IVec2, code: u16) {
        if self.contains(pos) {
            let index = self.index(pos);
            self.codes[index] = code;
        }
    }

    fn is_palace(&self, pos: IVec2) -> bool {
        self.nibble(pos) == 0x9
    }

    fn is_gate(&self, pos: IVec2) -> bool {
        self.nibble(pos) == 0xA
    }

    /// First palace facade cell on the perimeter, corners excluded.
    fn find_palace(&self) -> Option<(CardinalDirection, IVec2)> {
        for z in 1..self.columns - 1 {
            let north = IVec2::new(0, z);
            if self.is_palace(north) {
                return Some((CardinalDirection::North, north));
            }
            let south = IVec2::new(self.rows - 1, z);
            if self.is_palace(south) {
                return Some((CardinalDirection::South, south));
            }
        }

        for x in 1..self.rows - 1 {
            let east = IVec2::new(x, 0);
            if self.is_palace(east) {
                return Some((CardinalDirection::East, east));
            }
            let west = IVec2::new(x, self.columns - 1);
            if self.is_palace(west) {
                return Some((CardinalDirection::West, west));
            }
        }

        None
    }

    fn gate_distance(&self, start: IVec2, dir: IVec2) -> Option<i32> {
        let mut pos = start;
        for i in 0..MAX_GATE_DIST {
            if !self.contains(pos) {
                return None;
            }
            if self.is_gate(pos) {
                return Some(i);
            }
            pos += dir;
        }
        None
    }
}

/// Rewrite the palace facade and gate codes of a city's MAP1 so they face
/// into the city from whichever edge the palace sits on. Logs a warning
/// and leaves the layer untouched if no palace cell is on the perimeter.
pub fn revise_palace_graphics(layers: &mut LayerSet) -> Option<PalaceRevision> {
    let rows = layers.grid_width() as i32;
    let columns = layers.grid_depth() as i32;
    let mut view = Map1View {
        codes: &mut layers.map1,
        rows,
        columns,
    };

    let Some((edge, first)) = view.find_palace() else {
        log::warn!("No palace graphics found to revise");
        return None;
    };

    let codes = palace_codes(edge);
    let step = palace_step(edge);
    let inward = edge.opposite().offset();
    let second = first + step;

    view.set(first, codes.first);
    view.set(second, codes.second);

    let gates = view.gate_distance(first, inward).map(|dist| {
        let first_gate = first + inward * dist;
        let second_gate = first_gate + step;
        view.set(first_gate, codes.gate);
        view.set(second_gate, codes.gate);
        [first_gate, second_gate]
    });

    if gates.is_none() {
        log::debug!("Palace on {} edge has no gate within reach", edge.name());
    }

    Some(PalaceRevision {
        edge,
        palace: [first, second],
        gates,
    })
}
