use arena_core::{LevelError, VoxelId};

/// Dense width x height x depth array of definition ids.
#[derive(Debug, Clone)]
pub struct VoxelGrid {
    width: usize,
    height: usize,
    depth: usize,
    voxels: Vec<VoxelId>,
}

impl VoxelGrid {
    /// All-air grid.
    pub fn new(width: usize, height: usize, depth: usize) -> Self {
        Self {
            width,
            height,
            depth,
            voxels: vec![0; width * height * depth],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn contains(&self, x: i32, y: i32, z: i32) -> bool {
        x >= 0
            && y >= 0
            && z >= 0
            && (x as usize) < self.width
            && (y as usize) < self.height
            && (z as usize) < self.depth
    }

    fn index(&self, x: i32, y: i32, z: i32) -> Result<usize, LevelError> {
        if !self.contains(x, y, z) {
            return Err(LevelError::OutOfBounds {
                x,
                y,
                z,
                width: self.width,
                height: self.height,
                depth: self.depth,
            });
        }
        let (x, y, z) = (x as usize, y as usize, z as usize);
        Ok(x + y * self.width + z * self.width * self.height)
    }

    pub fn get(&self, x: i32, y: i32, z: i32) -> Result<VoxelId, LevelError> {
        let index = self.index(x, y, z)?;
        Ok(self.voxels[index])
    }

    pub fn set(&mut self, x: i32, y: i32, z: i32, id: VoxelId) -> Result<(), LevelError> {
        let index = self.index(x, y, z)?;
        self.voxels[index] = id;
        Ok(())
    }

    pub fn voxels(&self) -> &[VoxelId] {
        &self.voxels
    }

    /// Number of cells that are not air.
    pub fn occupied_count(&self) -> usize {
        self.voxels.iter().filter(|&&id| id != 0).count()
    }
}
