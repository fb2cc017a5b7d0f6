use glam::IVec2;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Grid-space address of a chunk. Only the horizontal axes exist; a chunk
/// always spans the full world height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ChunkCoord {
    pub x: i32,
    pub z: i32,
}

impl ChunkCoord {
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// World-space position of the chunk's minimum corner on the horizontal axes.
    pub fn origin(&self, chunk_width: u32) -> IVec2 {
        IVec2::new(self.x, self.z) * chunk_width as i32
    }
}

impl Display for ChunkCoord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl From<IVec2> for ChunkCoord {
    fn from(vec: IVec2) -> Self {
        Self::new(vec.x, vec.y)
    }
}

impl From<ChunkCoord> for IVec2 {
    fn from(coord: ChunkCoord) -> Self {
        IVec2::new(coord.x, coord.z)
    }
}
