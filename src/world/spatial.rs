//! Conversions between world-space positions, chunk grid coordinates and
//! local voxel indices. Everything here is a pure function of [`WorldConfig`].

use crate::config::WorldConfig;
use crate::world::chunk_coord::ChunkCoord;
use glam::{IVec3, Vec3};

/// A world position resolved to the chunk that holds it and the voxel index
/// inside that chunk. `local.x`/`local.z` are always within `[0, chunk_width)`;
/// `local.y` is the floored height and may fall outside the chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoxelAddress {
    pub chunk: ChunkCoord,
    pub local: IVec3,
}

impl WorldConfig {
    pub fn world_to_chunk_coord(&self, position: Vec3) -> ChunkCoord {
        let width = self.chunk_width as i32;
        ChunkCoord::new(
            (position.x.floor() as i32).div_euclid(width),
            (position.z.floor() as i32).div_euclid(width),
        )
    }

    pub fn world_to_local(&self, position: Vec3) -> VoxelAddress {
        let width = self.chunk_width as i32;
        VoxelAddress {
            chunk: self.world_to_chunk_coord(position),
            local: IVec3::new(
                (position.x.floor() as i32).rem_euclid(width),
                position.y.floor() as i32,
                (position.z.floor() as i32).rem_euclid(width),
            ),
        }
    }

    pub fn is_chunk_in_world(&self, coord: ChunkCoord) -> bool {
        let size = self.world_size_in_chunks as i32;
        coord.x >= 0 && coord.x < size && coord.z >= 0 && coord.z < size
    }

    pub fn is_voxel_in_world(&self, position: Vec3) -> bool {
        let horizontal = self.world_size_in_voxels() as f32;
        let vertical = self.chunk_height as f32;
        position.x >= 0.0
            && position.x < horizontal
            && position.y >= 0.0
            && position.y < vertical
            && position.z >= 0.0
            && position.z < horizontal
    }

    /// Horizontal centre of the world, two voxels above the top of the chunks.
    pub fn spawn_position(&self) -> Vec3 {
        let centre = self.world_size_in_voxels() as f32 / 2.0;
        Vec3::new(centre, self.chunk_height as f32 + 2.0, centre)
    }
}
