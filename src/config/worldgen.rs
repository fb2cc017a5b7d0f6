use crate::utils::error::{Result, WorldError};
use serde::{Deserialize, Serialize};

/// Fixed world constants. Read once at startup and never changed afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub seed: u32,
    pub chunk_width: u32,
    pub chunk_height: u32,
    pub world_size_in_chunks: u32,
    pub view_distance_in_chunks: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            chunk_width: 16,
            chunk_height: 128,
            world_size_in_chunks: 100,
            view_distance_in_chunks: 5,
        }
    }
}

impl WorldConfig {
    pub fn world_size_in_voxels(&self) -> u32 {
        self.world_size_in_chunks * self.chunk_width
    }

    pub fn chunk_volume(&self) -> usize {
        self.chunk_width as usize * self.chunk_width as usize * self.chunk_height as usize
    }

    pub fn validate(&self) -> Result<()> {
        if self.chunk_width == 0 || self.chunk_height == 0 {
            return Err(WorldError::InvalidConfig(format!(
                "chunk dimensions must be non-zero (width {}, height {})",
                self.chunk_width, self.chunk_height
            )));
        }
        if self.world_size_in_chunks == 0 {
            return Err(WorldError::InvalidConfig(
                "world_size_in_chunks must be non-zero".into(),
            ));
        }
        if self.view_distance_in_chunks == 0 {
            return Err(WorldError::InvalidConfig(
                "view_distance_in_chunks must be non-zero".into(),
            ));
        }
        // Chunk coordinates and voxel positions are carried as i32.
        if self.world_size_in_chunks.checked_mul(self.chunk_width).is_none()
            || self.world_size_in_voxels() > i32::MAX as u32
        {
            return Err(WorldError::InvalidConfig(format!(
                "world of {} chunks x {} voxels is too large",
                self.world_size_in_chunks, self.chunk_width
            )));
        }
        // Voxel indices inside a chunk are also computed in i32.
        let volume = self
            .chunk_width
            .checked_mul(self.chunk_width)
            .and_then(|layer| layer.checked_mul(self.chunk_height));
        if !matches!(volume, Some(volume) if volume <= i32::MAX as u32) {
            return Err(WorldError::InvalidConfig(format!(
                "chunk of {}x{}x{} voxels is too large",
                self.chunk_width, self.chunk_height, self.chunk_width
            )));
        }
        if self.view_distance_in_chunks > i32::MAX as u32 {
            return Err(WorldError::InvalidConfig(format!(
                "view distance of {} chunks is too large",
                self.view_distance_in_chunks
            )));
        }
        Ok(())
    }
}
