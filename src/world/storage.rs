use crate::config::WorldConfig;
use crate::utils::error::{Result, WorldError};
use crate::world::block::{BlockCatalog, BlockId};
use crate::world::chunk::Chunk;
use crate::world::chunk_coord::ChunkCoord;
use crate::world::generator::TerrainGenerator;
use glam::Vec3;
use log::debug;
use std::collections::BTreeSet;

/// Fixed grid of chunk slots, flattened row-major on `(x, z)`. Slots start
/// empty and are filled at most once.
///
/// A coordinate is in `active` iff its chunk exists and is flagged active.
pub struct ChunkStore {
    config: WorldConfig,
    slots: Vec<Option<Box<Chunk>>>,
    active: BTreeSet<ChunkCoord>,
}

impl ChunkStore {
    pub fn new(config: WorldConfig) -> Result<Self> {
        config.validate()?;
        let size = config.world_size_in_chunks as usize;
        let mut slots = Vec::with_capacity(size * size);
        slots.resize_with(size * size, || None);
        Ok(Self {
            config,
            slots,
            active: BTreeSet::new(),
        })
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    fn slot_index(&self, coord: ChunkCoord) -> Option<usize> {
        if !self.config.is_chunk_in_world(coord) {
            return None;
        }
        Some(coord.z as usize * self.config.world_size_in_chunks as usize + coord.x as usize)
    }

    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.slot_index(coord)
            .and_then(|index| self.slots[index].as_deref())
    }

    pub fn contains(&self, coord: ChunkCoord) -> bool {
        self.chunk(coord).is_some()
    }

    /// Number of chunks materialised so far.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|slot| slot.is_none())
    }

    pub fn is_active(&self, coord: ChunkCoord) -> bool {
        self.active.contains(&coord)
    }

    pub fn active_chunks(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.active.iter().copied()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Materialises `coord` if it has never been generated and marks it
    /// active. Existing chunks are left untouched. Returns whether a chunk was
    /// created.
    pub fn ensure_chunk(&mut self, coord: ChunkCoord, generator: &TerrainGenerator) -> Result<bool> {
        let index = self
            .slot_index(coord)
            .ok_or(WorldError::ChunkOutOfWorld(coord))?;
        if self.slots[index].is_some() {
            return Ok(false);
        }

        let mut chunk = Chunk::generate(coord, &self.config, generator);
        chunk.is_active = true;
        self.slots[index] = Some(Box::new(chunk));
        self.active.insert(coord);
        debug!("Generated chunk {}", coord);
        Ok(true)
    }

    /// Returns whether the flag changed. Activating a chunk that was never
    /// generated is an error; deactivating one is a no-op.
    pub fn set_active(&mut self, coord: ChunkCoord, active: bool) -> Result<bool> {
        let chunk = match self.slot_index(coord).and_then(|index| self.slots[index].as_mut()) {
            Some(chunk) => chunk,
            None if active => return Err(WorldError::ChunkMissing(coord)),
            None => return Ok(false),
        };

        if chunk.is_active == active {
            return Ok(false);
        }
        chunk.is_active = active;
        if active {
            self.active.insert(coord);
        } else {
            self.active.remove(&coord);
        }
        debug!(
            "Chunk {} {}",
            coord,
            if active { "activated" } else { "deactivated" }
        );
        Ok(true)
    }

    /// Stored block at a world position, if its chunk has been generated.
    pub fn voxel_at(&self, position: Vec3) -> Option<BlockId> {
        let address = self.config.world_to_local(position);
        self.chunk(address.chunk)
            .and_then(|chunk| chunk.voxel(address.local))
    }

    /// Collision query. Anything outside the world, above or below the chunk
    /// columns, or in a chunk that was never generated reads as open air.
    pub fn point_is_solid(&self, position: Vec3, catalog: &BlockCatalog) -> bool {
        self.voxel_at(position)
            .map_or(false, |block| catalog.is_solid(block))
    }
}
