use crate::utils::error::Result;
use crate::world::chunk_coord::ChunkCoord;
use crate::world::generator::TerrainGenerator;
use crate::world::storage::ChunkStore;
use glam::Vec3;
use log::info;
use std::collections::BTreeSet;

/// What a single rebalance changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStats {
    pub created: usize,
    pub activated: usize,
    pub deactivated: usize,
}

/// Keeps the active chunk window centred on the observer. Rebalances only when
/// the observer crosses into a different chunk.
#[derive(Debug, Clone)]
pub struct StreamingController {
    view_distance: i32,
    last_coord: Option<ChunkCoord>,
}

impl StreamingController {
    pub fn new(view_distance_in_chunks: u32) -> Self {
        Self {
            view_distance: view_distance_in_chunks as i32,
            last_coord: None,
        }
    }

    pub fn last_coord(&self) -> Option<ChunkCoord> {
        self.last_coord
    }

    pub fn needs_rebalance(&self, current: ChunkCoord) -> bool {
        self.last_coord != Some(current)
    }

    /// Half-open square `[c - d, c + d)` on both axes, x-major. Includes
    /// coordinates outside the world; callers filter. Bounds saturate at the
    /// ends of the `i32` range.
    pub fn window(center: ChunkCoord, view_distance: i32) -> impl Iterator<Item = ChunkCoord> {
        let axis = move |c: i32| c.saturating_sub(view_distance)..c.saturating_add(view_distance);
        axis(center.x).flat_map(move |x| axis(center.z).map(move |z| ChunkCoord::new(x, z)))
    }

    /// Per-tick entry point. Returns `None` when the observer stayed in the
    /// same chunk.
    pub fn update(
        &mut self,
        observer: Vec3,
        store: &mut ChunkStore,
        generator: &TerrainGenerator,
    ) -> Result<Option<StreamStats>> {
        let current = store.config().world_to_chunk_coord(observer);
        if !self.needs_rebalance(current) {
            return Ok(None);
        }

        let stats = self.rebalance(current, store, generator)?;
        self.last_coord = Some(current);
        info!(
            "Observer entered chunk {}: {} created, {} activated, {} deactivated, {} active",
            current,
            stats.created,
            stats.activated,
            stats.deactivated,
            store.active_count()
        );
        Ok(Some(stats))
    }

    fn rebalance(
        &self,
        center: ChunkCoord,
        store: &mut ChunkStore,
        generator: &TerrainGenerator,
    ) -> Result<StreamStats> {
        let mut stats = StreamStats::default();
        let mut stale: BTreeSet<ChunkCoord> = store.active_chunks().collect();

        for coord in Self::window(center, self.view_distance) {
            if !store.config().is_chunk_in_world(coord) {
                continue;
            }
            if store.ensure_chunk(coord, generator)? {
                stats.created += 1;
            } else if store.set_active(coord, true)? {
                stats.activated += 1;
            }
            stale.remove(&coord);
        }

        for coord in stale {
            if store.set_active(coord, false)? {
                stats.deactivated += 1;
            }
        }
        Ok(stats)
    }
}
