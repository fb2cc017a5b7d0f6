use crate::config::{EngineConfig, WorldConfig};
use crate::utils::error::Result;
use crate::world::biome::BiomeAttributes;
use crate::world::block::{BlockCatalog, BlockId};
use crate::world::chunk_coord::ChunkCoord;
use crate::world::generator::TerrainGenerator;
use crate::world::storage::ChunkStore;
use crate::world::streaming::{StreamStats, StreamingController};
use glam::Vec3;
use log::info;

/// Owns the chunk store and everything needed to fill it, and drives
/// streaming from the observer position fed in once per tick.
pub struct World {
    config: WorldConfig,
    catalog: BlockCatalog,
    generator: TerrainGenerator,
    store: ChunkStore,
    streaming: StreamingController,
}

impl World {
    pub fn new(config: WorldConfig, biome: BiomeAttributes, catalog: BlockCatalog) -> Result<Self> {
        config.validate()?;
        biome.validate(&catalog)?;
        info!(
            "Creating world: seed {}, {}x{} chunks of {}x{}x{}, view distance {}, biome '{}'",
            config.seed,
            config.world_size_in_chunks,
            config.world_size_in_chunks,
            config.chunk_width,
            config.chunk_height,
            config.chunk_width,
            config.view_distance_in_chunks,
            biome.name
        );

        Ok(Self {
            generator: TerrainGenerator::new(config, biome),
            store: ChunkStore::new(config)?,
            streaming: StreamingController::new(config.view_distance_in_chunks),
            config,
            catalog,
        })
    }

    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        let catalog = config.validate()?;
        Self::new(config.world, config.biome.clone(), catalog)
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn catalog(&self) -> &BlockCatalog {
        &self.catalog
    }

    pub fn generator(&self) -> &TerrainGenerator {
        &self.generator
    }

    pub fn store(&self) -> &ChunkStore {
        &self.store
    }

    pub fn spawn_position(&self) -> Vec3 {
        self.config.spawn_position()
    }

    /// Generates the window around the spawn point and returns the position
    /// the observer should start at.
    pub fn start(&mut self) -> Result<Vec3> {
        let spawn = self.spawn_position();
        self.tick(spawn)?;
        info!(
            "World ready: {} chunks active around spawn {}",
            self.store.active_count(),
            spawn
        );
        Ok(spawn)
    }

    pub fn tick(&mut self, observer: Vec3) -> Result<Option<StreamStats>> {
        self.streaming
            .update(observer, &mut self.store, &self.generator)
    }

    pub fn observer_chunk(&self) -> Option<ChunkCoord> {
        self.streaming.last_coord()
    }

    pub fn point_is_solid(&self, position: Vec3) -> bool {
        self.store.point_is_solid(position, &self.catalog)
    }

    pub fn voxel_at(&self, position: Vec3) -> Option<BlockId> {
        self.store.voxel_at(position)
    }

    /// Highest solid voxel in the column containing `(x, z)`, if that column's
    /// chunk has been generated.
    pub fn surface_height(&self, x: f32, z: f32) -> Option<i32> {
        (0..self.config.chunk_height as i32)
            .rev()
            .find(|&y| self.point_is_solid(Vec3::new(x, y as f32, z)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::biome::Lode;
    use std::collections::BTreeSet;

    fn config() -> WorldConfig {
        WorldConfig {
            seed: 31337,
            chunk_width: 16,
            chunk_height: 32,
            world_size_in_chunks: 10,
            view_distance_in_chunks: 2,
        }
    }

    fn biome() -> BiomeAttributes {
        BiomeAttributes {
            name: "Test".into(),
            terrain_height: 8.0,
            terrain_scale: 20.0,
            solid_ground_height: 12.0,
            lodes: vec![Lode {
                name: "Sand".into(),
                block_id: BlockId::SAND,
                min_height: 2,
                max_height: 8,
                scale: 4.0,
                threshold: 0.6,
                noise_offset: 500.0,
            }],
        }
    }

    fn world() -> World {
        World::new(config(), biome(), BlockCatalog::default()).unwrap()
    }

    fn coords(xs: std::ops::Range<i32>, zs: std::ops::Range<i32>) -> BTreeSet<ChunkCoord> {
        xs.flat_map(|x| zs.clone().map(move |z| ChunkCoord::new(x, z)))
            .collect()
    }

    #[test]
    fn test_start_generates_centre_window() {
        let mut world = world();
        let spawn = world.start().unwrap();

        assert_eq!(spawn, Vec3::new(80.0, 34.0, 80.0));
        assert_eq!(world.observer_chunk(), Some(ChunkCoord::new(5, 5)));
        let active: BTreeSet<_> = world.store().active_chunks().collect();
        assert_eq!(active, coords(3..7, 3..7));
        assert_eq!(world.store().len(), 16);
    }

    #[test]
    fn test_step_east_shifts_one_column() {
        let mut world = world();
        world.start().unwrap();

        let stats = world
            .tick(Vec3::new(96.5, 20.0, 80.0))
            .unwrap()
            .unwrap();
        assert_eq!(stats.created, 4);
        assert_eq!(stats.activated, 0);
        assert_eq!(stats.deactivated, 4);

        let active: BTreeSet<_> = world.store().active_chunks().collect();
        assert_eq!(active, coords(4..8, 3..7));
        assert_eq!(active.len(), 16);
        for z in 3..7 {
            assert!(world.store().is_active(ChunkCoord::new(7, z)));
            assert!(!world.store().is_active(ChunkCoord::new(3, z)));
            assert!(world.store().contains(ChunkCoord::new(3, z)));
        }
    }

    #[test]
    fn test_tick_within_chunk_does_nothing() {
        let mut world = world();
        world.start().unwrap();
        assert_eq!(world.tick(Vec3::new(81.0, 10.0, 95.9)).unwrap(), None);
        assert_eq!(world.store().active_count(), 16);
    }

    #[test]
    fn test_point_is_solid_at_world_edges() {
        let mut world = world();
        world.start().unwrap();
        for position in [
            Vec3::new(-0.01, 5.0, 40.0),
            Vec3::new(40.0, 5.0, -20.0),
            Vec3::new(160.0, 5.0, 40.0),
            Vec3::new(40.0, 5.0, 1000.0),
            Vec3::new(80.0, -3.0, 80.0),
            Vec3::new(80.0, 32.0, 80.0),
        ] {
            assert!(!world.point_is_solid(position), "{position}");
        }
    }

    #[test]
    fn test_collision_follows_terrain() {
        let mut world = world();
        world.start().unwrap();

        let (x, z) = (72.5, 88.5);
        let height = world.generator().terrain_height(72.0, 88.0);
        for y in 0..32 {
            let position = Vec3::new(x, y as f32 + 0.5, z);
            assert_eq!(
                world.voxel_at(position),
                Some(world.generator().generate_voxel(position))
            );
        }
        assert_eq!(world.surface_height(x, z), Some(height));
        assert!(world.point_is_solid(Vec3::new(x, height as f32 + 0.9, z)));
        assert!(!world.point_is_solid(Vec3::new(x, height as f32 + 1.0, z)));
        assert_eq!(
            world.voxel_at(Vec3::new(x, height as f32, z)),
            Some(BlockId::GRASS)
        );
        assert_eq!(world.voxel_at(Vec3::new(x, 0.0, z)), Some(BlockId::BEDROCK));
    }

    #[test]
    fn test_surface_layers_in_generated_chunk() {
        let mut world = world();
        world.start().unwrap();

        let (x, z) = (70.0, 75.0);
        let height = world.generator().terrain_height(x, z);
        let at = |y: i32| world.voxel_at(Vec3::new(x, y as f32, z));
        assert_eq!(at(height), Some(BlockId::GRASS));
        assert_eq!(at(height - 1), Some(BlockId::DIRT));
        let deep = at(height - 4);
        assert!(matches!(deep, Some(BlockId::STONE) | Some(BlockId::SAND)));
    }

    #[test]
    fn test_same_seed_same_world() {
        let mut a = world();
        let mut b = world();
        a.start().unwrap();
        b.start().unwrap();
        for coord in a.store().active_chunks() {
            assert_eq!(
                a.store().chunk(coord).unwrap().voxels(),
                b.store().chunk(coord).unwrap().voxels()
            );
        }
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let mut invalid = EngineConfig::default();
        invalid.world.world_size_in_chunks = 0;
        assert!(World::from_config(&invalid).is_err());

        let valid = EngineConfig {
            world: config(),
            ..Default::default()
        };
        assert!(World::from_config(&valid).is_ok());
    }
}
