use crate::config::WorldConfig;
use crate::world::block::BlockId;
use crate::world::chunk_coord::ChunkCoord;
use crate::world::generator::TerrainGenerator;
use glam::{IVec3, Vec3};
use rayon::prelude::*;

/// A full-height column of voxels. Content is written once, during
/// [`Chunk::generate`], and is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    coord: ChunkCoord,
    width: u32,
    height: u32,
    voxels: Vec<BlockId>,
    pub(crate) is_active: bool,
}

impl Chunk {
    /// Fills every voxel from the generator. Horizontal layers are generated
    /// in parallel; the chunk is only returned once all of them are done.
    ///
    /// `config` must have passed [`WorldConfig::validate`]; a zero chunk width
    /// panics. [`ChunkStore`](crate::world::ChunkStore) guarantees this.
    pub fn generate(coord: ChunkCoord, config: &WorldConfig, generator: &TerrainGenerator) -> Self {
        let width = config.chunk_width;
        let height = config.chunk_height;
        let layer_size = width as usize * width as usize;
        let origin = coord.origin(width);

        let mut voxels = vec![BlockId::AIR; config.chunk_volume()];
        voxels
            .par_chunks_mut(layer_size)
            .enumerate()
            .for_each(|(y, layer)| {
                for z in 0..width {
                    for x in 0..width {
                        let position = Vec3::new(
                            (origin.x + x as i32) as f32,
                            y as f32,
                            (origin.y + z as i32) as f32,
                        );
                        layer[(x + z * width) as usize] = generator.generate_voxel(position);
                    }
                }
            });

        Self {
            coord,
            width,
            height,
            voxels,
            is_active: false,
        }
    }

    pub fn coord(&self) -> ChunkCoord {
        self.coord
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Layer-major voxel array: index `x + z * width + y * width * width`.
    pub fn voxels(&self) -> &[BlockId] {
        &self.voxels
    }

    pub fn voxel(&self, local: IVec3) -> Option<BlockId> {
        self.index(local).map(|index| self.voxels[index])
    }

    fn index(&self, local: IVec3) -> Option<usize> {
        let (width, height) = (self.width as i32, self.height as i32);
        if local.x < 0
            || local.x >= width
            || local.y < 0
            || local.y >= height
            || local.z < 0
            || local.z >= width
        {
            return None;
        }
        let (x, y, z, width) = (
            local.x as usize,
            local.y as usize,
            local.z as usize,
            width as usize,
        );
        Some(x + z * width + y * width * width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::biome::BiomeAttributes;

    fn config() -> WorldConfig {
        WorldConfig {
            seed: 11,
            chunk_width: 8,
            chunk_height: 32,
            world_size_in_chunks: 4,
            view_distance_in_chunks: 1,
        }
    }

    fn generator(config: &WorldConfig) -> TerrainGenerator {
        let biome = BiomeAttributes {
            terrain_height: 8.0,
            terrain_scale: 10.0,
            solid_ground_height: 12.0,
            ..Default::default()
        };
        TerrainGenerator::new(*config, biome)
    }

    #[test]
    fn test_generate_matches_generator_per_voxel() {
        let config = config();
        let generator = generator(&config);
        let coord = ChunkCoord::new(2, 1);
        let chunk = Chunk::generate(coord, &config, &generator);

        assert_eq!(chunk.voxels().len(), config.chunk_volume());
        assert!(!chunk.is_active());
        for y in 0..32 {
            for z in 0..8 {
                for x in 0..8 {
                    let world = Vec3::new((16 + x) as f32, y as f32, (8 + z) as f32);
                    assert_eq!(
                        chunk.voxel(IVec3::new(x, y, z)),
                        Some(generator.generate_voxel(world))
                    );
                }
            }
        }
    }

    #[test]
    fn test_bottom_layer_is_bedrock() {
        let config = config();
        let chunk = Chunk::generate(ChunkCoord::new(0, 0), &config, &generator(&config));
        for z in 0..8 {
            for x in 0..8 {
                assert_eq!(chunk.voxel(IVec3::new(x, 0, z)), Some(BlockId::BEDROCK));
            }
        }
    }

    #[test]
    fn test_out_of_range_local_is_none() {
        let config = config();
        let chunk = Chunk::generate(ChunkCoord::new(0, 0), &config, &generator(&config));
        assert_eq!(chunk.voxel(IVec3::new(8, 0, 0)), None);
        assert_eq!(chunk.voxel(IVec3::new(0, 32, 0)), None);
        assert_eq!(chunk.voxel(IVec3::new(0, -1, 0)), None);
    }
}
