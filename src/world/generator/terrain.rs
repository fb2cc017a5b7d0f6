use crate::config::WorldConfig;
use crate::world::biome::BiomeAttributes;
use crate::world::block::BlockId;
use crate::world::noise::NoiseField;
use glam::{Vec2, Vec3};

/// Number of subsurface voxels directly below the surface voxel.
const SUBSURFACE_DEPTH: i32 = 3;

/// Pure voxel generator: world position in, block id out. The same seed,
/// biome and position always give the same block, so chunks never need to be
/// persisted.
#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    world: WorldConfig,
    biome: BiomeAttributes,
    noise: NoiseField,
}

impl TerrainGenerator {
    pub fn new(world: WorldConfig, biome: BiomeAttributes) -> Self {
        Self {
            noise: NoiseField::new(world.seed),
            world,
            biome,
        }
    }

    pub fn biome(&self) -> &BiomeAttributes {
        &self.biome
    }

    pub fn noise(&self) -> &NoiseField {
        &self.noise
    }

    /// Surface height of the column at `(x, z)`.
    pub fn terrain_height(&self, x: f32, z: f32) -> i32 {
        let noise = self
            .noise
            .noise_2d(Vec2::new(x, z), 0.0, self.biome.terrain_scale);
        (self.biome.terrain_height * noise + self.biome.solid_ground_height).floor() as i32
    }

    /// Block of the voxel containing `position`. Any point inside a voxel gives
    /// the same answer as its minimum corner.
    pub fn generate_voxel(&self, position: Vec3) -> BlockId {
        let position = position.floor();
        if !self.world.is_voxel_in_world(position) {
            return BlockId::AIR;
        }

        let y = position.y as i32;
        if y == 0 {
            return BlockId::BEDROCK;
        }

        let terrain_height = self.terrain_height(position.x, position.z);
        let block = surface_block(y, terrain_height);
        if block != BlockId::STONE {
            return block;
        }

        self.apply_lodes(position, y, block)
    }

    fn apply_lodes(&self, position: Vec3, y: i32, mut block: BlockId) -> BlockId {
        for lode in &self.biome.lodes {
            if lode.contains_height(y)
                && self
                    .noise
                    .noise_3d(position, lode.noise_offset, lode.scale, lode.threshold)
            {
                block = lode.block_id;
            }
        }
        block
    }
}

fn surface_block(y: i32, terrain_height: i32) -> BlockId {
    if y > terrain_height {
        BlockId::AIR
    } else if y == terrain_height {
        BlockId::GRASS
    } else if y >= terrain_height - SUBSURFACE_DEPTH {
        BlockId::DIRT
    } else {
        BlockId::STONE
    }
}
