use crate::utils::error::{Result, WorldError};
use crate::world::block::{BlockCatalog, BlockId};
use serde::{Deserialize, Serialize};

/// Ore-vein placement rule. Applies inside `[min_height, max_height)` where
/// the 3D noise exceeds `threshold`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lode {
    pub name: String,
    pub block_id: BlockId,
    pub min_height: i32,
    pub max_height: i32,
    pub scale: f32,
    pub threshold: f32,
    #[serde(default)]
    pub noise_offset: f32,
}

impl Lode {
    pub fn contains_height(&self, y: i32) -> bool {
        y >= self.min_height && y < self.max_height
    }
}

/// Terrain-shape parameters plus an ordered lode list. Later lodes win where
/// bands overlap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BiomeAttributes {
    pub name: String,
    pub terrain_height: f32,
    pub terrain_scale: f32,
    pub solid_ground_height: f32,
    pub lodes: Vec<Lode>,
}

impl Default for BiomeAttributes {
    fn default() -> Self {
        Self {
            name: "Default".into(),
            terrain_height: 42.0,
            terrain_scale: 25.0,
            solid_ground_height: 42.0,
            lodes: vec![
                Lode {
                    name: "Dirt".into(),
                    block_id: BlockId::DIRT,
                    min_height: 1,
                    max_height: 255,
                    scale: 10.0,
                    threshold: 0.65,
                    noise_offset: 0.0,
                },
                Lode {
                    name: "Sand".into(),
                    block_id: BlockId::SAND,
                    min_height: 30,
                    max_height: 60,
                    scale: 5.0,
                    threshold: 0.7,
                    noise_offset: 500.0,
                },
                Lode {
                    name: "Coal".into(),
                    block_id: BlockId::COAL_ORE,
                    min_height: 2,
                    max_height: 40,
                    scale: 3.0,
                    threshold: 0.72,
                    noise_offset: 300.0,
                },
                Lode {
                    name: "Caves".into(),
                    block_id: BlockId::AIR,
                    min_height: 5,
                    max_height: 60,
                    scale: 20.0,
                    threshold: 0.7,
                    noise_offset: 2000.0,
                },
            ],
        }
    }
}

impl BiomeAttributes {
    pub fn validate(&self, catalog: &BlockCatalog) -> Result<()> {
        if !(self.terrain_scale > 0.0) {
            return Err(WorldError::InvalidConfig(format!(
                "biome '{}': terrain_scale must be positive, got {}",
                self.name, self.terrain_scale
            )));
        }
        for lode in &self.lodes {
            if !(lode.scale > 0.0) {
                return Err(WorldError::InvalidConfig(format!(
                    "lode '{}': scale must be positive, got {}",
                    lode.name, lode.scale
                )));
            }
            if lode.min_height > lode.max_height {
                return Err(WorldError::InvalidConfig(format!(
                    "lode '{}': min_height {} above max_height {}",
                    lode.name, lode.min_height, lode.max_height
                )));
            }
            if !catalog.contains(lode.block_id) {
                return Err(WorldError::UnknownBlock(lode.block_id));
            }
        }
        Ok(())
    }
}
