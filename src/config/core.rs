use crate::config::worldgen::WorldConfig;
use crate::utils::error::{Result, WorldError};
use crate::world::biome::BiomeAttributes;
use crate::world::block::{default_block_types, BlockCatalog, BlockType};
use log::{info, warn, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Top-level startup configuration, usually read from a TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub log_level: String,
    pub world: WorldConfig,
    pub biome: BiomeAttributes,
    pub blocks: Vec<BlockType>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            world: WorldConfig::default(),
            biome: BiomeAttributes::default(),
            blocks: default_block_types(),
        }
    }
}

impl EngineConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading config from: {}", path.display());
        let source = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        if config.biome.lodes.is_empty() {
            warn!("Biome '{}' has no lodes", config.biome.name);
        }
        Ok(config)
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter> {
        LevelFilter::from_str(&self.log_level)
            .map_err(|_| WorldError::InvalidConfig(format!("unknown log level '{}'", self.log_level)))
    }

    /// Checks every section and builds the block catalog they refer to.
    pub fn validate(&self) -> Result<BlockCatalog> {
        self.log_level_filter()?;
        self.world.validate()?;
        let catalog = BlockCatalog::new(self.blocks.clone())?;
        self.biome.validate(&catalog)?;
        Ok(catalog)
    }
}
