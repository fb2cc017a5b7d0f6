pub mod config;
pub mod utils;
pub mod world;

// Re-export commonly used types
pub use config::core::EngineConfig;
pub use config::worldgen::WorldConfig;
pub use utils::error::{Result, WorldError};
pub use world::biome::{BiomeAttributes, Lode};
pub use world::block::{BlockCatalog, BlockFace, BlockId, BlockType};
pub use world::chunk_coord::ChunkCoord;
pub use world::core::World;
pub use world::generator::terrain::TerrainGenerator;
pub use world::storage::ChunkStore;
pub use world::streaming::{StreamStats, StreamingController};
