pub mod biome;
pub mod block;
pub mod chunk;
pub mod chunk_coord;
pub mod core;
pub mod generator;
pub mod noise;
pub mod spatial;
pub mod storage;
pub mod streaming;

// Re-export commonly used types
pub use self::core::World;
pub use biome::{BiomeAttributes, Lode};
pub use block::{BlockCatalog, BlockFace, BlockId, BlockType, FaceTextures};
pub use chunk::Chunk;
pub use chunk_coord::ChunkCoord;
pub use generator::TerrainGenerator;
pub use self::noise::NoiseField;
pub use spatial::VoxelAddress;
pub use storage::ChunkStore;
pub use streaming::{StreamStats, StreamingController};
