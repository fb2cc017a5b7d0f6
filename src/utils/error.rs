use crate::world::block::BlockId;
use crate::world::chunk_coord::ChunkCoord;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Chunk {0} is outside the world")]
    ChunkOutOfWorld(ChunkCoord),

    #[error("Chunk {0} has not been generated")]
    ChunkMissing(ChunkCoord),

    #[error("Invalid face index: {0} (expected 0..=5)")]
    InvalidFace(u8),

    #[error("Unknown block id: {0}")]
    UnknownBlock(BlockId),
}

pub type Result<T> = std::result::Result<T, WorldError>;
