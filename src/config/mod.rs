pub mod core;
pub mod worldgen;

pub use self::core::EngineConfig;
pub use worldgen::WorldConfig;
