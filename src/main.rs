use anyhow::{Context, Result};
use glam::Vec3;
use log::{info, warn};
use simple_logger::SimpleLogger;
use std::path::PathBuf;

use terrastream::{config::EngineConfig, world::World};

/// Chunks walked along each leg of the demo route.
const WALK_CHUNKS: i32 = 4;

struct Args {
    config_path: Option<PathBuf>,
    random_seed: bool,
}

impl Args {
    fn parse() -> Result<Self> {
        let mut args = Args {
            config_path: None,
            random_seed: false,
        };
        for arg in std::env::args().skip(1) {
            match arg.as_str() {
                "--random-seed" => args.random_seed = true,
                flag if flag.starts_with("--") => anyhow::bail!("unknown flag: {}", flag),
                path => args.config_path = Some(PathBuf::from(path)),
            }
        }
        Ok(args)
    }
}

fn main() -> Result<()> {
    let args = Args::parse()?;

    let mut config = match &args.config_path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if args.random_seed {
        config.world.seed = rand::random();
    }

    SimpleLogger::new()
        .with_level(config.log_level_filter()?)
        .init()?;
    if args.config_path.is_none() {
        info!("No config given, using defaults");
    }

    let mut world = World::from_config(&config).context("Failed to create world")?;
    let spawn = world.start()?;

    let legs = [Vec3::X, Vec3::Z, -Vec3::X, -Vec3::Z];
    let mut observer = spawn;
    let mut rebalances = 0;

    for direction in legs {
        for _ in 0..WALK_CHUNKS * config.world.chunk_width as i32 {
            observer += direction;
            if world.tick(observer)?.is_some() {
                rebalances += 1;
            }
        }
        match world.surface_height(observer.x, observer.z) {
            Some(height) => info!(
                "Observer at ({:.1}, {:.1}), ground at y={}",
                observer.x, observer.z, height
            ),
            None => warn!(
                "Observer at ({:.1}, {:.1}) is over open air",
                observer.x, observer.z
            ),
        }
    }

    info!(
        "Walked {} chunks in {} rebalances: {} chunks generated, {} active",
        WALK_CHUNKS * legs.len() as i32,
        rebalances,
        world.store().len(),
        world.store().active_count()
    );
    Ok(())
}
