use crate::utils::error::{Result, WorldError};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Per-voxel block identifier. Indexes into the [`BlockCatalog`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub u8);

impl BlockId {
    pub const AIR: BlockId = BlockId(0);
    pub const BEDROCK: BlockId = BlockId(1);
    pub const STONE: BlockId = BlockId(2);
    pub const GRASS: BlockId = BlockId(3);
    pub const DIRT: BlockId = BlockId(4);
    pub const SAND: BlockId = BlockId(5);
    pub const COAL_ORE: BlockId = BlockId(6);

    /// Ids the terrain generator emits on its own, independent of any lode.
    pub const RESERVED: [BlockId; 5] = [
        Self::AIR,
        Self::BEDROCK,
        Self::STONE,
        Self::GRASS,
        Self::DIRT,
    ];

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Display for BlockId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for BlockId {
    fn from(id: u8) -> Self {
        Self(id)
    }
}

// Back, Front, Top, Bottom, Left, Right
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BlockFace {
    Back = 0,
    Front = 1,
    Top = 2,
    Bottom = 3,
    Left = 4,
    Right = 5,
}

impl BlockFace {
    pub const ALL: [BlockFace; 6] = [
        Self::Back,
        Self::Front,
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
    ];

    pub fn index(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for BlockFace {
    type Error = WorldError;

    fn try_from(index: u8) -> Result<Self> {
        Self::ALL
            .get(index as usize)
            .copied()
            .ok_or(WorldError::InvalidFace(index))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceTextures {
    pub back: u32,
    pub front: u32,
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl FaceTextures {
    pub const fn uniform(texture: u32) -> Self {
        Self {
            back: texture,
            front: texture,
            top: texture,
            bottom: texture,
            left: texture,
            right: texture,
        }
    }

    pub const fn sided(top: u32, sides: u32, bottom: u32) -> Self {
        Self {
            back: sides,
            front: sides,
            top,
            bottom,
            left: sides,
            right: sides,
        }
    }
}

/// Catalog entry shared by every voxel holding the same [`BlockId`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockType {
    pub id: BlockId,
    pub name: String,
    pub is_solid: bool,
    #[serde(default)]
    pub textures: FaceTextures,
}

impl BlockType {
    pub fn new(id: BlockId, name: &str, is_solid: bool, textures: FaceTextures) -> Self {
        Self {
            id,
            name: name.into(),
            is_solid,
            textures,
        }
    }

    pub fn texture_id(&self, face: BlockFace) -> u32 {
        match face {
            BlockFace::Back => self.textures.back,
            BlockFace::Front => self.textures.front,
            BlockFace::Top => self.textures.top,
            BlockFace::Bottom => self.textures.bottom,
            BlockFace::Left => self.textures.left,
            BlockFace::Right => self.textures.right,
        }
    }
}

pub fn default_block_types() -> Vec<BlockType> {
    vec![
        BlockType::new(BlockId::AIR, "air", false, FaceTextures::default()),
        BlockType::new(BlockId::BEDROCK, "bedrock", true, FaceTextures::uniform(9)),
        BlockType::new(BlockId::STONE, "stone", true, FaceTextures::uniform(0)),
        BlockType::new(BlockId::GRASS, "grass", true, FaceTextures::sided(7, 2, 1)),
        BlockType::new(BlockId::DIRT, "dirt", true, FaceTextures::uniform(1)),
        BlockType::new(BlockId::SAND, "sand", true, FaceTextures::uniform(10)),
        BlockType::new(BlockId::COAL_ORE, "coal_ore", true, FaceTextures::uniform(11)),
    ]
}

/// Read-only table of block types, indexed directly by [`BlockId`].
#[derive(Debug, Clone, PartialEq)]
pub struct BlockCatalog {
    entries: Vec<Option<BlockType>>,
}

impl BlockCatalog {
    pub fn new(types: Vec<BlockType>) -> Result<Self> {
        let mut catalog = Self::empty();
        for block in types {
            if let Some(existing) = catalog.insert(block) {
                let added = catalog.get(existing.id).map_or("", |block| block.name.as_str());
                return Err(WorldError::InvalidConfig(format!(
                    "block id {} used by both '{}' and '{}'",
                    existing.id, existing.name, added
                )));
            }
        }

        for id in BlockId::RESERVED {
            if !catalog.contains(id) {
                return Err(WorldError::UnknownBlock(id));
            }
        }
        Ok(catalog)
    }

    fn empty() -> Self {
        Self {
            entries: vec![None; u8::MAX as usize + 1],
        }
    }

    /// Slots `block` by id and hands back whatever held that id before.
    fn insert(&mut self, block: BlockType) -> Option<BlockType> {
        let index = block.id.index();
        self.entries[index].replace(block)
    }

    pub fn get(&self, id: BlockId) -> Option<&BlockType> {
        self.entries[id.index()].as_ref()
    }

    pub fn contains(&self, id: BlockId) -> bool {
        self.get(id).is_some()
    }

    /// Unknown ids count as open air.
    pub fn is_solid(&self, id: BlockId) -> bool {
        self.get(id).map_or(false, |block| block.is_solid)
    }

    pub fn texture_id(&self, id: BlockId, face: BlockFace) -> Result<u32> {
        self.get(id)
            .map(|block| block.texture_id(face))
            .ok_or(WorldError::UnknownBlock(id))
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlockType> {
        self.entries.iter().flatten()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BlockCatalog {
    /// The built-in table from [`default_block_types`], which always passes
    /// the checks in [`BlockCatalog::new`].
    fn default() -> Self {
        let mut catalog = Self::empty();
        for block in default_block_types() {
            let displaced = catalog.insert(block);
            debug_assert!(displaced.is_none(), "duplicate built-in block id");
        }
        catalog
    }
}
