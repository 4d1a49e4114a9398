use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Atlases, named sprites and named animations used by a level.
/// Loaded from a JSON file during the asset phase.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetManifest {
    pub atlases: Vec<AtlasDescriptor>,
    /// Named sprite lookup: name → atlas index + cell coordinates.
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDescriptor>,
    /// Named frame sequences built from sprite names.
    #[serde(default)]
    pub animations: HashMap<String, AnimationDescriptor>,
}

/// Describes a single texture atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AtlasDescriptor {
    /// Human-readable name (e.g., "world").
    pub name: String,
    /// Number of columns in the atlas grid.
    pub cols: u32,
    /// Number of rows in the atlas grid.
    pub rows: u32,
    /// Relative path to the image file.
    pub path: String,
}

/// Describes a named sprite within an atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDescriptor {
    /// Index into the atlases array.
    pub atlas: u32,
    pub col: u32,
    pub row: u32,
}

/// A frame sequence. Frames refer to sprite names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    pub frames: Vec<String>,
    #[serde(default = "default_fps")]
    pub fps: f32,
    #[serde(default = "default_looping")]
    pub looping: bool,
}

fn default_fps() -> f32 {
    8.0
}

fn default_looping() -> bool {
    true
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}
