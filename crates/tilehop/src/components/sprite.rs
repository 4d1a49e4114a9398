/// Identifies which texture atlas a sprite belongs to.
/// Index into the AssetManifest's atlas list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct AtlasId(pub u32);

/// A single cell in an atlas grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpriteFrame {
    pub col: f32,
    pub row: f32,
}

impl SpriteFrame {
    pub const fn new(col: f32, row: f32) -> Self {
        Self { col, row }
    }
}

/// Which atlas cell an entity or tile is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpriteComponent {
    pub atlas: AtlasId,
    pub frame: SpriteFrame,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// Mirror horizontally (entities facing left).
    pub flip_x: bool,
}

impl SpriteComponent {
    pub fn new(atlas: AtlasId, frame: SpriteFrame) -> Self {
        Self {
            atlas,
            frame,
            ..Default::default()
        }
    }
}

impl Default for SpriteComponent {
    fn default() -> Self {
        Self {
            atlas: AtlasId(0),
            frame: SpriteFrame::default(),
            alpha: 1.0,
            flip_x: false,
        }
    }
}
