use bytemuck::{Pod, Zeroable};

/// Per-instance sprite data read by the host renderer.
/// Must match the host protocol: 8 floats = 32 bytes stride.
///
/// Positions are screen coordinates (world minus camera position), Y-down.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct RenderInstance {
    /// Left edge on screen.
    pub x: f32,
    /// Top edge on screen.
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Atlas column.
    pub sprite_col: f32,
    /// Atlas row.
    pub atlas_row: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
    /// 1.0 when mirrored horizontally.
    pub flip: f32,
}

impl RenderInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// All sprite instances for one frame.
#[derive(Debug)]
pub struct RenderBuffer {
    /// Tile instances first, then entity instances after `atlas_split`.
    pub instances: Vec<RenderInstance>,
    /// Instances [0..atlas_split) sample the tile atlas,
    /// instances [atlas_split..] the character atlas.
    pub atlas_split: u32,
}

impl RenderBuffer {
    pub fn new() -> Self {
        Self {
            instances: Vec::with_capacity(512),
            atlas_split: 0,
        }
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.atlas_split = 0;
    }

    pub fn push(&mut self, instance: RenderInstance) {
        self.instances.push(instance);
    }

    /// Mark everything pushed so far as belonging to the first atlas.
    pub fn mark_atlas_split(&mut self) {
        self.atlas_split = self.instances.len() as u32;
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    /// Instances as a flat float slice for host reads.
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.instances)
    }

    /// Raw pointer to instance data for host memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }
}

impl Default for RenderBuffer {
    fn default() -> Self {
        Self::new()
    }
}
