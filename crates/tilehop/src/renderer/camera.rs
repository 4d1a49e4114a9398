use glam::Vec2;

use crate::core::geometry::Size;

/// Viewport onto the world. Only used to project world coordinates to
/// screen coordinates; it has no say in physics.
///
/// `position` is the world coordinate of the viewport's top-left corner.
#[derive(Debug, Clone)]
pub struct Camera2D {
    pub position: Vec2,
    /// Visible area in world units.
    pub size: Size,
    /// Optional world rectangle (top-left, bottom-right) the viewport must stay in.
    pub bounds: Option<(Vec2, Vec2)>,
}

impl Camera2D {
    pub fn new(size: Size) -> Self {
        Self {
            position: Vec2::ZERO,
            size,
            bounds: None,
        }
    }

    /// World to screen coordinates.
    pub fn project(&self, world: Vec2) -> Vec2 {
        world - self.position
    }

    /// Screen to world coordinates.
    pub fn unproject(&self, screen: Vec2) -> Vec2 {
        screen + self.position
    }

    /// Set world bounds for camera clamping.
    pub fn set_bounds(&mut self, min: Vec2, max: Vec2) {
        self.bounds = Some((min, max));
        self.clamp_to_bounds();
    }

    /// Center the viewport on `target`, respecting bounds. Call once per frame.
    pub fn follow(&mut self, target: Vec2) {
        self.position = target - self.size.as_vec2() / 2.0;
        self.clamp_to_bounds();
    }

    /// Shift the viewport by `delta` world units.
    pub fn pan(&mut self, delta: Vec2) {
        self.position += delta;
        self.clamp_to_bounds();
    }

    fn clamp_to_bounds(&mut self) {
        let Some((min, max)) = self.bounds else {
            return;
        };
        let view = self.size.as_vec2();
        // A viewport wider than the bounds pins to the bounds' top-left.
        let upper = (max - view).max(min);
        self.position = self.position.clamp(min, upper);
    }

    /// Whether a world-space rectangle overlaps the viewport.
    pub fn is_rect_visible(&self, pos: Vec2, size: Size) -> bool {
        let view_max = self.position + self.size.as_vec2();
        let rect_max = pos + size.as_vec2();
        rect_max.x > self.position.x
            && pos.x < view_max.x
            && rect_max.y > self.position.y
            && pos.y < view_max.y
    }
}
