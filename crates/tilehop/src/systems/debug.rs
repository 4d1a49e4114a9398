//! Debug overlay: opt-in hit box, draw box and checked-cell visualization.
//!
//! Built once per frame from the scene and the collider's check log and
//! handed to the host as flat rectangles plus a few text lines.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::components::entity::Entity;
use crate::core::collider::TileCollider;
use crate::core::geometry::Size;
use crate::core::scene::Scene;
use crate::renderer::camera::Camera2D;

/// What an overlay rectangle outlines. Written into `DebugRect::kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum DebugRectKind {
    HitBox = 0,
    DrawBox = 1,
    CheckMiss = 2,
    CheckHit = 3,
}

/// Screen-space rectangle: x, y, width, height, kind.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct DebugRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub kind: f32,
}

impl DebugRect {
    pub const FLOATS: usize = 5;

    fn new(screen: Vec2, size: Size, kind: DebugRectKind) -> Self {
        Self {
            x: screen.x,
            y: screen.y,
            width: size.width,
            height: size.height,
            kind: kind as u32 as f32,
        }
    }
}

#[derive(Debug, Default)]
pub struct DebugOverlay {
    pub rects: Vec<DebugRect>,
    /// One line per active entity: tag, position, velocity, flags.
    pub lines: Vec<String>,
}

impl DebugOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.rects.clear();
        self.lines.clear();
    }

    /// Rebuild from the current frame.
    pub fn rebuild(&mut self, scene: &Scene, collider: &TileCollider, camera: &Camera2D) {
        self.clear();
        let tile_size = collider.tiles().tile_size();
        for check in collider.checks() {
            let world = collider.tiles().cell_origin(check.col, check.row);
            let kind = if check.hit {
                DebugRectKind::CheckHit
            } else {
                DebugRectKind::CheckMiss
            };
            self.rects.push(DebugRect::new(camera.project(world), tile_size, kind));
        }
        for entity in scene.iter().filter(|e| e.active) {
            let body = &entity.body;
            self.rects.push(DebugRect::new(
                camera.project(body.draw_pos()),
                body.draw_box,
                DebugRectKind::DrawBox,
            ));
            self.rects.push(DebugRect::new(
                camera.project(body.pos),
                body.size,
                DebugRectKind::HitBox,
            ));
            self.lines.push(describe(entity));
        }
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.rects)
    }
}

fn describe(entity: &Entity) -> String {
    let body = &entity.body;
    let flags = body.collisions;
    let mut marks = String::new();
    for (set, mark) in [
        (flags.on_ground, 'G'),
        (flags.blocked_left, 'L'),
        (flags.blocked_right, 'R'),
        (flags.blocked_top, 'T'),
    ] {
        if set {
            marks.push(mark);
        }
    }
    format!(
        "{}#{} pos=({:.1}, {:.1}) vel=({:.1}, {:.1}) [{}]",
        entity.tag, entity.id.0, body.pos.x, body.pos.y, body.vel.x, body.vel.y, marks
    )
}
