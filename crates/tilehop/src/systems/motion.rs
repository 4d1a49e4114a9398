//! Per-entity simulation step.
//!
//! The order here is fixed: behaviors, flag reset, gravity, X move + resolve,
//! Y move + resolve. Horizontal blocking is therefore evaluated against the
//! row the entity occupied before its vertical move.

use glam::Vec2;

use crate::components::entity::{Body, Entity};
use crate::core::collider::TileCollider;
use crate::input::controller::InputState;

/// Advance one entity by `dt` seconds.
pub fn step_entity(
    entity: &mut Entity,
    input: &dyn InputState,
    gravity: Vec2,
    collider: &mut TileCollider,
    dt: f32,
) {
    entity.update(input, dt);
    // Flags describe the resolution about to happen, never an older one.
    entity.body.collisions.clear();
    integrate(&mut entity.body, gravity, collider, dt);
}

/// Apply gravity, then integrate and resolve each axis in turn.
pub fn integrate(body: &mut Body, gravity: Vec2, collider: &mut TileCollider, dt: f32) {
    body.vel.y += gravity.y * dt;

    body.pos.x += body.vel.x * dt;
    collider.resolve_x(body, dt);

    body.pos.y += body.vel.y * dt;
    collider.resolve_y(body, dt);
}
