use glam::Vec2;

use crate::api::types::EntityId;
use crate::components::animation::AnimationComponent;
use crate::components::behavior::Behavior;
use crate::components::sprite::SpriteComponent;
use crate::core::geometry::{Bounds, Size};
use crate::input::controller::InputState;

/// Side of an entity's hit box that met a solid tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
    Top,
    Bottom,
}

/// Collision sides raised by the tile collider during the most recent
/// resolution. Transient: cleared before every integration step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollisionFlags {
    pub on_ground: bool,
    pub blocked_left: bool,
    pub blocked_right: bool,
    pub blocked_top: bool,
}

impl CollisionFlags {
    pub fn raise(&mut self, side: Side) {
        match side {
            Side::Left => self.blocked_left = true,
            Side::Right => self.blocked_right = true,
            Side::Top => self.blocked_top = true,
            Side::Bottom => self.on_ground = true,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Team {
    Player,
    #[default]
    Enemy,
}

/// Life cycle of an entity. `Dead` entities are removed at the end of the frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Life {
    #[default]
    Alive,
    Dying { elapsed: f32 },
    Dead,
}

/// Plain physical and gameplay state of an entity.
///
/// Behaviors read and write this record; the simulation step owns `pos`.
#[derive(Debug, Clone)]
pub struct Body {
    /// Top-left corner of the hit box in world space.
    pub pos: Vec2,
    pub vel: Vec2,
    /// Hit box used for tile and entity collision.
    pub size: Size,
    /// Rendered box; may be larger than the hit box.
    pub draw_box: Size,
    /// Draw position is `pos - offset`.
    pub offset: Vec2,
    pub max_speed: f32,
    pub acceleration: Vec2,
    /// -1 facing left, +1 facing right.
    pub heading: f32,
    /// Takes part in tile collision.
    pub solid: bool,
    pub stompable: bool,
    /// Kills bodies of the other team on touch.
    pub harmful: bool,
    pub team: Team,
    pub life: Life,
    pub collisions: CollisionFlags,
    pub sprite: Option<SpriteComponent>,
    pub animation: Option<AnimationComponent>,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            size: Size::new(16.0, 16.0),
            draw_box: Size::new(16.0, 16.0),
            offset: Vec2::ZERO,
            max_speed: 0.0,
            acceleration: Vec2::ZERO,
            heading: 1.0,
            solid: true,
            stompable: false,
            harmful: false,
            team: Team::Enemy,
            life: Life::Alive,
            collisions: CollisionFlags::default(),
            sprite: None,
            animation: None,
        }
    }
}

impl Body {
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.pos, self.size)
    }

    pub fn draw_pos(&self) -> Vec2 {
        self.pos - self.offset
    }

    pub fn is_alive(&self) -> bool {
        self.life == Life::Alive
    }

    /// Start dying. Has no effect on a body that is already dying or dead.
    pub fn kill(&mut self) {
        if self.is_alive() {
            self.life = Life::Dying { elapsed: 0.0 };
        }
    }

    /// Whether this body is landing on `other` from above: it falls faster
    /// than `other` and its bottom edge is still above `other`'s middle.
    pub fn is_stomping(&self, other: &Body) -> bool {
        self.vel.y > other.vel.y && self.bounds().bottom < other.bounds().center().y
    }

    /// Turn to `heading` (-1 or +1), mirroring the sprite when facing left.
    pub fn face(&mut self, heading: f32) {
        self.heading = heading;
        if let Some(sprite) = self.sprite.as_mut() {
            sprite.flip_x = heading < 0.0;
        }
    }

    pub fn play(&mut self, clip: &str) {
        if let Some(anim) = self.animation.as_mut() {
            anim.play_if_different(clip);
        }
    }
}

/// A simulated entity: a data record plus attached behaviors.
#[derive(Debug)]
pub struct Entity {
    pub id: EntityId,
    /// Kind name used to find entities, e.g. "player".
    pub tag: String,
    /// Inactive entities are skipped by the simulation.
    pub active: bool,
    pub body: Body,
    behaviors: Vec<Box<dyn Behavior>>,
}

impl Entity {
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            tag: String::new(),
            active: true,
            body: Body::default(),
            behaviors: Vec::new(),
        }
    }

    // -- Builder pattern --

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_pos(mut self, pos: Vec2) -> Self {
        self.body.pos = pos;
        self
    }

    pub fn with_vel(mut self, vel: Vec2) -> Self {
        self.body.vel = vel;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.body.size = size;
        self.body.draw_box = size;
        self
    }

    pub fn with_draw_box(mut self, draw_box: Size, offset: Vec2) -> Self {
        self.body.draw_box = draw_box;
        self.body.offset = offset;
        self
    }

    pub fn with_sprite(mut self, sprite: SpriteComponent) -> Self {
        self.body.sprite = Some(sprite);
        self
    }

    pub fn with_animation(mut self, animation: AnimationComponent) -> Self {
        self.body.animation = Some(animation);
        self
    }

    /// Attach a behavior. Behaviors run in attachment order.
    pub fn with_behavior(mut self, behavior: impl Behavior + 'static) -> Self {
        self.behaviors.push(Box::new(behavior));
        self
    }

    pub fn behavior_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.behaviors.iter().map(|b| b.name())
    }

    /// Run every behavior's per-frame logic.
    pub fn update(&mut self, input: &dyn InputState, dt: f32) {
        for behavior in self.behaviors.iter_mut() {
            behavior.update(&mut self.body, input, dt);
        }
    }

    /// This entity was landed on by `stomper`.
    pub fn stomped_by(&mut self, stomper: &Body) {
        for behavior in self.behaviors.iter_mut() {
            behavior.on_stomp(&mut self.body, stomper);
        }
    }

    /// This entity overlaps `other`.
    pub fn touched(&mut self, other: &Body) {
        for behavior in self.behaviors.iter_mut() {
            behavior.on_touch(&mut self.body, other);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_raise_and_clear() {
        let mut flags = CollisionFlags::default();
        assert_eq!(flags, CollisionFlags::default());
        flags.raise(Side::Bottom);
        flags.raise(Side::Left);
        assert!(flags.on_ground && flags.blocked_left);
        assert!(!flags.blocked_right);
        flags.clear();
        assert_eq!(flags, CollisionFlags::default());
    }

    #[test]
    fn kill_only_from_alive() {
        let mut body = Body::default();
        body.kill();
        assert_eq!(body.life, Life::Dying { elapsed: 0.0 });
        body.life = Life::Dead;
        body.kill();
        assert_eq!(body.life, Life::Dead);
    }

    #[test]
    fn stomp_requires_falling_from_above() {
        let target = Body {
            pos: Vec2::new(0.0, 100.0),
            ..Default::default()
        };
        let mut stomper = Body {
            pos: Vec2::new(0.0, 86.0),
            vel: Vec2::new(0.0, 50.0),
            ..Default::default()
        };
        assert!(stomper.is_stomping(&target));

        stomper.vel.y = -50.0;
        assert!(!stomper.is_stomping(&target));

        stomper.vel.y = 50.0;
        stomper.pos.y = 95.0;
        assert!(!stomper.is_stomping(&target));
    }

    #[test]
    fn draw_box_offsets_from_hit_box() {
        let entity = Entity::new(EntityId(1))
            .with_pos(Vec2::new(10.0, 20.0))
            .with_size(Size::new(14.0, 16.0))
            .with_draw_box(Size::new(16.0, 24.0), Vec2::new(1.0, 8.0));
        assert_eq!(entity.body.draw_pos(), Vec2::new(9.0, 12.0));
        assert_eq!(entity.body.size, Size::new(14.0, 16.0));
    }
}
