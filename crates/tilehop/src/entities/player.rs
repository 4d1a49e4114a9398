use glam::Vec2;

use crate::api::game::PlayerConfig;
use crate::api::types::EntityId;
use crate::assets::registry::SpriteRegistry;
use crate::behaviors::{Go, Jump, Killable, Stomper, Turbo};
use crate::components::animation::AnimationComponent;
use crate::components::entity::{Entity, Team};
use crate::core::geometry::Size;
use crate::entities::{sprite_for, EntityFactory};

pub struct PlayerFactory {
    config: PlayerConfig,
    animation: AnimationComponent,
}

impl PlayerFactory {
    pub fn new(config: &PlayerConfig, registry: &SpriteRegistry) -> Self {
        Self {
            config: config.clone(),
            animation: registry.clips("mario", &["idle", "run", "jump", "dead"]),
        }
    }
}

impl EntityFactory for PlayerFactory {
    fn kind(&self) -> &'static str {
        "player"
    }

    fn create(&self, id: EntityId, pos: Vec2) -> Entity {
        let c = &self.config;
        let mut player = Entity::new(id)
            .with_tag(self.kind())
            .with_pos(pos)
            .with_size(Size::new(14.0, 16.0))
            .with_draw_box(Size::new(16.0, 16.0), Vec2::new(1.0, 0.0))
            .with_sprite(sprite_for(&self.animation))
            .with_animation(self.animation.clone())
            // Turbo sets the speed profile Go accelerates with.
            .with_behavior(Turbo::from_config(c))
            .with_behavior(Go::new(c.deceleration))
            .with_behavior(Jump::new(c.jump_velocity, c.jump_duration))
            .with_behavior(Stomper::new(c.bounce_velocity))
            .with_behavior(Killable::new(c.remove_after));
        player.body.team = Team::Player;
        player
    }
}
