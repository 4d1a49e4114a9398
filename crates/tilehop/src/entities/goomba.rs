use glam::Vec2;

use crate::api::game::EnemyConfig;
use crate::api::types::EntityId;
use crate::assets::registry::SpriteRegistry;
use crate::behaviors::{Killable, Stompable, Walking};
use crate::components::animation::AnimationComponent;
use crate::components::entity::Entity;
use crate::core::geometry::Size;
use crate::entities::{sprite_for, EntityFactory};

pub struct GoombaFactory {
    config: EnemyConfig,
    animation: AnimationComponent,
}

impl GoombaFactory {
    pub fn new(config: &EnemyConfig, registry: &SpriteRegistry) -> Self {
        Self {
            config: config.clone(),
            animation: registry.clips("goomba", &["walk", "flat"]),
        }
    }
}

impl EntityFactory for GoombaFactory {
    fn kind(&self) -> &'static str {
        "goomba"
    }

    fn create(&self, id: EntityId, pos: Vec2) -> Entity {
        let mut goomba = Entity::new(id)
            .with_tag(self.kind())
            .with_pos(pos)
            .with_size(Size::new(14.0, 16.0))
            .with_draw_box(Size::new(16.0, 16.0), Vec2::new(1.0, 0.0))
            .with_sprite(sprite_for(&self.animation))
            .with_animation(self.animation.clone())
            .with_behavior(Stompable)
            .with_behavior(Walking::new(self.config.goomba_speed))
            .with_behavior(Killable::new(self.config.remove_after));
        goomba.body.harmful = true;
        goomba.body.stompable = true;
        goomba.body.face(-1.0);
        goomba
    }
}
