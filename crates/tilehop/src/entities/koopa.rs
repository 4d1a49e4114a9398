use glam::Vec2;

use crate::api::game::EnemyConfig;
use crate::api::types::EntityId;
use crate::assets::registry::SpriteRegistry;
use crate::behaviors::{Killable, Shell};
use crate::components::animation::AnimationComponent;
use crate::components::entity::Entity;
use crate::core::geometry::Size;
use crate::entities::{sprite_for, EntityFactory};

pub struct KoopaFactory {
    config: EnemyConfig,
    animation: AnimationComponent,
}

impl KoopaFactory {
    pub fn new(config: &EnemyConfig, registry: &SpriteRegistry) -> Self {
        Self {
            config: config.clone(),
            animation: registry.clips("koopa", &["walk", "hiding", "wake", "panic"]),
        }
    }
}

impl EntityFactory for KoopaFactory {
    fn kind(&self) -> &'static str {
        "koopa"
    }

    fn create(&self, id: EntityId, pos: Vec2) -> Entity {
        // Drawn taller than it collides: the head sticks out above the hit box.
        let mut koopa = Entity::new(id)
            .with_tag(self.kind())
            .with_pos(pos)
            .with_size(Size::new(14.0, 16.0))
            .with_draw_box(Size::new(16.0, 24.0), Vec2::new(1.0, 8.0))
            .with_sprite(sprite_for(&self.animation))
            .with_animation(self.animation.clone())
            .with_behavior(Shell::from_config(&self.config))
            .with_behavior(Killable::new(self.config.remove_after));
        koopa.body.harmful = true;
        koopa.body.stompable = true;
        koopa.body.face(-1.0);
        koopa
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tall_draw_box_over_short_hit_box() {
        let factory = KoopaFactory::new(&EnemyConfig::default(), &SpriteRegistry::new());
        let koopa = factory.create(EntityId(5), Vec2::new(32.0, 32.0));
        assert_eq!(koopa.body.size, Size::new(14.0, 16.0));
        assert_eq!(koopa.body.draw_box, Size::new(16.0, 24.0));
        assert_eq!(koopa.body.draw_pos(), Vec2::new(31.0, 24.0));
        assert_eq!(koopa.behavior_names().collect::<Vec<_>>(), ["shell", "killable"]);
    }
}
