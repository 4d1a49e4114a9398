//! Animation system: ticks entity animations and syncs sprite frames.

use crate::core::scene::Scene;

/// Tick all entity animations and copy the current frame into the sprite.
///
/// Call this once per step before rendering.
pub fn tick_animations(scene: &mut Scene, dt: f32) {
    for entity in scene.iter_mut() {
        let body = &mut entity.body;
        let Some(anim) = body.animation.as_mut() else {
            continue;
        };
        anim.tick(dt);
        if let (Some(frame), Some(sprite)) = (anim.current_frame(), body.sprite.as_mut()) {
            sprite.frame = frame;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::animation::{AnimationComponent, AnimationDef};
    use crate::components::entity::Entity;
    use crate::components::sprite::{SpriteComponent, SpriteFrame};

    fn strip(count: usize) -> AnimationDef {
        let frames = (0..count).map(|i| SpriteFrame::new(i as f32, 0.0)).collect();
        AnimationDef::new(frames, 10.0, true)
    }

    #[test]
    fn tick_updates_sprite_frame() {
        let mut scene = Scene::new();
        scene.spawn(
            Entity::new(EntityId(1))
                .with_sprite(SpriteComponent::default())
                .with_animation(AnimationComponent::new().with_clip("run", strip(4))),
        );

        tick_animations(&mut scene, 0.15);

        let sprite = scene.get(EntityId(1)).unwrap().body.sprite.unwrap();
        assert_eq!(sprite.frame, SpriteFrame::new(1.0, 0.0));
    }

    #[test]
    fn entities_without_sprite_are_tolerated() {
        let mut scene = Scene::new();
        scene.spawn(
            Entity::new(EntityId(1))
                .with_animation(AnimationComponent::new().with_clip("run", strip(2))),
        );
        tick_animations(&mut scene, 0.35);
        let anim = scene.get(EntityId(1)).unwrap().body.animation.as_ref().unwrap();
        assert_eq!(anim.current_frame(), Some(SpriteFrame::new(1.0, 0.0)));
    }
}
