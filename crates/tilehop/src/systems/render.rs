use crate::components::entity::Entity;
use crate::components::tilemap::TileMap;
use crate::core::scene::Scene;
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer for one frame.
///
/// Visible tiles go first (tile atlas), then entity sprites in scene order
/// (character atlas). `atlas_split` marks the boundary.
pub fn build_render_buffer(
    tiles: &TileMap,
    scene: &Scene,
    camera: &Camera2D,
    buffer: &mut RenderBuffer,
) {
    buffer.clear();

    for instance in tiles.build_visible_instances(camera) {
        buffer.push(instance);
    }
    buffer.mark_atlas_split();

    for entity in scene.iter() {
        if let Some(instance) = entity_instance(entity, camera) {
            buffer.push(instance);
        }
    }
}

fn entity_instance(entity: &Entity, camera: &Camera2D) -> Option<RenderInstance> {
    if !entity.active {
        return None;
    }
    let body = &entity.body;
    let sprite = body.sprite?;
    let draw_pos = body.draw_pos();
    if !camera.is_rect_visible(draw_pos, body.draw_box) {
        return None;
    }
    let screen = camera.project(draw_pos);
    Some(RenderInstance {
        x: screen.x,
        y: screen.y,
        width: body.draw_box.width,
        height: body.draw_box.height,
        sprite_col: sprite.frame.col,
        atlas_row: sprite.frame.row,
        alpha: sprite.alpha,
        flip: if sprite.flip_x { 1.0 } else { 0.0 },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::sprite::{AtlasId, SpriteComponent, SpriteFrame};
    use crate::components::tilemap::Tile;
    use crate::core::geometry::Size;
    use glam::Vec2;

    fn level() -> TileMap {
        let mut map = TileMap::new(8, 4, Size::new(16.0, 16.0));
        let ground = map
            .define(
                Tile::new("ground")
                    .solid()
                    .with_sprite(SpriteComponent::new(AtlasId(0), SpriteFrame::new(0.0, 0.0))),
            )
            .unwrap();
        map.fill_rect(0, 3, 8, 1, Some(ground));
        map
    }

    fn koopa(id: u32, pos: Vec2) -> Entity {
        Entity::new(EntityId(id))
            .with_pos(pos)
            .with_size(Size::new(14.0, 16.0))
            .with_draw_box(Size::new(16.0, 24.0), Vec2::new(1.0, 8.0))
            .with_sprite(SpriteComponent::new(AtlasId(1), SpriteFrame::new(3.0, 2.0)))
    }

    #[test]
    fn tiles_then_entities_in_draw_space() {
        let map = level();
        let mut scene = Scene::new();
        let mut k = koopa(1, Vec2::new(41.0, 24.0));
        k.body.face(-1.0);
        scene.spawn(k);

        let mut camera = Camera2D::new(Size::new(64.0, 64.0));
        camera.position = Vec2::new(8.0, 0.0);
        let mut buffer = RenderBuffer::new();
        build_render_buffer(&map, &scene, &camera, &mut buffer);

        // 64 wide from x=8 straddles tiles 0..=4 of the floor row
        assert_eq!(buffer.atlas_split, 5);
        assert_eq!(buffer.instance_count(), 6);
        let entity = buffer.instances[5];
        assert_eq!((entity.x, entity.y), (32.0, 16.0));
        assert_eq!((entity.width, entity.height), (16.0, 24.0));
        assert_eq!((entity.sprite_col, entity.atlas_row, entity.flip), (3.0, 2.0, 1.0));
    }

    #[test]
    fn offscreen_and_inactive_entities_are_skipped() {
        let map = level();
        let mut scene = Scene::new();
        scene.spawn(koopa(1, Vec2::new(500.0, 0.0)));
        let mut hidden = koopa(2, Vec2::new(10.0, 10.0));
        hidden.active = false;
        scene.spawn(hidden);
        scene.spawn(Entity::new(EntityId(3)));

        let camera = Camera2D::new(Size::new(64.0, 64.0));
        let mut buffer = RenderBuffer::new();
        build_render_buffer(&map, &scene, &camera, &mut buffer);
        assert_eq!(buffer.instance_count(), buffer.atlas_split);
    }
}
