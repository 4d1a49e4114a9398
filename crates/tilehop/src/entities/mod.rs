//! Factories that assemble entities of each kind from configuration and
//! named sprites.

pub mod goomba;
pub mod koopa;
pub mod player;

use std::collections::HashMap;

use glam::Vec2;

use crate::api::game::GameConfig;
use crate::api::types::EntityId;
use crate::assets::registry::SpriteRegistry;
use crate::components::animation::AnimationComponent;
use crate::components::entity::Entity;
use crate::components::sprite::{AtlasId, SpriteComponent};

pub use goomba::GoombaFactory;
pub use koopa::KoopaFactory;
pub use player::PlayerFactory;

/// Atlas holding character sprites. Tiles use atlas 0.
pub const CHARACTER_ATLAS: AtlasId = AtlasId(1);

/// Builds entities of one kind.
pub trait EntityFactory {
    /// Kind name used by level spawns, e.g. "goomba".
    fn kind(&self) -> &'static str;

    /// New entity whose hit box top-left is at `pos`.
    fn create(&self, id: EntityId, pos: Vec2) -> Entity;
}

/// Sprite showing the first frame of the starting clip.
pub(crate) fn sprite_for(animation: &AnimationComponent) -> SpriteComponent {
    SpriteComponent::new(CHARACTER_ATLAS, animation.current_frame().unwrap_or_default())
}

/// Factories by kind name.
#[derive(Default)]
pub struct Factories {
    by_kind: HashMap<&'static str, Box<dyn EntityFactory>>,
}

impl Factories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Player, goomba and koopa.
    pub fn standard(config: &GameConfig, registry: &SpriteRegistry) -> Self {
        let mut factories = Self::new();
        factories.register(PlayerFactory::new(&config.player, registry));
        factories.register(GoombaFactory::new(&config.enemies, registry));
        factories.register(KoopaFactory::new(&config.enemies, registry));
        factories
    }

    pub fn register(&mut self, factory: impl EntityFactory + 'static) {
        self.by_kind.insert(factory.kind(), Box::new(factory));
    }

    pub fn has(&self, kind: &str) -> bool {
        self.by_kind.contains_key(kind)
    }

    /// Create an entity of `kind`, or `None` (logged) for unknown kinds.
    pub fn create(&self, kind: &str, id: EntityId, pos: Vec2) -> Option<Entity> {
        match self.by_kind.get(kind) {
            Some(factory) => Some(factory.create(id, pos)),
            None => {
                log::warn!("no factory for entity kind '{}'", kind);
                None
            }
        }
    }
}

impl std::fmt::Debug for Factories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.by_kind.keys().collect();
        kinds.sort();
        f.debug_struct("Factories").field("kinds", &kinds).finish()
    }
}
