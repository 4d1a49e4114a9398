//! The play scene: one level, its entities and the per-frame update.

use glam::Vec2;

use crate::api::game::GameConfig;
use crate::api::types::{EntityId, GameEvent};
use crate::assets::level::Level;
use crate::assets::loader::LevelAssets;
use crate::assets::registry::SpriteRegistry;
use crate::components::entity::{Entity, Life};
use crate::components::tilemap::TileMap;
use crate::core::collider::TileCollider;
use crate::core::scene::Scene;
use crate::entities::Factories;
use crate::error::EngineError;
use crate::input::controller::Controller;
use crate::input::queue::InputEvent;
use crate::renderer::camera::Camera2D;
use crate::renderer::instance::RenderBuffer;
use crate::systems::animation::tick_animations;
use crate::systems::interaction::resolve_interactions;
use crate::systems::motion::step_entity;
use crate::systems::render::build_render_buffer;

#[cfg(feature = "debug-overlay")]
use crate::systems::debug::DebugOverlay;

/// Pointer travel (screen units) after which a press counts as a drag.
const DRAG_THRESHOLD: f32 = 4.0;

#[derive(Debug, Clone, Copy)]
struct Drag {
    start: Vec2,
    last: Vec2,
    moved: bool,
}

#[derive(Debug)]
pub struct PlayScene {
    config: GameConfig,
    entities: Scene,
    collider: TileCollider,
    camera: Camera2D,
    controller: Controller,
    factories: Factories,
    events: Vec<GameEvent>,
    next_id: u32,
    player: Option<EntityId>,
    drag: Option<Drag>,
    #[cfg(feature = "debug-overlay")]
    overlay: DebugOverlay,
}

impl PlayScene {
    /// Empty scene over `tiles`. The camera is bounded by the map.
    pub fn new(config: GameConfig, tiles: TileMap) -> Self {
        let mut camera = Camera2D::new(config.viewport);
        let (min, max) = tiles.bounds();
        camera.set_bounds(min, max);
        let collider = TileCollider::new(tiles).with_check_recording(config.debug.enabled);
        let controller = Controller::from_config(&config.bindings);
        Self {
            config,
            entities: Scene::new(),
            collider,
            camera,
            controller,
            factories: Factories::new(),
            events: Vec::new(),
            next_id: 1,
            player: None,
            drag: None,
            #[cfg(feature = "debug-overlay")]
            overlay: DebugOverlay::new(),
        }
    }

    pub fn with_factories(mut self, factories: Factories) -> Self {
        self.factories = factories;
        self
    }

    /// Build the level from loaded assets and spawn everything it places.
    pub fn from_assets(config: GameConfig, assets: &LevelAssets) -> Result<Self, EngineError> {
        let registry = SpriteRegistry::from_manifest(&assets.manifest);
        let level = Level::parse(&assets.level_text, &assets.legend, config.tiles, &registry)?;
        let factories = Factories::standard(&config, &registry);
        let mut scene = Self::new(config, level.tiles).with_factories(factories);
        for spawn in &level.spawns {
            scene.spawn_in_cell(&spawn.kind, spawn.pos);
        }
        log::info!("play scene ready with {} entities", scene.entities.len());
        Ok(scene)
    }

    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an entity at the end of the update order. An entity tagged
    /// "player" becomes the one the camera follows unless a player is
    /// already in the scene.
    pub fn spawn(&mut self, entity: Entity) -> EntityId {
        let id = entity.id;
        if self.player().is_none() && entity.tag == "player" {
            self.player = Some(id);
        }
        log::debug!("spawn {}#{} at {:?}", entity.tag, id.0, entity.body.pos);
        self.events
            .push(GameEvent::spawned(id, entity.body.pos.x, entity.body.pos.y));
        self.entities.spawn(entity);
        id
    }

    /// Create an entity of `kind` with its hit box at `pos`.
    pub fn spawn_kind(&mut self, kind: &str, pos: Vec2) -> Option<EntityId> {
        let id = self.next_id();
        let entity = self.factories.create(kind, id, pos)?;
        Some(self.spawn(entity))
    }

    /// Spawn standing on the bottom of the cell whose top-left is `cell`,
    /// centered horizontally.
    fn spawn_in_cell(&mut self, kind: &str, cell: Vec2) -> Option<EntityId> {
        let tile = self.collider.tiles().tile_size();
        let id = self.next_id();
        let mut entity = self.factories.create(kind, id, cell)?;
        let size = entity.body.size;
        entity.body.pos += Vec2::new(
            (tile.width - size.width) / 2.0,
            tile.height - size.height,
        );
        Some(self.spawn(entity))
    }

    /// Feed host input. Keys drive the controller. With debugging enabled a
    /// pointer drag pans the camera and a click teleports the player.
    pub fn handle_input(&mut self, events: &[InputEvent]) {
        for event in events {
            if self.controller.apply(event) || !self.config.debug.enabled {
                continue;
            }
            match *event {
                InputEvent::PointerDown { x, y } => {
                    let at = Vec2::new(x, y);
                    self.drag = Some(Drag {
                        start: at,
                        last: at,
                        moved: false,
                    });
                }
                InputEvent::PointerMove { x, y } => {
                    if let Some(drag) = self.drag.as_mut() {
                        let at = Vec2::new(x, y);
                        if at.distance(drag.start) > DRAG_THRESHOLD {
                            drag.moved = true;
                        }
                        if drag.moved {
                            self.camera.pan(drag.last - at);
                        }
                        drag.last = at;
                    }
                }
                InputEvent::PointerUp { x, y } => {
                    let clicked = self.drag.take().map_or(false, |drag| !drag.moved);
                    if clicked && self.config.debug.teleport_on_click {
                        let target = self.camera.unproject(Vec2::new(x, y));
                        self.teleport_player(target);
                    }
                }
                _ => {}
            }
        }
    }

    /// Move the player to `pos` at rest.
    pub fn teleport_player(&mut self, pos: Vec2) {
        let Some(player) = self.player.and_then(|id| self.entities.get_mut(id)) else {
            return;
        };
        player.body.pos = pos;
        player.body.vel = Vec2::ZERO;
        log::debug!("teleported player to {:?}", pos);
    }

    /// Advance the simulation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if !(dt > 0.0) || !dt.is_finite() {
            return;
        }
        self.collider.clear_checks();
        let alive_before: Vec<bool> = self.entities.iter().map(|e| e.body.is_alive()).collect();

        let gravity = self.config.gravity;
        for entity in self.entities.iter_mut().filter(|e| e.active) {
            step_entity(entity, &self.controller, gravity, &mut self.collider, dt);
        }

        for stomp in resolve_interactions(self.entities.as_mut_slice()) {
            log::debug!("entity {} stomped entity {}", stomp.stomper.0, stomp.target.0);
            self.events.push(GameEvent::stomp(stomp.target, stomp.stomper));
        }

        // Anything that fell below the map is gone for good.
        let (_, map_max) = self.collider.tiles().bounds();
        for entity in self.entities.iter_mut() {
            if entity.body.pos.y > map_max.y && entity.body.life != Life::Dead {
                log::debug!("{}#{} fell out of the level", entity.tag, entity.id.0);
                entity.body.life = Life::Dead;
            }
        }

        tick_animations(&mut self.entities, dt);
        self.collider.tiles_mut().tick(dt);

        for (entity, was_alive) in self.entities.iter().zip(alive_before) {
            if was_alive && !entity.body.is_alive() {
                log::debug!("{}#{} killed", entity.tag, entity.id.0);
                self.events.push(GameEvent::killed(entity.id));
            }
        }
        for id in self.entities.remove_dead() {
            log::debug!("entity {} despawned", id.0);
            self.events.push(GameEvent::despawned(id));
        }

        if let Some(target) = self.player().map(|p| p.body.bounds().center()) {
            self.camera.follow(target);
        }

        #[cfg(feature = "debug-overlay")]
        if self.config.debug.enabled {
            self.overlay.rebuild(&self.entities, &self.collider, &self.camera);
        }
    }

    /// Write this frame's sprites into `buffer`.
    pub fn render(&self, buffer: &mut RenderBuffer) {
        build_render_buffer(self.collider.tiles(), &self.entities, &self.camera, buffer);
    }

    /// Events raised since the last call, oldest first.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn entities(&self) -> &Scene {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut Scene {
        &mut self.entities
    }

    pub fn collider(&self) -> &TileCollider {
        &self.collider
    }

    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera2D {
        &mut self.camera
    }

    pub fn controller_mut(&mut self) -> &mut Controller {
        &mut self.controller
    }

    pub fn player(&self) -> Option<&Entity> {
        self.player.and_then(|id| self.entities.get(id))
    }

    #[cfg(feature = "debug-overlay")]
    pub fn overlay(&self) -> &DebugOverlay {
        &self.overlay
    }
}
