pub mod api;
pub mod assets;
pub mod behaviors;
pub mod bridge;
pub mod components;
pub mod core;
pub mod entities;
pub mod error;
pub mod input;
pub mod renderer;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::game::{DebugConfig, EnemyConfig, Game, GameConfig, PlayerConfig};
pub use api::types::{EntityId, EventKind, GameEvent};
pub use assets::level::{Level, LevelLegend};
pub use assets::loader::{AssetPaths, AssetSource, LevelAssets};
pub use assets::manifest::AssetManifest;
pub use assets::registry::SpriteRegistry;
pub use bridge::protocol::ProtocolLayout;
pub use components::animation::{AnimationComponent, AnimationDef};
pub use components::behavior::Behavior;
pub use components::entity::{Body, CollisionFlags, Entity, Life, Side, Team};
pub use components::sprite::{AtlasId, SpriteComponent, SpriteFrame};
pub use components::tilemap::{Tile, TileId, TileMap};
pub use core::collider::TileCollider;
pub use core::geometry::{Axis, Bounds, Size};
pub use core::play::PlayScene;
pub use core::scene::Scene;
pub use core::time::FrameClock;
pub use entities::{EntityFactory, Factories};
pub use error::{EngineError, LevelError};
pub use input::controller::{Action, Controller, InputState};
pub use input::queue::{InputEvent, InputQueue};
pub use renderer::camera::Camera2D;
pub use renderer::instance::{RenderBuffer, RenderInstance};
pub use systems::animation::tick_animations;
