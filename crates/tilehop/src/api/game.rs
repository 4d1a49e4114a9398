use std::collections::HashMap;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::assets::loader::LevelAssets;
use crate::core::geometry::Size;
use crate::core::play::PlayScene;
use crate::error::EngineError;
use crate::input::controller::Action;

/// Configuration for the engine, provided by the game.
///
/// Physics constants live here and are handed to the scene, collider and
/// factories at construction time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Upper bound on fixed steps run for one host frame.
    pub max_steps_per_frame: u32,
    /// Constant downward acceleration. Y-down, so positive Y falls.
    pub gravity: Vec2,
    /// Size of one tile in world units.
    pub tiles: Size,
    /// Camera viewport in world units.
    pub viewport: Size,
    pub player: PlayerConfig,
    pub enemies: EnemyConfig,
    pub debug: DebugConfig,
    /// Host key code → action. Keys are strings so the table survives JSON.
    pub bindings: HashMap<String, Action>,
    /// Maximum render instances written per frame.
    pub max_instances: usize,
    /// Maximum game events per frame.
    pub max_events: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub max_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    pub turbo_max_speed: f32,
    pub turbo_acceleration: f32,
    pub jump_velocity: f32,
    /// Seconds the jump keeps pushing while held.
    pub jump_duration: f32,
    pub bounce_velocity: f32,
    /// Seconds between death and removal.
    pub remove_after: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub goomba_speed: f32,
    pub koopa_speed: f32,
    pub koopa_panic_speed: f32,
    /// Seconds a hiding koopa stays in its shell.
    pub koopa_wake_after: f32,
    pub remove_after: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Record checked tiles and build the debug overlay.
    pub enabled: bool,
    /// Pointer-down moves the player under the cursor.
    pub teleport_on_click: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_steps_per_frame: 10,
            gravity: Vec2::new(0.0, 1500.0),
            tiles: Size::new(16.0, 16.0),
            viewport: Size::new(256.0, 240.0),
            player: PlayerConfig::default(),
            enemies: EnemyConfig::default(),
            debug: DebugConfig::default(),
            bindings: default_bindings(),
            max_instances: 1024,
            max_events: 32,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            max_speed: 100.0,
            acceleration: 400.0,
            deceleration: 300.0,
            turbo_max_speed: 175.0,
            turbo_acceleration: 600.0,
            jump_velocity: 200.0,
            jump_duration: 0.3,
            bounce_velocity: 400.0,
            remove_after: 2.0,
        }
    }
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            goomba_speed: 30.0,
            koopa_speed: 30.0,
            koopa_panic_speed: 300.0,
            koopa_wake_after: 5.0,
            remove_after: 0.5,
        }
    }
}

/// Arrow keys move and jump, X is the turbo button.
fn default_bindings() -> HashMap<String, Action> {
    [
        ("37", Action::Left),
        ("38", Action::Up),
        ("39", Action::Right),
        ("40", Action::Down),
        ("88", Action::ActionA),
    ]
    .into_iter()
    .map(|(code, action)| (code.to_string(), action))
    .collect()
}

impl GameConfig {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// The contract a concrete game fulfils towards the host runner.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Build the scene once every asset is resident.
    fn init(&mut self, config: &GameConfig, assets: &LevelAssets) -> Result<PlayScene, EngineError> {
        PlayScene::from_assets(config.clone(), assets)
    }

    /// Hook run before every fixed simulation step.
    fn update(&mut self, _scene: &mut PlayScene) {}
}
