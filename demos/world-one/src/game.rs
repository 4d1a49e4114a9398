use glam::Vec2;
use tilehop::{Game, GameConfig, PlayScene};

pub const MANIFEST: &str = include_str!("../assets/manifest.json");
pub const LEGEND: &str = include_str!("../assets/legend.json");
pub const LEVEL: &str = include_str!("../assets/levels/1-1.lvl");

/// World 1-1. Sends the player back to the start of the level after
/// every death.
pub struct WorldOne {
    start: Option<Vec2>,
    respawns: u32,
}

impl WorldOne {
    pub fn new() -> Self {
        Self {
            start: None,
            respawns: 0,
        }
    }

    pub fn respawns(&self) -> u32 {
        self.respawns
    }
}

impl Game for WorldOne {
    fn config(&self) -> GameConfig {
        let mut config = GameConfig::default();
        config.debug.enabled = cfg!(feature = "debug-overlay");
        config.debug.teleport_on_click = config.debug.enabled;
        config
    }

    fn update(&mut self, scene: &mut PlayScene) {
        if let Some(player) = scene.player() {
            self.start.get_or_insert(player.body.pos);
            return;
        }
        let Some(start) = self.start else {
            return;
        };
        if scene.spawn_kind("player", start).is_some() {
            self.respawns += 1;
            log::info!("player respawned ({} so far)", self.respawns);
        }
    }
}
