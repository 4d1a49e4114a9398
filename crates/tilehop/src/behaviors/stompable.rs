use glam::Vec2;

use crate::components::behavior::Behavior;
use crate::components::entity::Body;

/// Flattens when stomped: stops, becomes harmless and starts dying.
/// Removal is left to `Killable`.
#[derive(Debug, Clone, Default)]
pub struct Stompable;

impl Behavior for Stompable {
    fn name(&self) -> &'static str {
        "stompable"
    }

    fn on_stomp(&mut self, body: &mut Body, _stomper: &Body) {
        if !body.is_alive() {
            return;
        }
        body.kill();
        body.vel = Vec2::ZERO;
        body.harmful = false;
        body.play("flat");
    }
}
