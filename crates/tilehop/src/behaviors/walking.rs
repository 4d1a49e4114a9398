use crate::components::behavior::Behavior;
use crate::components::entity::Body;
use crate::input::controller::InputState;

/// Patrol AI: walk at a fixed speed, turn around at walls.
#[derive(Debug, Clone)]
pub struct Walking {
    speed: f32,
}

impl Walking {
    pub fn new(speed: f32) -> Self {
        Self { speed }
    }

    /// Turn away from a wall hit during the last resolution and walk on.
    pub(crate) fn patrol(body: &mut Body, speed: f32) {
        if body.collisions.blocked_left && body.heading < 0.0 {
            body.face(1.0);
        } else if body.collisions.blocked_right && body.heading > 0.0 {
            body.face(-1.0);
        }
        body.vel.x = speed * body.heading;
    }
}

impl Behavior for Walking {
    fn name(&self) -> &'static str {
        "walking"
    }

    fn update(&mut self, body: &mut Body, _input: &dyn InputState, _dt: f32) {
        if !body.is_alive() {
            body.vel.x = 0.0;
            return;
        }
        Self::patrol(body, self.speed);
        body.play("walk");
    }
}
