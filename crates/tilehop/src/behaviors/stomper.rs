use crate::components::behavior::Behavior;
use crate::components::entity::Body;

/// Bounces off stompable bodies it lands on.
#[derive(Debug, Clone)]
pub struct Stomper {
    bounce_velocity: f32,
}

impl Stomper {
    pub fn new(bounce_velocity: f32) -> Self {
        Self { bounce_velocity }
    }
}

impl Behavior for Stomper {
    fn name(&self) -> &'static str {
        "stomper"
    }

    fn on_touch(&mut self, body: &mut Body, other: &Body) {
        if body.is_alive() && other.is_alive() && other.stompable && body.is_stomping(other) {
            body.vel.y = -self.bounce_velocity;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn bounces_only_when_landing_on_stompable() {
        let target = Body {
            pos: Vec2::new(0.0, 100.0),
            stompable: true,
            ..Default::default()
        };
        let mut stomper = Stomper::new(400.0);
        let mut body = Body {
            pos: Vec2::new(0.0, 88.0),
            vel: Vec2::new(0.0, 90.0),
            ..Default::default()
        };
        stomper.on_touch(&mut body, &target);
        assert_eq!(body.vel.y, -400.0);

        let solid_wall = Body {
            stompable: false,
            ..target
        };
        body.vel.y = 90.0;
        stomper.on_touch(&mut body, &solid_wall);
        assert_eq!(body.vel.y, 90.0);
    }
}
