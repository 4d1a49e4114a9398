use crate::components::behavior::Behavior;
use crate::components::entity::Body;
use crate::input::controller::{Action, InputState};

/// Player-driven horizontal movement.
///
/// Accelerates by `body.acceleration.x` towards the held direction, capped at
/// `body.max_speed`, and brakes to rest at `deceleration` when no direction
/// is held.
#[derive(Debug, Clone)]
pub struct Go {
    deceleration: f32,
}

impl Go {
    pub fn new(deceleration: f32) -> Self {
        Self { deceleration }
    }
}

impl Behavior for Go {
    fn name(&self) -> &'static str {
        "go"
    }

    fn update(&mut self, body: &mut Body, input: &dyn InputState, dt: f32) {
        if !body.is_alive() {
            return;
        }

        let dir = input.is_pressed(Action::Right) as i8 - input.is_pressed(Action::Left) as i8;
        if dir != 0 {
            let dir = f32::from(dir);
            body.face(dir);
            let vx = body.vel.x + body.acceleration.x * dir * dt;
            body.vel.x = vx.clamp(-body.max_speed, body.max_speed);
        } else if body.vel.x != 0.0 {
            let brake = self.deceleration * dt;
            body.vel.x = if body.vel.x.abs() <= brake {
                0.0
            } else {
                body.vel.x - brake * body.vel.x.signum()
            };
        }

        if !body.collisions.on_ground {
            body.play("jump");
        } else if body.vel.x != 0.0 {
            body.play("run");
        } else {
            body.play("idle");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::testing::Held;
    use glam::Vec2;

    fn runner() -> Body {
        Body {
            max_speed: 100.0,
            acceleration: Vec2::new(400.0, 0.0),
            ..Default::default()
        }
    }

    #[test]
    fn accelerates_up_to_max_speed() {
        let mut go = Go::new(300.0);
        let mut body = runner();
        let right = Held::with(&[Action::Right]);

        go.update(&mut body, &right, 0.1);
        assert_eq!(body.vel.x, 40.0);
        for _ in 0..10 {
            go.update(&mut body, &right, 0.1);
        }
        assert_eq!(body.vel.x, 100.0);
        assert_eq!(body.heading, 1.0);
    }

    #[test]
    fn brakes_to_rest_without_overshoot() {
        let mut go = Go::new(300.0);
        let mut body = runner();
        body.vel.x = -50.0;

        go.update(&mut body, &Held::default(), 0.1);
        assert_eq!(body.vel.x, -20.0);
        go.update(&mut body, &Held::default(), 0.1);
        assert_eq!(body.vel.x, 0.0);
    }

    #[test]
    fn left_turns_heading() {
        let mut go = Go::new(300.0);
        let mut body = runner();
        go.update(&mut body, &Held::with(&[Action::Left]), 0.1);
        assert_eq!(body.heading, -1.0);
        assert!(body.vel.x < 0.0);
    }

    #[test]
    fn dead_body_ignores_input() {
        let mut go = Go::new(300.0);
        let mut body = runner();
        body.kill();
        go.update(&mut body, &Held::with(&[Action::Right]), 0.1);
        assert_eq!(body.vel.x, 0.0);
    }
}
