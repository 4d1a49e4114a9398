use crate::components::behavior::Behavior;
use crate::components::entity::Body;
use crate::input::controller::{Action, InputState};

/// Variable-height jump gated on the ground flag of the last resolution.
///
/// A fresh press while grounded engages the jump; while the action stays held
/// the upward velocity is re-applied for up to `duration` seconds.
#[derive(Debug, Clone)]
pub struct Jump {
    velocity: f32,
    duration: f32,
    engage_time: f32,
    was_pressed: bool,
}

impl Jump {
    pub fn new(velocity: f32, duration: f32) -> Self {
        Self {
            velocity,
            duration,
            engage_time: 0.0,
            was_pressed: false,
        }
    }

    pub fn is_engaged(&self) -> bool {
        self.engage_time > 0.0
    }
}

impl Behavior for Jump {
    fn name(&self) -> &'static str {
        "jump"
    }

    fn update(&mut self, body: &mut Body, input: &dyn InputState, dt: f32) {
        let pressed = body.is_alive() && input.is_pressed(Action::Up);

        if pressed && !self.was_pressed && body.collisions.on_ground {
            self.engage_time = self.duration;
        }
        if !pressed || body.collisions.blocked_top {
            self.engage_time = 0.0;
        }
        if self.engage_time > 0.0 {
            body.vel.y = -self.velocity;
            self.engage_time -= dt;
        }
        self.was_pressed = pressed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::testing::Held;

    fn grounded() -> Body {
        let mut body = Body::default();
        body.collisions.on_ground = true;
        body
    }

    #[test]
    fn press_on_ground_launches() {
        let mut jump = Jump::new(200.0, 0.3);
        let mut body = grounded();
        jump.update(&mut body, &Held::with(&[Action::Up]), 0.1);
        assert_eq!(body.vel.y, -200.0);
        assert!(jump.is_engaged());
    }

    #[test]
    fn airborne_press_does_nothing() {
        let mut jump = Jump::new(200.0, 0.3);
        let mut body = Body::default();
        jump.update(&mut body, &Held::with(&[Action::Up]), 0.1);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn holding_does_not_rejump_after_landing() {
        let mut jump = Jump::new(200.0, 0.1);
        let mut body = grounded();
        let up = Held::with(&[Action::Up]);
        jump.update(&mut body, &up, 0.1);
        jump.update(&mut body, &up, 0.1);
        assert!(!jump.is_engaged());

        body.vel.y = 0.0;
        jump.update(&mut body, &up, 0.1);
        assert_eq!(body.vel.y, 0.0);
    }

    #[test]
    fn release_or_ceiling_cancels() {
        let mut jump = Jump::new(200.0, 1.0);
        let mut body = grounded();
        jump.update(&mut body, &Held::with(&[Action::Up]), 0.1);
        body.collisions.blocked_top = true;
        jump.update(&mut body, &Held::with(&[Action::Up]), 0.1);
        assert!(!jump.is_engaged());

        let mut jump = Jump::new(200.0, 1.0);
        let mut body = grounded();
        jump.update(&mut body, &Held::with(&[Action::Up]), 0.1);
        jump.update(&mut body, &Held::default(), 0.1);
        assert!(!jump.is_engaged());
    }
}
