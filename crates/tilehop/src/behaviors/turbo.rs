use glam::Vec2;

use crate::api::game::PlayerConfig;
use crate::components::behavior::Behavior;
use crate::components::entity::Body;
use crate::input::controller::{Action, InputState};

/// Top speed and horizontal acceleration used while moving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedProfile {
    pub max_speed: f32,
    pub acceleration: f32,
}

/// Switches the body between a normal and a boosted speed profile while the
/// turbo action is held. Attach before `Go` so the profile applies the same frame.
#[derive(Debug, Clone)]
pub struct Turbo {
    normal: SpeedProfile,
    boosted: SpeedProfile,
}

impl Turbo {
    pub fn new(normal: SpeedProfile, boosted: SpeedProfile) -> Self {
        Self { normal, boosted }
    }

    pub fn from_config(config: &PlayerConfig) -> Self {
        Self::new(
            SpeedProfile {
                max_speed: config.max_speed,
                acceleration: config.acceleration,
            },
            SpeedProfile {
                max_speed: config.turbo_max_speed,
                acceleration: config.turbo_acceleration,
            },
        )
    }
}

impl Behavior for Turbo {
    fn name(&self) -> &'static str {
        "turbo"
    }

    fn update(&mut self, body: &mut Body, input: &dyn InputState, _dt: f32) {
        let profile = if input.is_pressed(Action::ActionA) {
            self.boosted
        } else {
            self.normal
        };
        body.max_speed = profile.max_speed;
        body.acceleration = Vec2::new(profile.acceleration, 0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::testing::Held;

    #[test]
    fn held_action_selects_boosted_profile() {
        let mut turbo = Turbo::from_config(&PlayerConfig::default());
        let mut body = Body::default();

        turbo.update(&mut body, &Held::with(&[Action::ActionA]), 0.016);
        assert_eq!(body.max_speed, PlayerConfig::default().turbo_max_speed);
        assert_eq!(body.acceleration.x, PlayerConfig::default().turbo_acceleration);

        turbo.update(&mut body, &Held::default(), 0.016);
        assert_eq!(body.max_speed, PlayerConfig::default().max_speed);
        assert_eq!(body.acceleration, Vec2::new(PlayerConfig::default().acceleration, 0.0));
    }
}
