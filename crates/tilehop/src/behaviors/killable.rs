use crate::components::behavior::Behavior;
use crate::components::entity::{Body, Life};
use crate::input::controller::InputState;

/// Dies when touched by a harmful body of the other team, then lingers for
/// `remove_after` seconds before being marked dead for removal.
#[derive(Debug, Clone)]
pub struct Killable {
    remove_after: f32,
}

impl Killable {
    pub fn new(remove_after: f32) -> Self {
        Self { remove_after }
    }
}

impl Behavior for Killable {
    fn name(&self) -> &'static str {
        "killable"
    }

    fn update(&mut self, body: &mut Body, _input: &dyn InputState, dt: f32) {
        if let Life::Dying { elapsed } = body.life {
            let elapsed = elapsed + dt;
            body.life = if elapsed >= self.remove_after {
                Life::Dead
            } else {
                Life::Dying { elapsed }
            };
        }
    }

    fn on_touch(&mut self, body: &mut Body, other: &Body) {
        if !body.is_alive() || !other.is_alive() || !other.harmful || other.team == body.team {
            return;
        }
        if other.stompable && body.is_stomping(other) {
            return;
        }
        body.kill();
        body.vel.x = 0.0;
        body.harmful = false;
        body.play("dead");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::entity::Team;
    use crate::input::controller::NoInput;
    use glam::Vec2;

    fn enemy_at(pos: Vec2) -> Body {
        Body {
            pos,
            harmful: true,
            stompable: true,
            team: Team::Enemy,
            ..Default::default()
        }
    }

    fn player_at(pos: Vec2) -> Body {
        Body {
            pos,
            team: Team::Player,
            ..Default::default()
        }
    }

    #[test]
    fn harmful_touch_kills() {
        let mut killable = Killable::new(1.0);
        let mut player = player_at(Vec2::new(10.0, 100.0));
        killable.on_touch(&mut player, &enemy_at(Vec2::new(20.0, 100.0)));
        assert_eq!(player.life, Life::Dying { elapsed: 0.0 });
    }

    #[test]
    fn stomping_is_not_a_touch_kill() {
        let mut killable = Killable::new(1.0);
        let mut player = player_at(Vec2::new(10.0, 86.0));
        player.vel.y = 120.0;
        killable.on_touch(&mut player, &enemy_at(Vec2::new(10.0, 100.0)));
        assert!(player.is_alive());
    }

    #[test]
    fn same_team_and_harmless_touches_are_ignored() {
        let mut killable = Killable::new(1.0);
        let mut goomba = enemy_at(Vec2::ZERO);
        killable.on_touch(&mut goomba, &enemy_at(Vec2::new(4.0, 0.0)));
        killable.on_touch(&mut goomba, &player_at(Vec2::new(4.0, 0.0)));
        assert!(goomba.is_alive());
    }

    #[test]
    fn dying_body_is_removed_after_delay() {
        let mut killable = Killable::new(0.5);
        let mut body = Body::default();
        body.kill();
        killable.update(&mut body, &NoInput, 0.25);
        assert_eq!(body.life, Life::Dying { elapsed: 0.25 });
        killable.update(&mut body, &NoInput, 0.25);
        assert_eq!(body.life, Life::Dead);
    }
}
