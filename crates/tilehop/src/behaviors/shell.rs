use crate::api::game::EnemyConfig;
use crate::behaviors::Walking;
use crate::components::behavior::Behavior;
use crate::components::entity::{Body, Team};
use crate::input::controller::InputState;

/// Seconds before waking during which the shell shows its wake-up clip.
const WAKE_WARNING: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShellState {
    Walking,
    Hiding { elapsed: f32 },
    Panic,
}

/// Koopa state machine.
///
/// Walking ─stomp→ Hiding ─stomp/kick→ Panic ─stomp→ Hiding, and a hiding
/// shell wakes back up to Walking after `wake_after` seconds. The body is
/// harmful while walking or sliding, harmless while hiding.
#[derive(Debug, Clone)]
pub struct Shell {
    state: ShellState,
    walk_speed: f32,
    panic_speed: f32,
    wake_after: f32,
}

impl Shell {
    pub fn new(walk_speed: f32, panic_speed: f32, wake_after: f32) -> Self {
        Self {
            state: ShellState::Walking,
            walk_speed,
            panic_speed,
            wake_after,
        }
    }

    pub fn from_config(config: &EnemyConfig) -> Self {
        Self::new(config.koopa_speed, config.koopa_panic_speed, config.koopa_wake_after)
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    fn hide(&mut self, body: &mut Body) {
        self.state = ShellState::Hiding { elapsed: 0.0 };
        body.vel.x = 0.0;
        body.harmful = false;
        body.play("hiding");
    }

    /// Slide away from whoever set the shell off.
    fn panic(&mut self, body: &mut Body, from: &Body) {
        self.state = ShellState::Panic;
        let away = if body.bounds().center().x >= from.bounds().center().x {
            1.0
        } else {
            -1.0
        };
        body.face(away);
        body.vel.x = self.panic_speed * away;
        body.harmful = true;
        body.play("panic");
    }

    fn wake(&mut self, body: &mut Body) {
        self.state = ShellState::Walking;
        body.harmful = true;
        body.play("walk");
    }
}

impl Behavior for Shell {
    fn name(&self) -> &'static str {
        "shell"
    }

    fn update(&mut self, body: &mut Body, _input: &dyn InputState, dt: f32) {
        if !body.is_alive() {
            body.vel.x = 0.0;
            return;
        }
        match self.state {
            ShellState::Walking => {
                body.harmful = true;
                Walking::patrol(body, self.walk_speed);
                body.play("walk");
            }
            ShellState::Hiding { elapsed } => {
                let elapsed = elapsed + dt;
                body.vel.x = 0.0;
                if elapsed >= self.wake_after {
                    self.wake(body);
                } else {
                    self.state = ShellState::Hiding { elapsed };
                    if elapsed >= self.wake_after - WAKE_WARNING {
                        body.play("wake");
                    }
                }
            }
            ShellState::Panic => {
                Walking::patrol(body, self.panic_speed);
                body.play("panic");
            }
        }
    }

    fn on_stomp(&mut self, body: &mut Body, stomper: &Body) {
        if !body.is_alive() {
            return;
        }
        match self.state {
            ShellState::Walking | ShellState::Panic => self.hide(body),
            ShellState::Hiding { .. } => self.panic(body, stomper),
        }
    }

    fn on_touch(&mut self, body: &mut Body, other: &Body) {
        if let ShellState::Hiding { .. } = self.state {
            if body.is_alive() && other.is_alive() && other.team == Team::Player {
                self.panic(body, other);
            }
        }
    }
}
