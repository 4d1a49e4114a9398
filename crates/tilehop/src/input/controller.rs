use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::input::queue::InputEvent;

/// Logical actions behaviors ask about. Key codes map onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Left,
    Right,
    Up,
    Down,
    /// Turbo button.
    ActionA,
}

/// Read-only view of held actions, queried by behaviors.
pub trait InputState {
    fn is_pressed(&self, action: Action) -> bool;
}

/// Tracks which actions are held, fed from key events.
#[derive(Debug, Clone, Default)]
pub struct Controller {
    bindings: HashMap<u32, Action>,
    held: HashSet<Action>,
}

impl Controller {
    pub fn new(bindings: HashMap<u32, Action>) -> Self {
        Self {
            bindings,
            held: HashSet::new(),
        }
    }

    /// Build from config bindings, whose keys are decimal key codes.
    /// Keys that are not numbers are skipped.
    pub fn from_config(bindings: &HashMap<String, Action>) -> Self {
        let mut parsed = HashMap::with_capacity(bindings.len());
        for (code, action) in bindings {
            match code.parse::<u32>() {
                Ok(code) => {
                    parsed.insert(code, *action);
                }
                Err(_) => log::warn!("ignoring key binding {code:?}: not a key code"),
            }
        }
        Self::new(parsed)
    }

    /// Apply one input event. Returns true if it changed a held action.
    pub fn apply(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::KeyDown { key_code } => match self.bindings.get(&key_code) {
                Some(action) => self.held.insert(*action),
                None => false,
            },
            InputEvent::KeyUp { key_code } => match self.bindings.get(&key_code) {
                Some(action) => self.held.remove(action),
                None => false,
            },
            _ => false,
        }
    }

    pub fn press(&mut self, action: Action) {
        self.held.insert(action);
    }

    pub fn release(&mut self, action: Action) {
        self.held.remove(&action);
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl InputState for Controller {
    fn is_pressed(&self, action: Action) -> bool {
        self.held.contains(&action)
    }
}

/// Input state with nothing held, for entities that never read input.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputState for NoInput {
    fn is_pressed(&self, _action: Action) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrows() -> Controller {
        Controller::new(HashMap::from([(37, Action::Left), (39, Action::Right)]))
    }

    #[test]
    fn key_events_toggle_actions() {
        let mut c = arrows();
        assert!(c.apply(&InputEvent::KeyDown { key_code: 37 }));
        assert!(c.is_pressed(Action::Left));
        assert!(!c.apply(&InputEvent::KeyDown { key_code: 37 }));
        assert!(c.apply(&InputEvent::KeyUp { key_code: 37 }));
        assert!(!c.is_pressed(Action::Left));
    }

    #[test]
    fn unbound_keys_and_pointer_events_are_ignored() {
        let mut c = arrows();
        assert!(!c.apply(&InputEvent::KeyDown { key_code: 13 }));
        assert!(!c.apply(&InputEvent::PointerDown { x: 1.0, y: 2.0 }));
        assert!(!c.is_pressed(Action::Right));
    }

    #[test]
    fn config_bindings_parse_codes() {
        let bindings = HashMap::from([
            ("39".to_string(), Action::Right),
            ("space".to_string(), Action::Up),
        ]);
        let mut c = Controller::from_config(&bindings);
        c.apply(&InputEvent::KeyDown { key_code: 39 });
        assert!(c.is_pressed(Action::Right));
        assert!(!NoInput.is_pressed(Action::Right));
    }
}
