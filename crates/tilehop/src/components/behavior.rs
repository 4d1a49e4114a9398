use std::fmt::Debug;

use crate::components::entity::Body;
use crate::input::controller::InputState;

/// Pluggable per-entity logic.
///
/// A behavior only mutates the body it is attached to. Behaviors never call
/// each other: they talk through body state (collision flags raised by the
/// collider, `life`, `harmful`, velocity) written by the collider or by
/// sibling behaviors.
pub trait Behavior: Debug {
    fn name(&self) -> &'static str;

    /// Per-frame logic, run before gravity and integration. May change
    /// velocity, acceleration or max speed, never position.
    fn update(&mut self, _body: &mut Body, _input: &dyn InputState, _dt: f32) {}

    /// `stomper` landed on this body from above.
    fn on_stomp(&mut self, _body: &mut Body, _stomper: &Body) {}

    /// This body overlaps `other`. Also called on the stomper of a stomp.
    fn on_touch(&mut self, _body: &mut Body, _other: &Body) {}
}
