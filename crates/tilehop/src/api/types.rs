use bytemuck::{Pod, Zeroable};

/// Unique identifier for an entity in the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

/// What happened, carried in `GameEvent::kind`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum EventKind {
    /// `a` = stomped entity, `b` = stomper.
    Stomp = 1,
    /// `a` = entity that started dying.
    Killed = 2,
    /// `a` = entity removed from the scene.
    Despawned = 3,
    /// `a` = spawned entity, `b`/`c` = position.
    Spawned = 4,
}

/// A game event handed to the host once per frame.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub const FLOATS: usize = 4;

    pub fn new(kind: EventKind, a: f32, b: f32, c: f32) -> Self {
        Self {
            kind: kind as u32 as f32,
            a,
            b,
            c,
        }
    }

    pub fn stomp(target: EntityId, stomper: EntityId) -> Self {
        Self::new(EventKind::Stomp, target.0 as f32, stomper.0 as f32, 0.0)
    }

    pub fn killed(id: EntityId) -> Self {
        Self::new(EventKind::Killed, id.0 as f32, 0.0, 0.0)
    }

    pub fn despawned(id: EntityId) -> Self {
        Self::new(EventKind::Despawned, id.0 as f32, 0.0, 0.0)
    }

    pub fn spawned(id: EntityId, x: f32, y: f32) -> Self {
        Self::new(EventKind::Spawned, id.0 as f32, x, y)
    }

    pub fn is(&self, kind: EventKind) -> bool {
        self.kind == kind as u32 as f32
    }
}
