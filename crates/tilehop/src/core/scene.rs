use crate::api::types::EntityId;
use crate::components::entity::{Entity, Life};

/// Ordered entity storage using a flat Vec.
///
/// Entities are updated in insertion order and removal keeps the order of
/// the survivors, so a frame always visits entities in the same sequence.
#[derive(Debug)]
pub struct Scene {
    entities: Vec<Entity>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            entities: Vec::with_capacity(64),
        }
    }

    /// Add an entity to the end of the update order.
    pub fn spawn(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    /// Drop every dead entity and return their IDs in update order.
    pub fn remove_dead(&mut self) -> Vec<EntityId> {
        let mut removed = Vec::new();
        self.entities.retain(|e| {
            if e.body.life == Life::Dead {
                removed.push(e.id);
                false
            } else {
                true
            }
        });
        removed
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn get_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.iter_mut().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> {
        self.entities.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Entity> {
        self.entities.iter_mut()
    }

    /// Entities as a slice, for pairwise passes.
    pub fn as_mut_slice(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
