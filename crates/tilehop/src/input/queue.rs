/// Raw input events delivered by the host. Coordinates are screen-space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at screen coordinates (x, y).
    PointerDown { x: f32, y: f32 },
    /// A touch/click ended at screen coordinates (x, y).
    PointerUp { x: f32, y: f32 },
    /// A touch/cursor moved to screen coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    KeyDown { key_code: u32 },
    KeyUp { key_code: u32 },
}

/// Events collected between two host frames.
#[derive(Debug, Default)]
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Take every pending event, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_empties_queue_in_order() {
        let mut q = InputQueue::new();
        q.push(InputEvent::KeyDown { key_code: 39 });
        q.push(InputEvent::PointerDown { x: 10.0, y: 20.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events[0], InputEvent::KeyDown { key_code: 39 });
        assert!(q.is_empty());
    }
}
