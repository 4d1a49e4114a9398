//! Frame animation for entities and animated tiles.
//!
//! Frames are picked from elapsed time rather than stepped, so the same
//! definition can be shared by every tile of a kind and sampled from one clock.

use std::collections::HashMap;

use crate::components::sprite::SpriteFrame;

/// Definition of a single animation sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationDef {
    pub frames: Vec<SpriteFrame>,
    /// Seconds per frame.
    pub frame_duration: f32,
    pub looping: bool,
}

impl AnimationDef {
    pub fn new(frames: Vec<SpriteFrame>, fps: f32, looping: bool) -> Self {
        let frame_duration = if fps > 0.0 { 1.0 / fps } else { f32::INFINITY };
        Self {
            frames,
            frame_duration,
            looping,
        }
    }

    /// A one-frame, non-looping clip.
    pub fn still(frame: SpriteFrame) -> Self {
        Self::new(vec![frame], 0.0, false)
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Frame index shown after `elapsed` seconds.
    pub fn index_at(&self, elapsed: f32) -> usize {
        let count = self.frames.len();
        if count <= 1 || !elapsed.is_finite() || elapsed <= 0.0 {
            return 0;
        }
        let step = (elapsed / self.frame_duration) as usize;
        if self.looping {
            step % count
        } else {
            step.min(count - 1)
        }
    }

    /// Frame shown after `elapsed` seconds.
    pub fn frame_at(&self, elapsed: f32) -> Option<SpriteFrame> {
        self.frames.get(self.index_at(elapsed)).copied()
    }

    pub fn is_finished_at(&self, elapsed: f32) -> bool {
        !self.looping && elapsed >= self.frame_duration * self.frames.len() as f32
    }
}

/// Named clips for one entity plus the playback clock of the current one.
#[derive(Debug, Clone)]
pub struct AnimationComponent {
    clips: HashMap<String, AnimationDef>,
    current: String,
    elapsed: f32,
    /// Playback speed multiplier (1.0 = normal).
    pub speed: f32,
}

impl Default for AnimationComponent {
    fn default() -> Self {
        Self {
            clips: HashMap::new(),
            current: String::new(),
            elapsed: 0.0,
            speed: 1.0,
        }
    }
}

impl AnimationComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: register a clip. The first clip added becomes current.
    pub fn with_clip(mut self, name: impl Into<String>, def: AnimationDef) -> Self {
        self.add(name, def);
        self
    }

    pub fn add(&mut self, name: impl Into<String>, def: AnimationDef) {
        let name = name.into();
        if self.current.is_empty() {
            self.current = name.clone();
        }
        self.clips.insert(name, def);
    }

    pub fn has(&self, name: &str) -> bool {
        self.clips.contains_key(name)
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Switch to `name` from its first frame. Unknown names are ignored.
    pub fn play(&mut self, name: &str) {
        if self.clips.contains_key(name) {
            self.current = name.to_string();
            self.elapsed = 0.0;
        }
    }

    /// Switch only if `name` is not already playing, keeping the clock otherwise.
    pub fn play_if_different(&mut self, name: &str) {
        if self.current != name {
            self.play(name);
        }
    }

    /// Advance the clock. Returns true if the visible frame changed.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(def) = self.clips.get(&self.current) else {
            return false;
        };
        let before = def.index_at(self.elapsed);
        self.elapsed += dt * self.speed;
        def.index_at(self.elapsed) != before
    }

    pub fn current_frame(&self) -> Option<SpriteFrame> {
        self.clips
            .get(&self.current)
            .and_then(|def| def.frame_at(self.elapsed))
    }

    pub fn is_finished(&self) -> bool {
        self.clips
            .get(&self.current)
            .map_or(true, |def| def.is_finished_at(self.elapsed))
    }
}
