use std::collections::HashMap;

use crate::assets::manifest::AssetManifest;
use crate::components::animation::{AnimationComponent, AnimationDef};
use crate::components::sprite::{AtlasId, SpriteComponent, SpriteFrame};

/// Registry of named sprites and animations, built from an AssetManifest.
/// Provides name-based lookup for factories and the level parser.
#[derive(Debug, Default)]
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteComponent>,
    animations: HashMap<String, AnimationDef>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a parsed AssetManifest. Animations naming an
    /// unknown sprite keep their known frames and log the rest.
    pub fn from_manifest(manifest: &AssetManifest) -> Self {
        let mut sprites = HashMap::with_capacity(manifest.sprites.len());
        for (name, desc) in &manifest.sprites {
            sprites.insert(
                name.clone(),
                SpriteComponent::new(
                    AtlasId(desc.atlas),
                    SpriteFrame::new(desc.col as f32, desc.row as f32),
                ),
            );
        }

        let mut animations = HashMap::with_capacity(manifest.animations.len());
        for (name, desc) in &manifest.animations {
            let frames: Vec<SpriteFrame> = desc
                .frames
                .iter()
                .filter_map(|frame| match sprites.get(frame) {
                    Some(sprite) => Some(sprite.frame),
                    None => {
                        log::warn!("animation '{}' refers to unknown sprite '{}'", name, frame);
                        None
                    }
                })
                .collect();
            if frames.is_empty() {
                continue;
            }
            animations.insert(name.clone(), AnimationDef::new(frames, desc.fps, desc.looping));
        }

        Self { sprites, animations }
    }

    /// Look up a sprite by name. Returns None if not found.
    pub fn get(&self, name: &str) -> Option<&SpriteComponent> {
        self.sprites.get(name)
    }

    /// Look up a sprite, logging when it is missing.
    pub fn sprite(&self, name: &str) -> Option<SpriteComponent> {
        let sprite = self.sprites.get(name).copied();
        if sprite.is_none() {
            log::warn!("unknown sprite '{}'", name);
        }
        sprite
    }

    /// Named animation, or a still of the sprite with the same name.
    pub fn animation(&self, name: &str) -> Option<AnimationDef> {
        if let Some(def) = self.animations.get(name) {
            return Some(def.clone());
        }
        self.sprites.get(name).map(|s| AnimationDef::still(s.frame))
    }

    /// Clips for one entity kind: clip `walk` of `prefix` "goomba" comes from
    /// the animation or sprite named "goomba-walk". Missing clips are logged
    /// and left out; the first clip found is the one that starts playing.
    pub fn clips(&self, prefix: &str, names: &[&str]) -> AnimationComponent {
        let mut component = AnimationComponent::new();
        for clip in names {
            let full = format!("{}-{}", prefix, clip);
            match self.animation(&full) {
                Some(def) => component.add(*clip, def),
                None => log::warn!("no animation or sprite named '{}'", full),
            }
        }
        component
    }
}
