pub mod animation;
#[cfg(feature = "debug-overlay")]
pub mod debug;
pub mod interaction;
pub mod motion;
pub mod render;
