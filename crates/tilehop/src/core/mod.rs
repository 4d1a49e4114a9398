pub mod collider;
pub mod geometry;
pub mod play;
pub mod scene;
pub mod time;
