pub mod animation;
pub mod behavior;
pub mod entity;
pub mod sprite;
pub mod tilemap;
