pub mod animation;
pub mod collision;
pub mod physics;
pub mod render;
