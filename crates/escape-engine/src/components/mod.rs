pub mod bounds;
pub mod entity;
pub mod exit;
pub mod obstacle;
pub mod player;
pub mod room;
