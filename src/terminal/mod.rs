//! crossterm front end: raw-mode guard, key translation and frame drawing.

pub mod events;
pub mod raw;
pub mod render;
