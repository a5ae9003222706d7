//! Compile-time defaults shared by the scene engine and its built-in presets.

pub mod animation;
pub mod camera;
pub mod geometry;
pub mod path;
pub mod render_settings;
pub mod scroll;
pub mod starfield;
