use bevy::math::Vec3;

pub const TORUS_KNOT_COLOUR: &str = "#F0B14B";
pub const TORUS_COLOUR: &str = "#FF6347";
pub const STAR_COLOUR: &str = "#FFFFFF";
pub const LIGHT_COLOUR: &str = "#FFFFFF";
pub const CLEAR_COLOUR: &str = "#000000";

pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);

/// Point light output in lumens
pub const POINT_LIGHT_INTENSITY: f32 = 1_000_000.0;

/// Point light reach; covers the whole starfield cube
pub const POINT_LIGHT_RANGE: f32 = 100.0;

pub const AMBIENT_BRIGHTNESS: f32 = 250.0;

/// Debug grid: half extent and cell size
pub const HELPER_GRID_HALF_EXTENT: f32 = 100.0;
pub const HELPER_GRID_SPACING: f32 = 10.0;
pub const HELPER_MARKER_SIZE: f32 = 1.0;

/// FPS overlay text size (native only)
pub const FPS_FONT_SIZE: f32 = 16.0;

/// Log filter for the engine's tracing subscriber
pub const LOG_FILTER: &str = "wgpu=error,naga=warn,scroll_scene_engine=debug";
