/// Torus knot: radius, tube radius, tubular segments, radial segments
pub const TORUS_KNOT_RADIUS: f32 = 10.0;
pub const TORUS_KNOT_TUBE: f32 = 3.0;
pub const TORUS_KNOT_TUBULAR_SEGMENTS: u32 = 100;
pub const TORUS_KNOT_RADIAL_SEGMENTS: u32 = 16;

/// Winding numbers around the axis of symmetry and the interior circle
pub const TORUS_KNOT_P: u32 = 2;
pub const TORUS_KNOT_Q: u32 = 3;

pub const TORUS_RADIUS: f32 = 10.0;
pub const TORUS_TUBE: f32 = 3.0;
pub const TORUS_RADIAL_SEGMENTS: u32 = 16;
pub const TORUS_TUBULAR_SEGMENTS: u32 = 100;

pub const MOON_RADIUS: f32 = 3.0;
pub const MOON_SEGMENTS: u32 = 32;

pub const AVATAR_SIZE: f32 = 3.0;

/// Offset along the knot curve used to estimate its tangent
pub const TORUS_KNOT_TANGENT_STEP: f32 = 0.01;
