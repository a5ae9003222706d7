use bevy::math::Vec3;

/// Vertical field of view in degrees
pub const FIELD_OF_VIEW_DEGREES: f32 = 75.0;

pub const NEAR_CLIP: f32 = 0.1;
pub const FAR_CLIP: f32 = 1000.0;

/// Camera start for the spinning torus knot page
pub const TORUS_KNOT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 0.0, 30.0);

/// Camera start for the scrolling space page
pub const SPACE_CAMERA_POSITION: Vec3 = Vec3::new(-3.0, 0.0, 30.0);

/// Orbit controller target
pub const ORBIT_TARGET: Vec3 = Vec3::ZERO;

/// Radians of orbit per pixel of pointer drag
pub const ORBIT_ROTATE_SPEED: f32 = 0.005;

/// Fraction of the pending orbit delta applied per tick when damping is enabled
pub const ORBIT_DAMPING_FACTOR: f32 = 0.05;

/// Keeps the orbit away from the poles so `looking_at` stays well defined
pub const ORBIT_POLAR_EPSILON: f32 = 1.0e-3;
