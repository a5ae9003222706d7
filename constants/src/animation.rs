use bevy::math::Vec3;

/// Per-tick rotation of the wireframe torus knot (radians)
pub const TORUS_KNOT_SPIN: Vec3 = Vec3::new(0.0082, 0.005, 0.012);

/// Per-tick rotation of the torus on the space page (radians)
pub const TORUS_SPIN: Vec3 = Vec3::new(0.01, 0.005, 0.01);

/// Per-tick rotation of the moon (radians)
pub const MOON_SPIN: Vec3 = Vec3::new(0.005, 0.0, 0.0);

/// Rotation added to the moon on every scroll event (radians)
pub const MOON_SCROLL_SPIN: Vec3 = Vec3::new(0.05, 0.075, 0.05);

/// Rotation added to the avatar box on every scroll event (radians)
pub const AVATAR_SCROLL_SPIN: Vec3 = Vec3::new(0.0, 0.01, 0.01);
