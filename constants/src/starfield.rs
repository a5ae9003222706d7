/// Number of stars scattered at startup
pub const STAR_COUNT: usize = 400;

/// Edge length of the cube the stars are scattered in
pub const STAR_SPREAD: f32 = 100.0;

pub const STAR_RADIUS: f32 = 0.25;

/// Sector and stack count of each star sphere
pub const STAR_SEGMENTS: u32 = 24;
