/// Camera x per unit of scroll offset
pub const CAMERA_X_PER_SCROLL: f32 = -0.0002;

/// Camera y per unit of scroll offset
pub const CAMERA_Y_PER_SCROLL: f32 = -0.0002;

/// Camera z per unit of scroll offset
pub const CAMERA_Z_PER_SCROLL: f32 = -0.01;

/// Virtual document offset per wheel line on native builds (pixels)
pub const NATIVE_PIXELS_PER_LINE: f32 = 40.0;

/// Deepest virtual document offset on native builds (pixels)
pub const NATIVE_MAX_SCROLL_OFFSET: f32 = 6000.0;
