//! Camera placement and control.
//!
//! Builds the perspective projection from the output surface, maps page
//! scroll offsets onto the camera, and provides a pointer-driven orbit.

/// Pointer-driven orbit controller updated by the frame loop.
pub mod orbit_controller;

/// Scroll offset events and the scroll-to-camera mapping system.
pub mod scroll_camera;

/// Output surface record and perspective projection.
pub mod viewport;
