//! Core runtime systems for the frame loop and diagnostics.
//!
//! Provides the per-tick spin and orientation systems with their stop handle,
//! native scroll emulation, and the FPS overlay.

/// FPS overlay for native builds.
pub mod fps_tracking;

/// Frame loop: per-tick spin, orientation sync, stop handle.
pub mod frame_loop;

/// Mouse-wheel driven scroll offsets for native windows.
pub mod native_scroll;
