//! Core application setup and state management.
//!
//! Handles application lifecycle, window configuration, state transitions,
//! and plugin initialisation for both native and WASM targets.

/// Application setup and plugin configuration for the Bevy engine.
///
/// Creates the main app with scene, loop, scroll and diagnostics systems.
pub mod app_setup;

/// Application state machine from manifest loading to the running frame loop.
pub mod app_state;

/// Initialisation error taxonomy.
pub mod errors;

/// Platform-specific window configuration for native and WASM builds.
///
/// Configures canvas integration for web targets and vsync settings.
pub mod window_config;
