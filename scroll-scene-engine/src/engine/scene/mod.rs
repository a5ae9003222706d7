//! Scene construction.
//!
//! Builds the camera, meshes, lights and starfield described by the scene
//! manifest, and draws optional debug helpers.

/// Full-window background image behind the 3D scene.
pub mod background;

/// One-shot scene bootstrapper.
pub mod bootstrap;

/// Debug helpers: light markers and a ground grid.
pub mod gizmos;

/// Point and ambient lights.
pub mod lighting;

/// Scene membership tracking.
pub mod registry;

/// Randomised star population.
pub mod starfield;
