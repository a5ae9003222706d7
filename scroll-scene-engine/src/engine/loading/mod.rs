//! Scene manifest and texture loading.
//!
//! Resolves the scene manifest during the `Loading` state and streams the
//! textures the bootstrapper requests, degrading materials whose textures fail.

/// Scene selection and manifest resolution with built-in fallbacks.
pub mod manifest_loader;

/// Loading progress counters for the manifest and textures.
pub mod progress;

/// Texture requests, load monitoring and material degradation.
pub mod texture_loader;
