//! Scene description assets.
//!
//! Handles the JSON scene manifest, its shape and surface descriptors,
//! and the built-in scenes used when no manifest is available.

/// Hex colour parsing for manifest fields.
pub mod colour;

/// Built-in scene manifests mirroring the two shipped pages.
pub mod presets;

/// Scene manifest: camera, meshes, lights, starfield, scroll and orbit settings.
pub mod scene_manifest;

/// Procedural geometry descriptors and their mesh builders.
pub mod shapes;

/// Surface appearance descriptors and their materials.
pub mod surfaces;
