//! Procedural mesh generation for scene shapes.
//!
//! Bevy's primitives cover spheres, tori and boxes; the torus knot and the
//! wireframe conversion are built here.

/// Torus knot mesh builder.
pub mod torus_knot;

/// Triangle-to-line conversion for wireframe surfaces.
pub mod wireframe;
