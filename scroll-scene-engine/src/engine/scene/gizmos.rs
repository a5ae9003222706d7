use bevy::prelude::*;

use super::lighting::SceneLight;
use crate::engine::assets::scene_manifest::SceneManifest;

/// Run condition: the manifest asked for debug helpers.
pub fn helpers_enabled(manifest: Option<Res<SceneManifest>>) -> bool {
    manifest.is_some_and(|manifest| manifest.helpers)
}

/// Mark point lights with an axis cross and draw a ground grid.
pub fn draw_scene_helpers(mut gizmos: Gizmos, lights: Query<&GlobalTransform, With<SceneLight>>) {
    use constants::render_settings::{
        HELPER_GRID_HALF_EXTENT, HELPER_GRID_SPACING, HELPER_MARKER_SIZE,
    };

    for light in &lights {
        let centre = light.translation();
        for axis in [Vec3::X, Vec3::Y, Vec3::Z] {
            gizmos.line(
                centre - axis * HELPER_MARKER_SIZE,
                centre + axis * HELPER_MARKER_SIZE,
                Color::srgb(1.0, 1.0, 0.0),
            );
        }
    }

    let lines = (HELPER_GRID_HALF_EXTENT * 2.0 / HELPER_GRID_SPACING) as i32;
    let grid_colour = Color::srgba(1.0, 1.0, 1.0, 0.25);
    for i in 0..=lines {
        let offset = -HELPER_GRID_HALF_EXTENT + i as f32 * HELPER_GRID_SPACING;
        gizmos.line(
            Vec3::new(offset, 0.0, -HELPER_GRID_HALF_EXTENT),
            Vec3::new(offset, 0.0, HELPER_GRID_HALF_EXTENT),
            grid_colour,
        );
        gizmos.line(
            Vec3::new(-HELPER_GRID_HALF_EXTENT, 0.0, offset),
            Vec3::new(HELPER_GRID_HALF_EXTENT, 0.0, offset),
            grid_colour,
        );
    }
}
