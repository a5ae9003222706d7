//! Built-in scenes, used when no manifest can be loaded.

use bevy::prelude::*;
use constants::{animation, camera, geometry, path, render_settings};

use super::colour::HexColour;
use super::scene_manifest::{
    CameraSettings, LightSpec, MeshSpec, OrbitSettings, SceneManifest, ScrollMapping,
    StarfieldSettings,
};
use super::shapes::ShapeDescriptor;
use super::surfaces::SurfaceDescriptor;

/// Look up a built-in scene by manifest name.
pub fn builtin_scene(name: &str) -> Option<SceneManifest> {
    match name {
        "torus_knot" => Some(torus_knot_scene()),
        "space" => Some(space_scene()),
        _ => None,
    }
}

/// A single gold wireframe torus knot tumbling in front of the camera.
pub fn torus_knot_scene() -> SceneManifest {
    SceneManifest {
        name: String::from("torus_knot"),
        camera: CameraSettings {
            position: camera::TORUS_KNOT_CAMERA_POSITION,
            ..default()
        },
        meshes: vec![MeshSpec {
            name: String::from("torus_knot"),
            shape: ShapeDescriptor::TorusKnot {
                radius: geometry::TORUS_KNOT_RADIUS,
                tube: geometry::TORUS_KNOT_TUBE,
                tubular_segments: geometry::TORUS_KNOT_TUBULAR_SEGMENTS,
                radial_segments: geometry::TORUS_KNOT_RADIAL_SEGMENTS,
                p: geometry::TORUS_KNOT_P,
                q: geometry::TORUS_KNOT_Q,
            },
            surface: SurfaceDescriptor::wireframe(HexColour::constant(
                render_settings::TORUS_KNOT_COLOUR,
            )),
            position: Vec3::ZERO,
            spin: Some(animation::TORUS_KNOT_SPIN),
            scroll_spin: None,
        }],
        ..default()
    }
}

/// Starfield, lights, a torus, a textured moon and an avatar box, driven by page scroll.
pub fn space_scene() -> SceneManifest {
    let white = HexColour::constant(render_settings::LIGHT_COLOUR);

    SceneManifest {
        name: String::from("space"),
        camera: CameraSettings {
            position: camera::SPACE_CAMERA_POSITION,
            ..default()
        },
        background: Some(String::from(path::SPACE_BACKGROUND_TEXTURE)),
        meshes: vec![
            MeshSpec {
                name: String::from("torus"),
                shape: ShapeDescriptor::Torus {
                    radius: geometry::TORUS_RADIUS,
                    tube: geometry::TORUS_TUBE,
                    radial_segments: geometry::TORUS_RADIAL_SEGMENTS,
                    tubular_segments: geometry::TORUS_TUBULAR_SEGMENTS,
                },
                surface: SurfaceDescriptor::lit(HexColour::constant(render_settings::TORUS_COLOUR)),
                position: Vec3::ZERO,
                spin: Some(animation::TORUS_SPIN),
                scroll_spin: None,
            },
            MeshSpec {
                name: String::from("avatar"),
                shape: ShapeDescriptor::Cuboid {
                    width: geometry::AVATAR_SIZE,
                    height: geometry::AVATAR_SIZE,
                    depth: geometry::AVATAR_SIZE,
                },
                surface: SurfaceDescriptor {
                    texture: Some(String::from(path::AVATAR_TEXTURE)),
                    ..SurfaceDescriptor::flat(white)
                },
                position: Vec3::new(2.0, 0.0, -5.0),
                spin: None,
                scroll_spin: Some(animation::AVATAR_SCROLL_SPIN),
            },
            MeshSpec {
                name: String::from("moon"),
                shape: ShapeDescriptor::Sphere {
                    radius: geometry::MOON_RADIUS,
                    width_segments: geometry::MOON_SEGMENTS,
                    height_segments: geometry::MOON_SEGMENTS,
                },
                surface: SurfaceDescriptor {
                    texture: Some(String::from(path::MOON_TEXTURE)),
                    normal_map: Some(String::from(path::MOON_NORMAL_MAP)),
                    ..SurfaceDescriptor::lit(white)
                },
                position: Vec3::new(-10.0, 0.0, 30.0),
                spin: Some(animation::MOON_SPIN),
                scroll_spin: Some(animation::MOON_SCROLL_SPIN),
            },
        ],
        lights: vec![
            LightSpec::Point {
                colour: white,
                intensity: render_settings::POINT_LIGHT_INTENSITY,
                range: render_settings::POINT_LIGHT_RANGE,
                position: render_settings::POINT_LIGHT_POSITION,
            },
            LightSpec::Ambient {
                colour: white,
                brightness: render_settings::AMBIENT_BRIGHTNESS,
            },
        ],
        starfield: Some(StarfieldSettings::default()),
        scroll: Some(ScrollMapping::default()),
        orbit_controls: Some(OrbitSettings::default()),
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for name in ["torus_knot", "space"] {
            let scene = builtin_scene(name).expect("preset exists");
            assert_eq!(scene.name, name);
            assert!(scene.validate().is_ok(), "{name} preset is invalid");
        }
        assert!(builtin_scene("moonbase").is_none());
    }

    #[test]
    fn space_scene_counts_stars_meshes_and_lights() {
        let scene = space_scene();
        assert_eq!(scene.scene_object_count(), 3 + 2 + constants::starfield::STAR_COUNT);
    }

    #[test]
    fn shipped_manifests_match_presets() {
        let knot: SceneManifest = serde_json::from_str(include_str!(
            "../../../assets/scenes/torus_knot.scene.json"
        ))
        .expect("torus knot manifest parses");
        assert_eq!(knot, torus_knot_scene());

        let space: SceneManifest =
            serde_json::from_str(include_str!("../../../assets/scenes/space.scene.json"))
                .expect("space manifest parses");
        assert_eq!(space, space_scene());
    }
}
