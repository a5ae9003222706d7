use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::colour::HexColour;
use super::shapes::ShapeDescriptor;
use super::surfaces::SurfaceDescriptor;

/// Complete scene description as a Bevy asset. Mirrors the JSON structure exactly.
/// Missing sections fall back to an empty scene viewed by the default camera.
#[derive(Asset, TypePath, Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneManifest {
    pub name: String,
    pub camera: CameraSettings,
    pub clear_colour: HexColour,
    /// Full-screen image drawn behind the scene.
    pub background: Option<String>,
    pub meshes: Vec<MeshSpec>,
    pub lights: Vec<LightSpec>,
    pub starfield: Option<StarfieldSettings>,
    pub scroll: Option<ScrollMapping>,
    pub orbit_controls: Option<OrbitSettings>,
    /// Draw light markers and a ground grid.
    pub helpers: bool,
}

impl Default for SceneManifest {
    fn default() -> Self {
        Self {
            name: String::from("empty"),
            camera: CameraSettings::default(),
            clear_colour: HexColour::constant(constants::render_settings::CLEAR_COLOUR),
            background: None,
            meshes: Vec::new(),
            lights: Vec::new(),
            starfield: None,
            scroll: None,
            orbit_controls: None,
            helpers: false,
        }
    }
}

impl SceneManifest {
    /// Every texture path referenced by the manifest, background first.
    pub fn texture_paths(&self) -> impl Iterator<Item = &str> {
        self.background.as_deref().into_iter().chain(
            self.meshes
                .iter()
                .flat_map(|mesh| [mesh.surface.texture.as_deref(), mesh.surface.normal_map.as_deref()])
                .flatten(),
        )
    }

    /// Number of objects the bootstrapper adds to the scene.
    pub fn scene_object_count(&self) -> usize {
        self.meshes.len()
            + self.lights.len()
            + self.starfield.as_ref().map_or(0, |stars| stars.count)
    }

    /// Reject values the bootstrapper cannot turn into a scene.
    pub fn validate(&self) -> Result<(), String> {
        let camera = &self.camera;
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(format!("field of view {} is outside (0, 180)", camera.fov_degrees));
        }
        if !(camera.near > 0.0 && camera.far > camera.near) {
            return Err(format!(
                "clip range {}..{} is not positive and increasing",
                camera.near, camera.far
            ));
        }
        if let Some(stars) = &self.starfield {
            if !(stars.spread.is_finite() && stars.spread >= 0.0) {
                return Err(format!("starfield spread {} is not a finite size", stars.spread));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_degrees: constants::camera::FIELD_OF_VIEW_DEGREES,
            near: constants::camera::NEAR_CLIP,
            far: constants::camera::FAR_CLIP,
            position: constants::camera::TORUS_KNOT_CAMERA_POSITION,
        }
    }
}

/// One mesh of the scene with its placement and animation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSpec {
    pub name: String,
    pub shape: ShapeDescriptor,
    #[serde(default)]
    pub surface: SurfaceDescriptor,
    #[serde(default)]
    pub position: Vec3,
    /// Rotation added every frame tick (radians per axis).
    #[serde(default)]
    pub spin: Option<Vec3>,
    /// Rotation added on every scroll event (radians per axis).
    #[serde(default)]
    pub scroll_spin: Option<Vec3>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LightSpec {
    Point {
        #[serde(default)]
        colour: HexColour,
        #[serde(default = "default_point_intensity")]
        intensity: f32,
        #[serde(default = "default_point_range")]
        range: f32,
        position: Vec3,
    },
    Ambient {
        #[serde(default)]
        colour: HexColour,
        #[serde(default = "default_ambient_brightness")]
        brightness: f32,
    },
}

fn default_point_intensity() -> f32 {
    constants::render_settings::POINT_LIGHT_INTENSITY
}

fn default_point_range() -> f32 {
    constants::render_settings::POINT_LIGHT_RANGE
}

fn default_ambient_brightness() -> f32 {
    constants::render_settings::AMBIENT_BRIGHTNESS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldSettings {
    pub count: usize,
    /// Edge length of the cube centred on the origin.
    pub spread: f32,
    pub radius: f32,
    pub segments: u32,
    pub colour: HexColour,
    /// Fixed seed for a reproducible field; unseeded when absent.
    pub seed: Option<u64>,
}

impl Default for StarfieldSettings {
    fn default() -> Self {
        Self {
            count: constants::starfield::STAR_COUNT,
            spread: constants::starfield::STAR_SPREAD,
            radius: constants::starfield::STAR_RADIUS,
            segments: constants::starfield::STAR_SEGMENTS,
            colour: HexColour::constant(constants::render_settings::STAR_COLOUR),
            seed: None,
        }
    }
}

/// Linear map from scroll offset to camera position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollMapping {
    pub cxx: f32,
    pub cyy: f32,
    pub czz: f32,
}

impl Default for ScrollMapping {
    fn default() -> Self {
        Self {
            cxx: constants::scroll::CAMERA_X_PER_SCROLL,
            cyy: constants::scroll::CAMERA_Y_PER_SCROLL,
            czz: constants::scroll::CAMERA_Z_PER_SCROLL,
        }
    }
}

impl ScrollMapping {
    pub fn camera_position(&self, offset: f32) -> Vec3 {
        Vec3::new(offset * self.cxx, offset * self.cyy, offset * self.czz)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    pub target: Vec3,
    pub rotate_speed: f32,
    pub enable_damping: bool,
    pub damping_factor: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            target: constants::camera::ORBIT_TARGET,
            rotate_speed: constants::camera::ORBIT_ROTATE_SPEED,
            enable_damping: false,
            damping_factor: constants::camera::ORBIT_DAMPING_FACTOR,
        }
    }
}
