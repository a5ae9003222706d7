use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::colour::HexColour;

/// Surface appearance of a scene mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceDescriptor {
    pub colour: HexColour,
    /// Draw only the triangle edges.
    pub wireframe: bool,
    /// Respond to scene lights; unlit surfaces show their flat colour.
    pub lit: bool,
    pub texture: Option<String>,
    pub normal_map: Option<String>,
}

impl Default for SurfaceDescriptor {
    fn default() -> Self {
        Self {
            colour: HexColour::default(),
            wireframe: false,
            lit: true,
            texture: None,
            normal_map: None,
        }
    }
}

impl SurfaceDescriptor {
    pub fn flat(colour: HexColour) -> Self {
        Self {
            colour,
            lit: false,
            ..default()
        }
    }

    pub fn wireframe(colour: HexColour) -> Self {
        Self {
            colour,
            wireframe: true,
            lit: false,
            ..default()
        }
    }

    pub fn lit(colour: HexColour) -> Self {
        Self {
            colour,
            ..default()
        }
    }

    /// Material without textures; texture handles are attached once requested.
    pub fn base_material(&self) -> StandardMaterial {
        StandardMaterial {
            base_color: self.colour.into(),
            unlit: !self.lit || self.wireframe,
            ..default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wireframe_is_never_lit() {
        let mut surface = SurfaceDescriptor::wireframe(HexColour::constant("#F0B14B"));
        surface.lit = true;
        assert!(surface.base_material().unlit);
    }

    #[test]
    fn manifest_fields_default() {
        let surface: SurfaceDescriptor =
            serde_json::from_str(r#"{"texture":"textures/moon.jpg"}"#).expect("valid surface");
        assert!(surface.lit);
        assert!(!surface.wireframe);
        assert_eq!(surface.texture.as_deref(), Some("textures/moon.jpg"));
        assert_eq!(surface.colour, HexColour(Color::WHITE));
    }
}
