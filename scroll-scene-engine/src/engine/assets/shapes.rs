use bevy::prelude::*;
use bevy::render::mesh::{MeshBuilder, Meshable};
use serde::{Deserialize, Serialize};

use crate::engine::mesh::torus_knot::TorusKnotMeshBuilder;

/// Procedural geometry parameters for a scene mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ShapeDescriptor {
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        #[serde(default = "default_knot_p")]
        p: u32,
        #[serde(default = "default_knot_q")]
        q: u32,
    },
    Torus {
        radius: f32,
        tube: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
}

fn default_knot_p() -> u32 {
    constants::geometry::TORUS_KNOT_P
}

fn default_knot_q() -> u32 {
    constants::geometry::TORUS_KNOT_Q
}

impl ShapeDescriptor {
    /// Build the triangle mesh for this shape.
    pub fn build_mesh(&self) -> Mesh {
        match *self {
            ShapeDescriptor::TorusKnot {
                radius,
                tube,
                tubular_segments,
                radial_segments,
                p,
                q,
            } => TorusKnotMeshBuilder {
                radius,
                tube,
                tubular_segments,
                radial_segments,
                p,
                q,
            }
            .build(),
            // `radius` is the distance from the centre to the middle of the tube.
            ShapeDescriptor::Torus {
                radius,
                tube,
                radial_segments,
                tubular_segments,
            } => Torus {
                minor_radius: tube,
                major_radius: radius,
            }
            .mesh()
            .minor_resolution(radial_segments as usize)
            .major_resolution(tubular_segments as usize)
            .build(),
            ShapeDescriptor::Sphere {
                radius,
                width_segments,
                height_segments,
            } => Sphere::new(radius)
                .mesh()
                .uv(width_segments.max(3), height_segments.max(2)),
            ShapeDescriptor::Cuboid {
                width,
                height,
                depth,
            } => Cuboid::new(width, height, depth).mesh().build(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knot_winding_defaults_apply() {
        let shape: ShapeDescriptor = serde_json::from_str(
            r#"{"type":"torus_knot","radius":10,"tube":3,"tubular_segments":100,"radial_segments":16}"#,
        )
        .expect("valid shape");
        assert_eq!(
            shape,
            ShapeDescriptor::TorusKnot {
                radius: 10.0,
                tube: 3.0,
                tubular_segments: 100,
                radial_segments: 16,
                p: 2,
                q: 3,
            }
        );
    }

    #[test]
    fn every_shape_builds_indexed_triangles() {
        let shapes = [
            ShapeDescriptor::TorusKnot {
                radius: 10.0,
                tube: 3.0,
                tubular_segments: 20,
                radial_segments: 6,
                p: 2,
                q: 3,
            },
            ShapeDescriptor::Torus {
                radius: 10.0,
                tube: 3.0,
                radial_segments: 8,
                tubular_segments: 24,
            },
            ShapeDescriptor::Sphere {
                radius: 0.25,
                width_segments: 24,
                height_segments: 24,
            },
            ShapeDescriptor::Cuboid {
                width: 3.0,
                height: 3.0,
                depth: 3.0,
            },
        ];

        for shape in shapes {
            let mesh = shape.build_mesh();
            assert!(mesh.count_vertices() > 0, "{shape:?} has no vertices");
            assert!(mesh.indices().is_some_and(|i| i.len() % 3 == 0));
        }
    }
}
