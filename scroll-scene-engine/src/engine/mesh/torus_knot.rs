use std::f32::consts::TAU;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, MeshBuilder, PrimitiveTopology};

/// Tube swept along a (p, q) torus knot curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusKnotMeshBuilder {
    pub radius: f32,
    pub tube: f32,
    /// Segments along the curve.
    pub tubular_segments: u32,
    /// Segments around the tube.
    pub radial_segments: u32,
    /// Windings around the axis of rotational symmetry.
    pub p: u32,
    /// Windings around the interior circle of the torus.
    pub q: u32,
}

impl Default for TorusKnotMeshBuilder {
    fn default() -> Self {
        use constants::geometry::*;
        Self {
            radius: TORUS_KNOT_RADIUS,
            tube: TORUS_KNOT_TUBE,
            tubular_segments: TORUS_KNOT_TUBULAR_SEGMENTS,
            radial_segments: TORUS_KNOT_RADIAL_SEGMENTS,
            p: TORUS_KNOT_P,
            q: TORUS_KNOT_Q,
        }
    }
}

impl TorusKnotMeshBuilder {
    /// Point on the knot curve at parameter `u`.
    fn curve_point(&self, u: f32) -> Vec3 {
        let p = self.p.max(1) as f32;
        let q = self.q as f32;
        let qu_over_p = q / p * u;
        let cs = qu_over_p.cos();

        Vec3::new(
            self.radius * (2.0 + cs) * 0.5 * u.cos(),
            self.radius * (2.0 + cs) * 0.5 * u.sin(),
            self.radius * qu_over_p.sin() * 0.5,
        )
    }
}

impl MeshBuilder for TorusKnotMeshBuilder {
    fn build(&self) -> Mesh {
        let tubular = self.tubular_segments.max(3);
        let radial = self.radial_segments.max(3);
        let p = self.p.max(1) as f32;

        let ring = radial as usize + 1;
        let vertex_count = (tubular as usize + 1) * ring;
        let mut positions = Vec::with_capacity(vertex_count);
        let mut normals = Vec::with_capacity(vertex_count);
        let mut uvs = Vec::with_capacity(vertex_count);

        for i in 0..=tubular {
            let u = i as f32 / tubular as f32 * p * TAU;

            let p1 = self.curve_point(u);
            let p2 = self.curve_point(u + constants::geometry::TORUS_KNOT_TANGENT_STEP);

            // Frame along the curve: tangent, then binormal and normal from it.
            let tangent = p2 - p1;
            let binormal = tangent.cross(p2 + p1);
            let normal = binormal.cross(tangent);
            let binormal = binormal.normalize_or_zero();
            let normal = normal.normalize_or_zero();

            for j in 0..=radial {
                let v = j as f32 / radial as f32 * TAU;
                let cx = -self.tube * v.cos();
                let cy = self.tube * v.sin();

                let vertex = p1 + cx * normal + cy * binormal;
                positions.push(vertex.to_array());
                normals.push((vertex - p1).normalize_or_zero().to_array());
                uvs.push([i as f32 / tubular as f32, j as f32 / radial as f32]);
            }
        }

        let mut indices = Vec::with_capacity(tubular as usize * radial as usize * 6);
        for j in 1..=tubular {
            for i in 1..=radial {
                let a = ring as u32 * (j - 1) + (i - 1);
                let b = ring as u32 * j + (i - 1);
                let c = ring as u32 * j + i;
                let d = ring as u32 * (j - 1) + i;

                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Mesh::new(
            PrimitiveTopology::TriangleList,
            RenderAssetUsages::default(),
        )
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
    }
}
