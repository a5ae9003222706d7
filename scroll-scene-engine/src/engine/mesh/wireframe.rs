use std::collections::BTreeSet;

use bevy::asset::RenderAssetUsages;
use bevy::prelude::*;
use bevy::render::mesh::{Indices, PrimitiveTopology};

/// Convert an indexed triangle mesh into a line list with one segment per unique edge.
///
/// Only positions are carried over; wireframe surfaces are drawn unlit.
/// Meshes that are not indexed triangle lists are returned unchanged.
pub fn wireframe_mesh(mesh: &Mesh) -> Mesh {
    if mesh.primitive_topology() != PrimitiveTopology::TriangleList {
        return mesh.clone();
    }
    let (Some(indices), Some(positions)) =
        (mesh.indices(), mesh.attribute(Mesh::ATTRIBUTE_POSITION))
    else {
        return mesh.clone();
    };

    let triangle_indices: Vec<u32> = indices.iter().map(|index| index as u32).collect();
    let mut edges = BTreeSet::new();
    for triangle in triangle_indices.chunks_exact(3) {
        for (a, b) in [
            (triangle[0], triangle[1]),
            (triangle[1], triangle[2]),
            (triangle[2], triangle[0]),
        ] {
            // Skip degenerate edges from collapsed pole triangles.
            if a != b {
                edges.insert((a.min(b), a.max(b)));
            }
        }
    }

    let line_indices: Vec<u32> = edges.into_iter().flat_map(|(a, b)| [a, b]).collect();

    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions.clone())
        .with_inserted_indices(Indices::U32(line_indices))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
            .with_inserted_attribute(
                Mesh::ATTRIBUTE_POSITION,
                vec![[0.0_f32, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
            )
            .with_inserted_indices(Indices::U32(vec![0, 1, 2, 0, 2, 3]))
    }

    #[test]
    fn shared_edges_are_emitted_once() {
        let lines = wireframe_mesh(&quad());

        assert_eq!(lines.primitive_topology(), PrimitiveTopology::LineList);
        // Four outer edges plus the shared diagonal.
        assert_eq!(lines.indices().map(Indices::len), Some(5 * 2));
        assert_eq!(lines.count_vertices(), 4);
    }

    #[test]
    fn torus_knot_edge_count() {
        use crate::engine::mesh::torus_knot::TorusKnotMeshBuilder;
        use bevy::render::mesh::MeshBuilder;

        let (tubular, radial) = (10, 4);
        let knot = TorusKnotMeshBuilder {
            tubular_segments: tubular,
            radial_segments: radial,
            ..default()
        }
        .build();
        let lines = wireframe_mesh(&knot);

        // Per grid cell: one edge along the curve, one around the tube, one diagonal,
        // plus the closing row and column of the (tubular+1) x (radial+1) grid.
        let cells = (tubular * radial) as usize;
        let expected = 3 * cells + tubular as usize + radial as usize;
        assert_eq!(lines.indices().map(Indices::len), Some(expected * 2));
    }

    #[test]
    fn line_meshes_pass_through() {
        let lines = wireframe_mesh(&quad());
        let again = wireframe_mesh(&lines);
        assert_eq!(again.indices().map(Indices::len), lines.indices().map(Indices::len));
    }
}
