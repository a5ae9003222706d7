use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::registry::SceneRegistry;
use crate::engine::assets::scene_manifest::StarfieldSettings;
use crate::engine::assets::shapes::ShapeDescriptor;
use crate::engine::assets::surfaces::SurfaceDescriptor;

#[derive(Component)]
pub struct Star;

/// Random source for star placement. Insert one to override the manifest seed.
#[derive(Resource)]
pub struct StarfieldRng(pub StdRng);

impl StarfieldRng {
    /// Seeded when `seed` is given, otherwise drawn from OS entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

/// `count` points uniformly distributed in a cube of edge `spread` centred on the origin.
/// Each axis is sampled independently from `[-spread / 2, spread / 2)`.
pub fn scatter_stars(count: usize, spread: f32, rng: &mut impl Rng) -> Vec<Vec3> {
    let half = spread * 0.5;
    if half <= 0.0 {
        return vec![Vec3::ZERO; count];
    }

    (0..count)
        .map(|_| {
            Vec3::new(
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
                rng.gen_range(-half..half),
            )
        })
        .collect()
}

/// Add one small sphere per star to the scene. Stars share a mesh and a material.
pub fn spawn_starfield(
    commands: &mut Commands,
    registry: &mut SceneRegistry,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    settings: &StarfieldSettings,
    rng: &mut impl Rng,
) -> usize {
    let star_mesh = meshes.add(
        ShapeDescriptor::Sphere {
            radius: settings.radius,
            width_segments: settings.segments,
            height_segments: settings.segments,
        }
        .build_mesh(),
    );
    let star_material = materials.add(SurfaceDescriptor::lit(settings.colour).base_material());

    let positions = scatter_stars(settings.count, settings.spread, rng);
    for position in &positions {
        registry.add(
            commands,
            (
                Mesh3d(star_mesh.clone()),
                MeshMaterial3d(star_material.clone()),
                Transform::from_translation(*position),
                Star,
            ),
        );
    }

    debug!(
        "Scattered {} stars in a {}-unit cube",
        positions.len(),
        settings.spread
    );
    positions.len()
}
