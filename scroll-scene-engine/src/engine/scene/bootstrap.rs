use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::background::spawn_background;
use super::lighting::spawn_lights;
use super::registry::SceneRegistry;
use super::starfield::{StarfieldRng, spawn_starfield};
use crate::engine::assets::scene_manifest::{MeshSpec, SceneManifest};
use crate::engine::camera::orbit_controller::OrbitController;
use crate::engine::camera::scroll_camera::{LatestScrollOffset, ScrollCamera, ScrollSpin};
use crate::engine::camera::viewport::{RenderSurface, SceneCamera, perspective_projection};
use crate::engine::core::app_state::InitFailed;
use crate::engine::core::errors::InitError;
use crate::engine::loading::texture_loader::{TextureRequests, TextureSlot, TextureTarget};
use crate::engine::mesh::wireframe::wireframe_mesh;
use crate::engine::systems::frame_loop::{Orientation, Spin};

/// Mesh built from a manifest entry; the entry's name goes into `Name`.
#[derive(Component, Debug)]
pub struct SceneMesh;

/// Build the scene described by the manifest: camera, renderer surface,
/// meshes, lights, starfield and scroll mapping. Runs once on entering
/// `Running`. Surface failures are reported instead of building a partial scene.
pub fn bootstrap_scene(
    mut commands: Commands,
    manifest: Res<SceneManifest>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut registry: ResMut<SceneRegistry>,
    mut textures: ResMut<TextureRequests>,
    starfield_rng: Option<ResMut<StarfieldRng>>,
    latest_scroll: Option<Res<LatestScrollOffset>>,
    mut failures: EventWriter<InitFailed>,
) {
    let surface = match windows.single() {
        Ok(window) => RenderSurface::from_window(window),
        Err(_) => Err(InitError::MissingSurface(String::from(
            constants::path::CANVAS_SELECTOR,
        ))),
    };
    let surface = match surface {
        Ok(surface) => surface,
        Err(err) => {
            failures.write(InitFailed(err));
            return;
        }
    };

    info!(
        "Bootstrapping scene '{}' on {}x{} ({}x{} px @ {}x)",
        manifest.name,
        surface.width,
        surface.height,
        surface.physical_width,
        surface.physical_height,
        surface.scale_factor
    );

    commands.insert_resource(ClearColor(manifest.clear_colour.into()));

    if let Some(path) = &manifest.background {
        let background = spawn_background(&mut commands, Vec2::new(surface.width, surface.height));
        textures.request(path.clone(), TextureTarget::Background(background));
    }

    let latest_offset = latest_scroll.and_then(|latest| latest.0);
    let camera_position = match (manifest.scroll, latest_offset) {
        (Some(mapping), Some(offset)) => {
            debug!("Opening at scroll offset {offset}");
            mapping.camera_position(offset)
        }
        _ => manifest.camera.position,
    };
    spawn_scene_camera(&mut commands, &manifest, &surface, camera_position);

    for spec in &manifest.meshes {
        spawn_scene_mesh(
            &mut commands,
            &mut registry,
            &mut meshes,
            &mut materials,
            &mut textures,
            spec,
        );
    }

    spawn_lights(&mut commands, &mut registry, &manifest.lights);

    if let Some(settings) = &manifest.starfield {
        match starfield_rng {
            Some(mut rng) => {
                spawn_starfield(
                    &mut commands,
                    &mut registry,
                    &mut meshes,
                    &mut materials,
                    settings,
                    &mut rng.0,
                );
            }
            None => {
                let mut rng = StarfieldRng::new(settings.seed);
                spawn_starfield(
                    &mut commands,
                    &mut registry,
                    &mut meshes,
                    &mut materials,
                    settings,
                    &mut rng.0,
                );
            }
        }
    }

    if let Some(mapping) = manifest.scroll {
        commands.insert_resource(ScrollCamera::new(mapping));
    }

    commands.insert_resource(surface);
    if registry.is_empty() {
        warn!("Scene '{}' has no objects", manifest.name);
    }
    info!(
        "✓ Scene ready: {} objects, {} textures requested",
        registry.len(),
        textures.queued().len()
    );
}

fn spawn_scene_camera(
    commands: &mut Commands,
    manifest: &SceneManifest,
    surface: &RenderSurface,
    position: Vec3,
) {
    let settings = &manifest.camera;
    let mut camera = commands.spawn((
        Camera3d::default(),
        Camera {
            // The background layer has already cleared the frame.
            clear_color: if manifest.background.is_some() {
                ClearColorConfig::None
            } else {
                ClearColorConfig::Default
            },
            ..default()
        },
        Projection::Perspective(perspective_projection(settings, surface)),
        Transform::from_translation(position),
        SceneCamera,
    ));

    if let Some(orbit) = manifest.orbit_controls {
        let mut controller = OrbitController::new(orbit);
        let mut transform = Transform::from_translation(position);
        controller.update(&mut transform);
        camera.insert((controller, transform));
    }
}

fn spawn_scene_mesh(
    commands: &mut Commands,
    registry: &mut SceneRegistry,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    textures: &mut TextureRequests,
    spec: &MeshSpec,
) {
    let surface = &spec.surface;
    let mut mesh = spec.shape.build_mesh();
    let mut normal_map = surface.normal_map.clone();

    if surface.wireframe {
        mesh = wireframe_mesh(&mesh);
    } else if normal_map.is_some() {
        if let Err(err) = mesh.generate_tangents() {
            warn!("Mesh '{}' cannot take a normal map: {err}", spec.name);
            normal_map = None;
        }
    }

    let material = materials.add(surface.base_material());
    if let Some(path) = &surface.texture {
        textures.request(
            path.clone(),
            TextureTarget::Material {
                material: material.clone(),
                slot: TextureSlot::BaseColour,
            },
        );
    }
    if let Some(path) = normal_map.filter(|_| !surface.wireframe) {
        textures.request(
            path,
            TextureTarget::Material {
                material: material.clone(),
                slot: TextureSlot::NormalMap,
            },
        );
    }

    let entity = registry.add(
        commands,
        (
            Mesh3d(meshes.add(mesh)),
            MeshMaterial3d(material),
            Transform::from_translation(spec.position),
            Orientation::default(),
            Name::new(spec.name.clone()),
            SceneMesh,
        ),
    );

    let mut entity = commands.entity(entity);
    if let Some(spin) = spec.spin {
        entity.insert(Spin(spin));
    }
    if let Some(spin) = spec.scroll_spin {
        entity.insert(ScrollSpin(spin));
    }
}
