use bevy::asset::LoadState;
use bevy::image::ImageLoaderSettings;
use bevy::prelude::*;

use crate::engine::core::app_state::InitFailed;
use crate::engine::core::errors::InitError;
use crate::engine::loading::progress::LoadingProgress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSlot {
    BaseColour,
    NormalMap,
}

/// Where a loaded texture ends up.
#[derive(Debug, Clone, PartialEq)]
pub enum TextureTarget {
    Background(Entity),
    Material {
        material: Handle<StandardMaterial>,
        slot: TextureSlot,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextureRequest {
    pub path: String,
    pub target: TextureTarget,
}

/// Textures the bootstrapper asked for. Queued requests are started on the next
/// frame; started ones are watched until they load or fail.
#[derive(Resource, Debug, Default)]
pub struct TextureRequests {
    queued: Vec<TextureRequest>,
    pending: Vec<(TextureRequest, Handle<Image>)>,
}

impl TextureRequests {
    pub fn request(&mut self, path: impl Into<String>, target: TextureTarget) {
        self.queued.push(TextureRequest {
            path: path.into(),
            target,
        });
    }

    pub fn queued(&self) -> &[TextureRequest] {
        &self.queued
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Remove a texture from a material, leaving its flat colour.
pub fn clear_texture_slot(material: &mut StandardMaterial, slot: TextureSlot) {
    match slot {
        TextureSlot::BaseColour => material.base_color_texture = None,
        TextureSlot::NormalMap => material.normal_map_texture = None,
    }
}

fn assign_texture(
    target: &TextureTarget,
    image: &Handle<Image>,
    materials: &mut Assets<StandardMaterial>,
    backgrounds: &mut Query<&mut Sprite>,
) {
    match target {
        TextureTarget::Background(entity) => {
            if let Ok(mut sprite) = backgrounds.get_mut(*entity) {
                sprite.image = image.clone();
            }
        }
        TextureTarget::Material { material, slot } => {
            let Some(material) = materials.get_mut(material) else {
                return;
            };
            match slot {
                TextureSlot::BaseColour => material.base_color_texture = Some(image.clone()),
                TextureSlot::NormalMap => material.normal_map_texture = Some(image.clone()),
            }
        }
    }
}

/// Start loading every queued texture and attach the handle to its target.
pub fn start_texture_loads(
    mut requests: ResMut<TextureRequests>,
    mut progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut backgrounds: Query<&mut Sprite>,
) {
    if requests.queued.is_empty() {
        return;
    }

    let queued = std::mem::take(&mut requests.queued);
    for request in queued {
        let image: Handle<Image> = match request.target {
            // Normal maps carry vectors, not colours.
            TextureTarget::Material {
                slot: TextureSlot::NormalMap,
                ..
            } => asset_server.load_with_settings(
                request.path.clone(),
                |settings: &mut ImageLoaderSettings| settings.is_srgb = false,
            ),
            _ => asset_server.load(request.path.clone()),
        };

        debug!("Loading texture: {}", request.path);
        assign_texture(&request.target, &image, &mut materials, &mut backgrounds);
        progress.textures_requested += 1;
        requests.pending.push((request, image));
    }
}

/// Watch started textures. A failed texture is removed from its material and
/// reported as a non-fatal initialisation failure.
pub fn check_texture_loads(
    mut requests: ResMut<TextureRequests>,
    mut progress: ResMut<LoadingProgress>,
    asset_server: Res<AssetServer>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut failures: EventWriter<InitFailed>,
) {
    if requests.pending.is_empty() {
        return;
    }

    let pending = std::mem::take(&mut requests.pending);
    for (request, image) in pending {
        match asset_server.get_load_state(&image) {
            Some(LoadState::Loaded) => {
                debug!("✓ Texture loaded: {}", request.path);
                progress.textures_loaded += 1;
            }
            Some(LoadState::Failed(err)) => {
                if let TextureTarget::Material { material, slot } = &request.target {
                    if let Some(material) = materials.get_mut(material) {
                        clear_texture_slot(material, *slot);
                    }
                }
                progress.textures_failed += 1;
                failures.write(InitFailed(InitError::AssetLoad {
                    path: request.path.clone(),
                    reason: err.to_string(),
                }));
            }
            _ => requests.pending.push((request, image)),
        }
    }

    if requests.pending_count() == 0 && progress.textures_settled() {
        info!(
            "✓ Textures settled: {} loaded, {} failed",
            progress.textures_loaded, progress.textures_failed
        );
    }
}
