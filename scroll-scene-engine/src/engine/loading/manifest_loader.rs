use bevy::asset::LoadState;
use bevy::prelude::*;

use crate::engine::assets::presets::builtin_scene;
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::core::app_state::InitFailed;
use crate::engine::core::errors::InitError;
use crate::engine::loading::progress::LoadingProgress;
use constants::path::{DEFAULT_SCENE, SCENE_MANIFEST_DIR, SCENE_MANIFEST_EXTENSION};

/// Name of the scene manifest to load, chosen by the page or the environment.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct SceneSelection(pub String);

impl Default for SceneSelection {
    fn default() -> Self {
        Self(DEFAULT_SCENE.to_string())
    }
}

impl SceneSelection {
    /// Blank names fall back to the default scene.
    pub fn from_name(name: Option<String>) -> Self {
        match name {
            Some(name) if !name.trim().is_empty() => Self(name.trim().to_string()),
            _ => Self::default(),
        }
    }

    pub fn manifest_path(&self) -> String {
        format!(
            "{}/{}.{}",
            SCENE_MANIFEST_DIR, self.0, SCENE_MANIFEST_EXTENSION
        )
    }
}

#[derive(Resource, Default)]
pub struct ManifestLoader {
    handle: Option<Handle<SceneManifest>>,
}

/// Built-in manifest standing in for one that could not be loaded.
pub fn fallback_manifest(selection: &SceneSelection) -> SceneManifest {
    builtin_scene(&selection.0).unwrap_or_else(|| {
        warn!(
            "No built-in scene named '{}', using '{}'",
            selection.0, DEFAULT_SCENE
        );
        builtin_scene(DEFAULT_SCENE).unwrap_or_default()
    })
}

pub fn start_loading(
    mut manifest_loader: ResMut<ManifestLoader>,
    selection: Res<SceneSelection>,
    asset_server: Res<AssetServer>,
) {
    let manifest_path = selection.manifest_path();
    info!("Loading scene manifest: {}", manifest_path);
    manifest_loader.handle = Some(asset_server.load(manifest_path));
}

/// Insert the loaded manifest as a resource once it is available. A manifest
/// that fails to load is replaced by the built-in preset of the same name; one
/// that loads but cannot describe a scene is fatal.
pub fn resolve_scene_manifest(
    mut commands: Commands,
    mut loading_progress: ResMut<LoadingProgress>,
    manifest_loader: Res<ManifestLoader>,
    selection: Res<SceneSelection>,
    asset_server: Res<AssetServer>,
    manifests: Res<Assets<SceneManifest>>,
    mut failures: EventWriter<InitFailed>,
) {
    if loading_progress.manifest_resolved {
        return;
    }
    let Some(ref handle) = manifest_loader.handle else {
        return;
    };

    let manifest = if let Some(manifest) = manifests.get(handle) {
        manifest.clone()
    } else if let Some(LoadState::Failed(err)) = asset_server.get_load_state(handle) {
        failures.write(InitFailed(InitError::AssetLoad {
            path: selection.manifest_path(),
            reason: err.to_string(),
        }));
        fallback_manifest(&selection)
    } else {
        return;
    };

    loading_progress.manifest_resolved = true;
    if let Err(reason) = manifest.validate() {
        failures.write(InitFailed(InitError::InvalidManifest(reason)));
        return;
    }

    info!(
        "✓ Scene manifest '{}' resolved: {} objects",
        manifest.name,
        manifest.scene_object_count()
    );
    debug!(
        "Textures referenced: {:?}",
        manifest.texture_paths().collect::<Vec<_>>()
    );
    commands.insert_resource(manifest);
}
