use bevy::asset::AssetMetaCheck;
use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use bevy_common_assets::json::JsonAssetPlugin;

// Crate engine modules
use crate::engine::assets::scene_manifest::SceneManifest;
use crate::engine::camera::orbit_controller::{accumulate_orbit_drag, update_orbit_controllers};
use crate::engine::camera::scroll_camera::apply_scroll_to_camera;
use crate::engine::core::app_state::{
    AppState, InitFailed, report_init_failures, transition_to_running,
};
use crate::engine::core::window_config::create_window_config;
use crate::engine::loading::manifest_loader::{
    ManifestLoader, SceneSelection, resolve_scene_manifest, start_loading,
};
use crate::engine::loading::progress::LoadingProgress;
use crate::engine::loading::texture_loader::{
    TextureRequests, check_texture_loads, start_texture_loads,
};
use crate::engine::scene::background::fit_background_to_window;
use crate::engine::scene::bootstrap::bootstrap_scene;
use crate::engine::scene::gizmos::{draw_scene_helpers, helpers_enabled};
use crate::engine::scene::registry::SceneRegistry;
use crate::engine::systems::frame_loop::{
    FrameLoop, FrameLoopHandle, exit_when_stopped, frame_loop_running, spin_meshes,
    sync_orientations,
};
// Host page
use crate::page::page_events::{PageInput, PagePlugin};

pub fn create_app(selection: SceneSelection) -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .init_state::<AppState>()
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        // Registers SceneManifest as a loadable asset type from `*.scene.json` files.
        .add_plugins(JsonAssetPlugin::<SceneManifest>::new(&[
            constants::path::SCENE_MANIFEST_EXTENSION,
        ]))
        .add_plugins(PagePlugin);

    // Initialise resources early
    app.insert_resource(selection)
        .init_resource::<LoadingProgress>()
        .init_resource::<ManifestLoader>()
        .init_resource::<TextureRequests>()
        .init_resource::<SceneRegistry>()
        .init_resource::<FrameLoop>()
        .init_resource::<FrameLoopHandle>()
        .add_event::<InitFailed>();

    // State-based system scheduling
    app.add_systems(Startup, start_loading)
        .add_systems(
            Update,
            (
                resolve_scene_manifest,
                transition_to_running.run_if(resource_exists::<SceneManifest>),
            )
                .chain()
                .run_if(in_state(AppState::Loading)),
        )
        .add_systems(OnEnter(AppState::Running), bootstrap_scene);

    // Scroll first, then the frame tick, then transforms.
    let frame_systems = (
        apply_scroll_to_camera,
        (
            spin_meshes,
            (accumulate_orbit_drag, update_orbit_controllers).chain(),
        ),
        sync_orientations,
    )
        .chain()
        .after(PageInput)
        .run_if(frame_loop_running);

    let runtime_systems = (
        frame_systems,
        (start_texture_loads, check_texture_loads).chain(),
        fit_background_to_window,
        draw_scene_helpers.run_if(helpers_enabled),
    );

    app.add_systems(Update, runtime_systems.run_if(in_state(AppState::Running)))
        .add_systems(Update, (report_init_failures, exit_when_stopped));

    // FPS overlay only for native builds.
    #[cfg(not(target_arch = "wasm32"))]
    {
        use crate::engine::systems::fps_tracking::{fps_text_update_system, spawn_fps_overlay};
        app.add_systems(Startup, spawn_fps_overlay)
            .add_systems(Update, fps_text_update_system);
    }

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    let asset_config = AssetPlugin {
        meta_check: AssetMetaCheck::Never,
        ..default()
    };

    let log_config = LogPlugin {
        filter: constants::render_settings::LOG_FILTER.into(),
        level: Level::INFO,
        ..default()
    };

    DefaultPlugins
        .set(window_config)
        .set(asset_config)
        .set(log_config)
}
