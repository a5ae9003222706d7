use bevy::prelude::*;

use crate::engine::core::errors::InitError;

#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Running,
}

#[derive(Component)]
pub struct FpsText;

/// Raised by any startup step that cannot complete.
#[derive(Event, Debug, Clone)]
pub struct InitFailed(pub InitError);

/// Log initialisation failures; fatal ones end the app with an error code.
pub fn report_init_failures(mut failures: EventReader<InitFailed>, mut exit: EventWriter<AppExit>) {
    for InitFailed(err) in failures.read() {
        if err.is_fatal() {
            error!("Initialisation failed: {err}");
            exit.write(AppExit::error());
        } else {
            warn!("Initialisation degraded: {err}");
        }
    }
}

pub fn transition_to_running(mut next_state: ResMut<NextState<AppState>>) {
    info!("→ Scene manifest ready, transitioning to Running state");
    next_state.set(AppState::Running);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<InitFailed>()
            .add_event::<AppExit>()
            .add_systems(Update, report_init_failures);
        app
    }

    fn exits(app: &App) -> usize {
        app.world().resource::<Events<AppExit>>().len()
    }

    #[test]
    fn fatal_failure_requests_exit() {
        let mut app = failure_app();
        app.world_mut()
            .send_event(InitFailed(InitError::MissingSurface("#bg".into())));
        app.update();
        assert_eq!(exits(&app), 1);
    }

    #[test]
    fn asset_failure_keeps_running() {
        let mut app = failure_app();
        app.world_mut().send_event(InitFailed(InitError::AssetLoad {
            path: "textures/space.jpg".into(),
            reason: "not found".into(),
        }));
        app.update();
        assert_eq!(exits(&app), 0);
    }
}
