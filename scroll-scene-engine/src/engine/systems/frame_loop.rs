use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bevy::prelude::*;

/// Mesh orientation as XYZ Euler angles in radians, accumulated without wrapping.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Orientation(pub Vec3);

impl Orientation {
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.0.x, self.0.y, self.0.z)
    }
}

/// Rotation added to a mesh on every frame tick.
#[derive(Component, Debug, Clone, Copy)]
pub struct Spin(pub Vec3);

/// Progress of the frame loop.
#[derive(Resource, Debug, Default)]
pub struct FrameLoop {
    pub ticks: u64,
}

/// Stop handle for the frame loop, shared with whatever owns the page lifecycle.
///
/// Cloning shares the flag, so a browser callback holding a clone can stop the loop.
#[derive(Resource, Clone, Debug, Default)]
pub struct FrameLoopHandle {
    stop_requested: Arc<AtomicBool>,
}

impl FrameLoopHandle {
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
    }

    pub fn is_running(&self) -> bool {
        !self.stop_requested.load(Ordering::Acquire)
    }
}

/// Run condition for every per-tick system.
pub fn frame_loop_running(handle: Option<Res<FrameLoopHandle>>) -> bool {
    handle.is_none_or(|handle| handle.is_running())
}

/// Advance every spinning mesh by its fixed per-axis rate.
/// No delta-time compensation: a slow scheduler slows the animation.
pub fn spin_meshes(mut frame_loop: ResMut<FrameLoop>, mut spinners: Query<(&mut Orientation, &Spin)>) {
    frame_loop.ticks += 1;
    for (mut orientation, spin) in &mut spinners {
        orientation.0 += spin.0;
    }
}

/// Write orientations into transforms once per tick, after spin and scroll.
pub fn sync_orientations(mut meshes: Query<(&Orientation, &mut Transform), Changed<Orientation>>) {
    for (orientation, mut transform) in &mut meshes {
        transform.rotation = orientation.rotation();
    }
}

/// Leave the app once the stop handle fires.
pub fn exit_when_stopped(
    handle: Res<FrameLoopHandle>,
    frame_loop: Res<FrameLoop>,
    mut exit: EventWriter<AppExit>,
    mut reported: Local<bool>,
) {
    if handle.is_running() || *reported {
        return;
    }
    *reported = true;
    info!("Frame loop stopped after {} ticks", frame_loop.ticks);
    exit.write(AppExit::Success);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loop_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<FrameLoop>()
            .init_resource::<FrameLoopHandle>()
            .add_systems(
                Update,
                (spin_meshes, sync_orientations)
                    .chain()
                    .run_if(frame_loop_running),
            )
            .add_systems(Update, exit_when_stopped);
        app
    }

    #[test]
    fn angles_advance_by_rate_each_tick() {
        let mut app = loop_app();
        let rate = Vec3::new(0.0082, 0.005, 0.012);
        let knot = app
            .world_mut()
            .spawn((Orientation::default(), Spin(rate), Transform::default()))
            .id();

        let mut previous = Vec3::ZERO;
        for _ in 0..5 {
            app.update();
            let angles = app.world().get::<Orientation>(knot).expect("knot exists").0;
            let step = angles - previous;
            assert!((step - rate).abs().max_element() < 1e-6);
            assert!(angles.cmpgt(previous).all());
            previous = angles;
        }

        assert_eq!(app.world().resource::<FrameLoop>().ticks, 5);
        let rotation = app.world().get::<Transform>(knot).expect("knot exists").rotation;
        let expected = Orientation(rate * 5.0).rotation();
        assert!(rotation.angle_between(expected) < 1e-4);
    }

    #[test]
    fn stop_handle_halts_ticks_and_exits() {
        let mut app = loop_app();
        let knot = app
            .world_mut()
            .spawn((Orientation::default(), Spin(Vec3::ONE), Transform::default()))
            .id();

        app.update();
        let handle = app.world().resource::<FrameLoopHandle>().clone();
        handle.request_stop();
        app.update();
        app.update();

        assert_eq!(app.world().resource::<FrameLoop>().ticks, 1);
        assert_eq!(
            app.world().get::<Orientation>(knot).expect("knot exists").0,
            Vec3::ONE
        );
        let exits = app
            .world_mut()
            .resource_mut::<Events<AppExit>>()
            .drain()
            .filter(|exit| *exit == AppExit::Success)
            .count();
        assert_eq!(exits, 1);
    }

    #[test]
    fn loop_runs_without_a_handle() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<FrameLoop>()
            .add_systems(Update, spin_meshes.run_if(frame_loop_running));
        app.update();
        assert_eq!(app.world().resource::<FrameLoop>().ticks, 1);
    }
}
