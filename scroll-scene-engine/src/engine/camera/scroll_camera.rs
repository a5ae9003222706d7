use bevy::prelude::*;

use super::viewport::SceneCamera;
use crate::engine::assets::scene_manifest::ScrollMapping;
use crate::engine::systems::frame_loop::Orientation;

/// Page scroll position: the document's top edge relative to the viewport top.
/// Zero at the top of the page and negative once scrolled down.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct ScrollOffsetChanged {
    pub offset: f32,
}

/// Rotation added to a mesh on every scroll event.
#[derive(Component, Debug, Clone, Copy)]
pub struct ScrollSpin(pub Vec3);

/// Scroll mapping of the running scene.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct ScrollCamera {
    pub mapping: ScrollMapping,
}

impl ScrollCamera {
    pub fn new(mapping: ScrollMapping) -> Self {
        Self { mapping }
    }
}

/// Most recent scroll offset, tracked in every state so a scene that starts
/// late still opens at the page's current position.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct LatestScrollOffset(pub Option<f32>);

pub fn track_scroll_offset(
    mut events: EventReader<ScrollOffsetChanged>,
    mut latest: ResMut<LatestScrollOffset>,
) {
    if let Some(event) = events.read().last() {
        latest.0 = Some(event.offset);
    }
}

/// Apply every scroll event in arrival order: each one spins the scroll-driven
/// meshes once and places the camera from its offset.
pub fn apply_scroll_to_camera(
    mut events: EventReader<ScrollOffsetChanged>,
    scroll_camera: Option<Res<ScrollCamera>>,
    mut cameras: Query<&mut Transform, With<SceneCamera>>,
    mut spinners: Query<(&mut Orientation, &ScrollSpin)>,
) {
    let Some(scroll_camera) = scroll_camera else {
        events.clear();
        return;
    };

    for event in events.read() {
        for (mut orientation, spin) in &mut spinners {
            orientation.0 += spin.0;
        }

        let position = scroll_camera.mapping.camera_position(event.offset);
        for mut transform in &mut cameras {
            transform.translation = position;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scroll_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<ScrollOffsetChanged>()
            .insert_resource(ScrollCamera::new(ScrollMapping::default()))
            .add_systems(Update, apply_scroll_to_camera);
        app
    }

    #[test]
    fn offset_places_camera() {
        let mut app = scroll_app();
        let camera = app
            .world_mut()
            .spawn((SceneCamera, Transform::from_xyz(-3.0, 0.0, 30.0)))
            .id();

        app.world_mut()
            .send_event(ScrollOffsetChanged { offset: -500.0 });
        app.update();

        let translation = app.world().get::<Transform>(camera).map(|t| t.translation);
        let translation = translation.expect("camera exists");
        assert!((translation.z - 5.0).abs() < 1e-5);
        assert!((translation.x - 0.1).abs() < 1e-6);
        assert!((translation.y - 0.1).abs() < 1e-6);
    }

    #[test]
    fn every_event_spins_once() {
        let mut app = scroll_app();
        let moon = app
            .world_mut()
            .spawn((Orientation::default(), ScrollSpin(Vec3::new(0.05, 0.075, 0.05))))
            .id();
        let still = app.world_mut().spawn(Orientation::default()).id();

        for offset in [-10.0, -20.0, -30.0] {
            app.world_mut().send_event(ScrollOffsetChanged { offset });
        }
        app.update();

        let angles = app.world().get::<Orientation>(moon).expect("moon exists").0;
        assert!((angles - Vec3::new(0.15, 0.225, 0.15)).abs().max_element() < 1e-6);
        assert_eq!(
            app.world().get::<Orientation>(still).expect("mesh exists").0,
            Vec3::ZERO
        );
    }

    #[test]
    fn latest_offset_wins() {
        let mut app = scroll_app();
        let camera = app.world_mut().spawn((SceneCamera, Transform::default())).id();

        app.world_mut().send_event(ScrollOffsetChanged { offset: -900.0 });
        app.world_mut().send_event(ScrollOffsetChanged { offset: -100.0 });
        app.update();

        let z = app.world().get::<Transform>(camera).expect("camera exists").translation.z;
        assert!((z - 1.0).abs() < 1e-6);
    }

    #[test]
    fn scroll_without_mapping_is_ignored() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<ScrollOffsetChanged>()
            .add_systems(Update, apply_scroll_to_camera);
        let camera = app
            .world_mut()
            .spawn((SceneCamera, Transform::from_xyz(0.0, 0.0, 30.0)))
            .id();

        app.world_mut().send_event(ScrollOffsetChanged { offset: -500.0 });
        app.update();

        let z = app.world().get::<Transform>(camera).expect("camera exists").translation.z;
        assert_eq!(z, 30.0);
    }

    #[test]
    fn latest_offset_is_tracked_without_a_scene() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<ScrollOffsetChanged>()
            .init_resource::<LatestScrollOffset>()
            .add_systems(Update, track_scroll_offset);

        app.update();
        assert_eq!(*app.world().resource::<LatestScrollOffset>(), LatestScrollOffset(None));

        app.world_mut().send_event(ScrollOffsetChanged { offset: -40.0 });
        app.world_mut().send_event(ScrollOffsetChanged { offset: -80.0 });
        app.update();
        app.update();
        assert_eq!(
            *app.world().resource::<LatestScrollOffset>(),
            LatestScrollOffset(Some(-80.0))
        );
    }
}
