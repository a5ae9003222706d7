use std::f32::consts::{PI, TAU};

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::engine::assets::scene_manifest::OrbitSettings;

/// Pointer-driven orbit around a target point.
///
/// Drags queue a spherical delta; the frame loop applies it (fully, or a damped
/// fraction per tick) and keeps the camera looking at the target.
#[derive(Component, Debug, Clone, Copy)]
pub struct OrbitController {
    pub settings: OrbitSettings,
    /// Pending azimuth change around the up axis (radians).
    pub pending_theta: f32,
    /// Pending polar change measured from the up axis (radians).
    pub pending_phi: f32,
}

impl OrbitController {
    pub fn new(settings: OrbitSettings) -> Self {
        Self {
            settings,
            pending_theta: 0.0,
            pending_phi: 0.0,
        }
    }

    /// Queue a drag of `delta` pixels.
    pub fn drag(&mut self, delta: Vec2) {
        self.pending_theta -= delta.x * self.settings.rotate_speed;
        self.pending_phi -= delta.y * self.settings.rotate_speed;
    }

    /// Move `transform` along its orbit by the pending delta and face the target.
    pub fn update(&mut self, transform: &mut Transform) {
        let target = self.settings.target;
        let offset = transform.translation - target;
        let radius = offset.length();
        if radius <= f32::EPSILON {
            return;
        }

        let (step_theta, step_phi) = if self.settings.enable_damping {
            let factor = self.settings.damping_factor.clamp(0.0, 1.0);
            (self.pending_theta * factor, self.pending_phi * factor)
        } else {
            (self.pending_theta, self.pending_phi)
        };

        let theta = (offset.x.atan2(offset.z) + step_theta) % TAU;
        let epsilon = constants::camera::ORBIT_POLAR_EPSILON;
        let phi = ((offset.y / radius).clamp(-1.0, 1.0).acos() + step_phi)
            .clamp(epsilon, PI - epsilon);

        let orbit = Vec3::new(
            phi.sin() * theta.sin(),
            phi.cos(),
            phi.sin() * theta.cos(),
        ) * radius;
        transform.translation = target + orbit;
        transform.look_at(target, Vec3::Y);

        if self.settings.enable_damping {
            let keep = 1.0 - self.settings.damping_factor.clamp(0.0, 1.0);
            self.pending_theta *= keep;
            self.pending_phi *= keep;
        } else {
            self.pending_theta = 0.0;
            self.pending_phi = 0.0;
        }
    }
}

/// Queue left-button drags on the primary window.
pub fn accumulate_orbit_drag(
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut mouse_motion: EventReader<MouseMotion>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut controllers: Query<&mut OrbitController>,
) {
    let delta: Vec2 = mouse_motion.read().map(|motion| motion.delta).sum();
    if !mouse_button.pressed(MouseButton::Left) || delta == Vec2::ZERO {
        return;
    }

    // Ignore drags while the cursor is outside the canvas.
    if windows
        .single()
        .is_ok_and(|window| window.cursor_position().is_none())
    {
        return;
    }

    for mut controller in &mut controllers {
        controller.drag(delta);
    }
}

/// Per-tick orbit update, run by the frame loop.
pub fn update_orbit_controllers(mut controllers: Query<(&mut Transform, &mut OrbitController)>) {
    for (mut transform, mut controller) in &mut controllers {
        controller.update(&mut transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller(enable_damping: bool) -> OrbitController {
        OrbitController::new(OrbitSettings {
            enable_damping,
            ..default()
        })
    }

    #[test]
    fn idle_update_faces_target_without_moving() {
        let mut transform = Transform::from_xyz(-3.0, 0.0, 30.0);
        controller(false).update(&mut transform);

        assert!(transform.translation.distance(Vec3::new(-3.0, 0.0, 30.0)) < 1e-4);
        let forward = transform.forward();
        let to_target = (Vec3::ZERO - transform.translation).normalize();
        assert!(forward.dot(to_target) > 0.9999);
    }

    #[test]
    fn drag_keeps_distance_to_target() {
        let mut transform = Transform::from_xyz(0.0, 0.0, 30.0);
        let mut orbit = controller(false);
        orbit.drag(Vec2::new(120.0, -40.0));
        orbit.update(&mut transform);

        assert!((transform.translation.length() - 30.0).abs() < 1e-3);
        assert!(transform.translation.x.abs() > 1.0);
        assert_eq!((orbit.pending_theta, orbit.pending_phi), (0.0, 0.0));
    }

    #[test]
    fn damping_spreads_delta_over_ticks() {
        let mut transform = Transform::from_xyz(0.0, 0.0, 30.0);
        let mut orbit = controller(true);
        orbit.drag(Vec2::new(100.0, 0.0));
        let queued = orbit.pending_theta;

        orbit.update(&mut transform);
        let factor = orbit.settings.damping_factor;
        assert!((orbit.pending_theta - queued * (1.0 - factor)).abs() < 1e-6);

        let first = transform.translation;
        orbit.update(&mut transform);
        assert!(transform.translation.distance(first) > 0.0);
    }

    #[test]
    fn pitch_stops_short_of_the_pole() {
        let mut transform = Transform::from_xyz(0.0, 0.0, 30.0);
        let mut orbit = controller(false);
        orbit.drag(Vec2::new(0.0, 10_000.0));
        orbit.update(&mut transform);

        assert!(transform.translation.y < 30.0);
        assert!(transform.translation.y > 29.9);
        assert!(transform.translation.is_finite());
    }
}
