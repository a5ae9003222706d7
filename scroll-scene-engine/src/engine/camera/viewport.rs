use bevy::prelude::*;

use crate::engine::assets::scene_manifest::CameraSettings;
use crate::engine::core::errors::InitError;

/// The scene's single viewpoint.
#[derive(Component)]
pub struct SceneCamera;

/// Output surface the renderer draws to, read once at bootstrap.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct RenderSurface {
    /// Logical size, matching the page's inner width and height.
    pub width: f32,
    pub height: f32,
    pub physical_width: u32,
    pub physical_height: u32,
    /// Device pixel ratio.
    pub scale_factor: f32,
}

impl RenderSurface {
    pub fn from_window(window: &Window) -> Result<Self, InitError> {
        let surface = Self {
            width: window.width(),
            height: window.height(),
            physical_width: window.physical_width(),
            physical_height: window.physical_height(),
            scale_factor: window.scale_factor(),
        };

        if !(surface.width > 0.0 && surface.height > 0.0) {
            return Err(InitError::InvalidSurface {
                selector: surface_name(),
                reason: format!("size {}x{} has no area", surface.width, surface.height),
            });
        }

        Ok(surface)
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width / self.height
    }
}

fn surface_name() -> String {
    if cfg!(target_arch = "wasm32") {
        String::from(constants::path::CANVAS_SELECTOR)
    } else {
        String::from("primary window")
    }
}

/// Perspective projection for the configured camera on this surface.
pub fn perspective_projection(
    settings: &CameraSettings,
    surface: &RenderSurface,
) -> PerspectiveProjection {
    PerspectiveProjection {
        fov: settings.fov_degrees.to_radians(),
        aspect_ratio: surface.aspect_ratio(),
        near: settings.near,
        far: settings.far,
        ..default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::window::WindowResolution;

    fn window(width: f32, height: f32) -> Window {
        Window {
            resolution: WindowResolution::new(width, height),
            ..default()
        }
    }

    #[test]
    fn aspect_ratio_is_width_over_height() {
        let surface = RenderSurface::from_window(&window(800.0, 600.0)).expect("valid surface");
        assert!((surface.aspect_ratio() - 800.0 / 600.0).abs() < 1e-6);

        let projection = perspective_projection(&CameraSettings::default(), &surface);
        assert!((projection.aspect_ratio - 4.0 / 3.0).abs() < 1e-6);
        assert!((projection.fov - 75f32.to_radians()).abs() < 1e-6);
        assert_eq!(projection.near, 0.1);
        assert_eq!(projection.far, 1000.0);
    }

    #[test]
    fn pixel_density_scales_physical_size() {
        let mut window = window(800.0, 600.0);
        window.resolution.set_scale_factor_override(Some(2.0));
        let surface = RenderSurface::from_window(&window).expect("valid surface");

        assert_eq!(surface.scale_factor, 2.0);
        assert_eq!((surface.width, surface.height), (800.0, 600.0));
        assert_eq!((surface.physical_width, surface.physical_height), (1600, 1200));
    }

    #[test]
    fn zero_sized_surface_is_rejected() {
        let err = RenderSurface::from_window(&window(0.0, 600.0)).expect_err("no area");
        assert!(matches!(err, InitError::InvalidSurface { .. }));
    }
}
