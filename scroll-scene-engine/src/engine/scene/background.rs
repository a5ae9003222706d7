use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Full-window image drawn behind the 3D scene.
#[derive(Component)]
pub struct BackgroundImage;

/// Spawn the background layer: a 2D camera rendering before the scene camera and
/// an empty sprite that receives the background texture once it is requested.
pub fn spawn_background(commands: &mut Commands, size: Vec2) -> Entity {
    commands.spawn((
        Camera2d,
        Camera {
            order: -1,
            ..default()
        },
    ));

    commands
        .spawn((
            Sprite {
                custom_size: Some(size),
                ..default()
            },
            BackgroundImage,
        ))
        .id()
}

/// Keep the background covering the window after resizes.
pub fn fit_background_to_window(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut backgrounds: Query<&mut Sprite, With<BackgroundImage>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let size = window.size();
    for mut sprite in &mut backgrounds {
        if sprite.custom_size != Some(size) {
            sprite.custom_size = Some(size);
        }
    }
}
