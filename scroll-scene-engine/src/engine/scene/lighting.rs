use bevy::prelude::*;

use super::registry::SceneRegistry;
use crate::engine::assets::scene_manifest::LightSpec;

#[derive(Component)]
pub struct SceneLight;

/// Add every configured light. Lights are never changed after this.
pub fn spawn_lights(commands: &mut Commands, registry: &mut SceneRegistry, lights: &[LightSpec]) {
    for light in lights {
        match *light {
            LightSpec::Point {
                colour,
                intensity,
                range,
                position,
            } => {
                registry.add(
                    commands,
                    (
                        PointLight {
                            color: colour.into(),
                            intensity,
                            range,
                            shadows_enabled: false,
                            ..default()
                        },
                        Transform::from_translation(position),
                        SceneLight,
                    ),
                );
            }
            // The ambient term is a single world-wide setting; the last one wins.
            LightSpec::Ambient { colour, brightness } => {
                commands.insert_resource(AmbientLight {
                    color: colour.into(),
                    brightness,
                    ..default()
                });
                registry.record();
            }
        }
    }
}
