use bevy::prelude::*;

/// Marker for every object the bootstrapper adds to the scene.
#[derive(Component)]
pub struct SceneObject;

/// Count of objects added to the scene. The scene only grows: there is no removal.
#[derive(Resource, Debug, Default)]
pub struct SceneRegistry {
    added: usize,
}

impl SceneRegistry {
    pub fn len(&self) -> usize {
        self.added
    }

    pub fn is_empty(&self) -> bool {
        self.added == 0
    }

    /// Record an object that is not an entity, such as the ambient light.
    pub fn record(&mut self) {
        self.added += 1;
    }

    /// Spawn `bundle` as a scene object and record it.
    pub fn add(&mut self, commands: &mut Commands, bundle: impl Bundle) -> Entity {
        self.record();
        commands.spawn((bundle, SceneObject)).id()
    }
}
