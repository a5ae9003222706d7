use bevy::prelude::*;

#[derive(Resource, Debug, Default)]
pub struct LoadingProgress {
    pub manifest_resolved: bool,
    pub textures_requested: usize,
    pub textures_loaded: usize,
    pub textures_failed: usize,
}

impl LoadingProgress {
    /// Every requested texture has either loaded or failed.
    pub fn textures_settled(&self) -> bool {
        self.textures_loaded + self.textures_failed >= self.textures_requested
    }
}
