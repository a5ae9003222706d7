/// Manifest loaded when no scene is selected
pub const DEFAULT_SCENE: &str = "space";

/// Scene manifests live at `scenes/<name>.scene.json` under the asset root
pub const SCENE_MANIFEST_DIR: &str = "scenes";
pub const SCENE_MANIFEST_EXTENSION: &str = "scene.json";

/// Native override for the scene selection
pub const SCENE_ENV_VAR: &str = "SCROLL_SCENE";

/// Canvas the renderer binds to in the browser
pub const CANVAS_SELECTOR: &str = "#bg";

/// Canvas attribute naming the scene manifest in the browser
pub const CANVAS_SCENE_ATTRIBUTE: &str = "data-scene";

pub const SPACE_BACKGROUND_TEXTURE: &str = "textures/space.jpg";
pub const MOON_TEXTURE: &str = "textures/moon.jpg";
pub const MOON_NORMAL_MAP: &str = "textures/normal.jpg";
pub const AVATAR_TEXTURE: &str = "textures/avatar.png";
