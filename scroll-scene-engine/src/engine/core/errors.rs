use thiserror::Error;

/// Failures that can stop the scene from coming up.
///
/// Surface and graphics failures are fatal. Asset failures are reported through
/// the same type but the callers degrade instead of exiting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InitError {
    #[error("output surface `{0}` not found")]
    MissingSurface(String),

    #[error("output surface `{selector}` is unusable: {reason}")]
    InvalidSurface { selector: String, reason: String },

    /// Only the browser preflight can detect this; native adapters are picked by the renderer.
    #[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
    #[error("graphics context unavailable: {0}")]
    GraphicsUnavailable(String),

    #[error("failed to load asset `{path}`: {reason}")]
    AssetLoad { path: String, reason: String },

    #[error("invalid scene manifest: {0}")]
    InvalidManifest(String),
}

impl InitError {
    /// Whether the app has to exit when this error surfaces.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, InitError::AssetLoad { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_asset_failures_degrade() {
        assert!(InitError::MissingSurface("#bg".into()).is_fatal());
        assert!(InitError::GraphicsUnavailable("no webgl2".into()).is_fatal());
        assert!(InitError::InvalidManifest("bad colour".into()).is_fatal());
        assert!(
            !InitError::AssetLoad {
                path: "textures/moon.jpg".into(),
                reason: "404".into(),
            }
            .is_fatal()
        );
    }

    #[test]
    fn messages_name_the_surface() {
        let err = InitError::InvalidSurface {
            selector: "#bg".into(),
            reason: "not a canvas".into(),
        };
        assert_eq!(err.to_string(), "output surface `#bg` is unusable: not a canvas");
    }
}
