use crate::engine::core::errors::InitError;
use crate::engine::loading::manifest_loader::SceneSelection;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};

/// What the host page offers the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSurface {
    pub scene: SceneSelection,
}

/// Find the canvas and a graphics context before building the app.
#[cfg(target_arch = "wasm32")]
pub fn preflight() -> Result<PageSurface, InitError> {
    use constants::path::{CANVAS_SCENE_ATTRIBUTE, CANVAS_SELECTOR};
    use web_sys::HtmlCanvasElement;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| InitError::MissingSurface(String::from(CANVAS_SELECTOR)))?;

    let element = document
        .query_selector(CANVAS_SELECTOR)
        .ok()
        .flatten()
        .ok_or_else(|| InitError::MissingSurface(String::from(CANVAS_SELECTOR)))?;
    let canvas = element
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|element| InitError::InvalidSurface {
            selector: String::from(CANVAS_SELECTOR),
            reason: format!("<{}> is not a canvas", element.tag_name().to_lowercase()),
        })?;

    probe_graphics(&document)?;

    Ok(PageSurface {
        scene: SceneSelection::from_name(canvas.get_attribute(CANVAS_SCENE_ATTRIBUTE)),
    })
}

/// Native windows are created by the engine; the scene comes from the environment.
#[cfg(not(target_arch = "wasm32"))]
pub fn preflight() -> Result<PageSurface, InitError> {
    Ok(PageSurface {
        scene: SceneSelection::from_name(std::env::var(constants::path::SCENE_ENV_VAR).ok()),
    })
}

/// Ask a scratch canvas for WebGL2, then check for WebGPU.
#[cfg(target_arch = "wasm32")]
fn probe_graphics(document: &web_sys::Document) -> Result<(), InitError> {
    let scratch = document
        .create_element("canvas")
        .ok()
        .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok());

    let webgl2 = scratch
        .and_then(|canvas| canvas.get_context("webgl2").ok().flatten())
        .is_some();
    if webgl2 {
        return Ok(());
    }

    let webgpu = web_sys::window()
        .map(|window| window.navigator())
        .and_then(|navigator| js_sys::Reflect::has(&navigator, &JsValue::from_str("gpu")).ok())
        .unwrap_or(false);
    if webgpu {
        return Ok(());
    }

    Err(InitError::GraphicsUnavailable(String::from(
        "neither WebGL2 nor WebGPU is available",
    )))
}

/// The app does not exist yet, so failures go straight to the console.
pub fn report_preflight_failure(err: &InitError) {
    let message = format!("Initialisation failed: {err}");

    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from_str(&message));

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{message}");
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_preflight_always_offers_a_surface() {
        let surface = preflight();
        assert!(surface.is_ok_and(|surface| !surface.scene.0.is_empty()));
    }
}
