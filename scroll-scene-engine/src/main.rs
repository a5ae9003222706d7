mod engine;
mod page;

use crate::engine::core::app_setup::create_app;
use crate::page::surface::{preflight, report_preflight_failure};

fn main() {
    let surface = match preflight() {
        Ok(surface) => surface,
        Err(err) => {
            report_preflight_failure(&err);
            #[cfg(not(target_arch = "wasm32"))]
            std::process::exit(1);
            #[cfg(target_arch = "wasm32")]
            return;
        }
    };

    let mut app = create_app(surface.scene);

    #[cfg(target_arch = "wasm32")]
    {
        wasm_bindgen_futures::spawn_local(async move {
            app.run();
        });
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if app.run().is_error() {
            std::process::exit(1);
        }
    }
}
