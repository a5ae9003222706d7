use std::sync::{Arc, Mutex};

use bevy::prelude::*;

use crate::engine::camera::scroll_camera::{
    LatestScrollOffset, ScrollOffsetChanged, track_scroll_offset,
};

#[cfg(target_arch = "wasm32")]
use crate::engine::systems::frame_loop::FrameLoopHandle;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Scroll offsets pushed by page callbacks, waiting for the next frame.
#[derive(Resource, Clone, Default)]
pub struct PageScrollQueue(Arc<Mutex<Vec<f32>>>);

impl PageScrollQueue {
    pub fn push(&self, offset: f32) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(offset);
        }
    }

    fn take(&self) -> Vec<f32> {
        self.0
            .lock()
            .map(|mut queue| std::mem::take(&mut *queue))
            .unwrap_or_default()
    }
}

/// Systems turning page or window input into scroll events.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageInput;

/// Plugin wiring the host page into the app: scroll events and teardown in the
/// browser, mouse-wheel scrolling in native windows.
pub struct PagePlugin;

impl Plugin for PagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PageScrollQueue>()
            .init_resource::<LatestScrollOffset>()
            .add_event::<ScrollOffsetChanged>()
            .add_systems(Update, drain_page_scroll.in_set(PageInput))
            .add_systems(Update, track_scroll_offset.after(PageInput));

        #[cfg(target_arch = "wasm32")]
        app.add_systems(Startup, register_page_listeners);

        #[cfg(not(target_arch = "wasm32"))]
        {
            use crate::engine::systems::native_scroll::{NativeScroll, wheel_to_scroll_offset};
            app.init_resource::<NativeScroll>()
                .add_systems(Update, wheel_to_scroll_offset.in_set(PageInput));
        }
    }
}

/// Forward queued offsets in the order the page produced them.
pub fn drain_page_scroll(
    queue: Res<PageScrollQueue>,
    mut scroll_events: EventWriter<ScrollOffsetChanged>,
) {
    for offset in queue.take() {
        scroll_events.write(ScrollOffsetChanged { offset });
    }
}

/// Current top edge of the document body relative to the viewport.
#[cfg(target_arch = "wasm32")]
fn document_top() -> Option<f32> {
    let body = web_sys::window()?.document()?.body()?;
    Some(body.get_bounding_client_rect().top() as f32)
}

#[cfg(target_arch = "wasm32")]
fn register_page_listeners(queue: Res<PageScrollQueue>, handle: Res<FrameLoopHandle>) {
    let Some(window) = web_sys::window() else {
        warn!("No browser window: page scroll and teardown are not observed");
        return;
    };

    // A restored scroll position produces no event of its own.
    if let Some(top) = document_top() {
        queue.push(top);
    }

    let scroll_queue = queue.clone();
    let on_scroll = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        if let Some(top) = document_top() {
            scroll_queue.push(top);
        }
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Err(err) =
        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
    {
        warn!("Failed to register scroll listener: {err:?}");
    }
    // Ownership passes to the page for its lifetime.
    on_scroll.forget();

    let stop = handle.clone();
    let on_pagehide = Closure::wrap(Box::new(move |_event: web_sys::Event| {
        stop.request_stop();
    }) as Box<dyn FnMut(web_sys::Event)>);

    if let Err(err) =
        window.add_event_listener_with_callback("pagehide", on_pagehide.as_ref().unchecked_ref())
    {
        warn!("Failed to register pagehide listener: {err:?}");
    }
    on_pagehide.forget();

    info!("Page scroll and teardown listeners registered");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queued_offsets_become_ordered_events() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<PageScrollQueue>()
            .add_event::<ScrollOffsetChanged>()
            .add_systems(Update, drain_page_scroll);

        let queue = app.world().resource::<PageScrollQueue>().clone();
        queue.push(-120.0);
        queue.push(-240.0);
        app.update();

        let offsets: Vec<f32> = app
            .world_mut()
            .resource_mut::<Events<ScrollOffsetChanged>>()
            .drain()
            .map(|event| event.offset)
            .collect();
        assert_eq!(offsets, [-120.0, -240.0]);

        app.update();
        assert!(
            app.world()
                .resource::<Events<ScrollOffsetChanged>>()
                .is_empty()
        );
    }
}
