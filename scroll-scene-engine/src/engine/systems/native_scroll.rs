use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;

use crate::engine::camera::scroll_camera::ScrollOffsetChanged;

/// Virtual document position for native windows, which have no page to scroll.
#[derive(Resource, Debug, Clone, Copy)]
pub struct NativeScroll {
    /// Same convention as the page: zero at the top, negative further down.
    pub offset: f32,
    pub max_offset: f32,
    pub pixels_per_line: f32,
}

impl Default for NativeScroll {
    fn default() -> Self {
        Self {
            offset: 0.0,
            max_offset: constants::scroll::NATIVE_MAX_SCROLL_OFFSET,
            pixels_per_line: constants::scroll::NATIVE_PIXELS_PER_LINE,
        }
    }
}

impl NativeScroll {
    /// Scroll by one wheel event. Wheel up (positive `y`) moves towards the top.
    /// Returns the new offset, or `None` when already pinned at that end.
    pub fn scroll(&mut self, wheel: &MouseWheel) -> Option<f32> {
        let pixels = match wheel.unit {
            MouseScrollUnit::Line => wheel.y * self.pixels_per_line,
            MouseScrollUnit::Pixel => wheel.y,
        };
        let next = (self.offset + pixels).clamp(-self.max_offset, 0.0);
        if next == self.offset {
            return None;
        }
        self.offset = next;
        Some(next)
    }
}

/// Turn every wheel event into a scroll offset event.
pub fn wheel_to_scroll_offset(
    mut wheel_events: EventReader<MouseWheel>,
    mut scroll: ResMut<NativeScroll>,
    mut offsets: EventWriter<ScrollOffsetChanged>,
) {
    for wheel in wheel_events.read() {
        if let Some(offset) = scroll.scroll(wheel) {
            offsets.write(ScrollOffsetChanged { offset });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wheel(unit: MouseScrollUnit, y: f32) -> MouseWheel {
        MouseWheel {
            unit,
            x: 0.0,
            y,
            window: Entity::PLACEHOLDER,
        }
    }

    #[test]
    fn wheel_down_scrolls_into_negative_offsets() {
        let mut scroll = NativeScroll::default();
        assert_eq!(scroll.scroll(&wheel(MouseScrollUnit::Line, -3.0)), Some(-120.0));
        assert_eq!(scroll.scroll(&wheel(MouseScrollUnit::Pixel, -30.0)), Some(-150.0));
        assert_eq!(scroll.scroll(&wheel(MouseScrollUnit::Pixel, 50.0)), Some(-100.0));
    }

    #[test]
    fn offset_is_clamped_to_the_page() {
        let mut scroll = NativeScroll {
            max_offset: 100.0,
            ..default()
        };
        assert_eq!(scroll.scroll(&wheel(MouseScrollUnit::Line, 1.0)), None);
        assert_eq!(scroll.scroll(&wheel(MouseScrollUnit::Pixel, -500.0)), Some(-100.0));
        assert_eq!(scroll.scroll(&wheel(MouseScrollUnit::Pixel, -1.0)), None);
    }

    #[test]
    fn wheel_events_become_offset_events() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_event::<MouseWheel>()
            .add_event::<ScrollOffsetChanged>()
            .init_resource::<NativeScroll>()
            .add_systems(Update, wheel_to_scroll_offset);

        app.world_mut().send_event(wheel(MouseScrollUnit::Pixel, -250.0));
        app.world_mut().send_event(wheel(MouseScrollUnit::Pixel, -250.0));
        app.update();

        let offsets: Vec<f32> = app
            .world_mut()
            .resource_mut::<Events<ScrollOffsetChanged>>()
            .drain()
            .map(|event| event.offset)
            .collect();
        assert_eq!(offsets, [-250.0, -500.0]);
    }
}
