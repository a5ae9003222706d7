//! Host page integration.
//!
//! Checks the drawing surface before the engine starts and forwards page
//! scroll and teardown events into the app.

/// Page scroll queue, teardown listener and native scroll fallback.
pub mod page_events;

/// Drawing surface and graphics context checks run before the app is built.
pub mod surface;
