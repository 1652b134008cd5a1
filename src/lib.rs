//! LCD Runner library.
//!
//! A two-row character LCD animation: a little runner crosses a 16×2 grid of
//! 5×8 glyph cells, jumps over a static obstacle and starts again, one step
//! per display refresh. This crate exposes the resources, systems and events
//! behind it for use by the binary and the integration tests.

pub mod events;
pub mod resources;
pub mod systems;
