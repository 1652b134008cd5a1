//! LCD Runner systems.
//!
//! Functions that compute and draw frames, plus the ECS systems that drive
//! them once per display refresh.
//!
//! Submodules overview
//! - [`animation`] – frame index to hero column, pose and cell placements
//! - [`appconfig`] – push [`crate::resources::appconfig::AppConfig`] changes to the scene and window
//! - [`compose`] – clear, draw the obstacle and the hero for one frame
//! - [`frameclock`] – the tick chain, its run conditions, start and teardown
//! - [`input`] – toggle the debug overlay from the keyboard
//! - [`present`] – copy the pixel surface to the window using Raylib
//! - [`raster`] – blit glyph bitmaps into a surface at a given scale

pub mod animation;
pub mod appconfig;
pub mod compose;
pub mod frameclock;
pub mod input;
pub mod present;
pub mod raster;
