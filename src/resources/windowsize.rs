//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels, which differ from the pixel
//! surface resolution. Updated each frame to handle window resizing.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Current window size in pixels.
///
/// Used to fit the fixed-resolution surface into the window with
/// letterboxing/pillarboxing.
#[derive(Resource, Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Calculate the destination rectangle for letterboxed rendering.
    ///
    /// Given the surface resolution, returns a rectangle that:
    /// - Preserves the surface aspect ratio
    /// - Fits within the window bounds
    /// - Centers the content (letterbox/pillarbox as needed)
    pub fn calculate_letterbox(&self, surface_width: u32, surface_height: u32) -> Rectangle {
        let surface_w = surface_width as f32;
        let surface_h = surface_height as f32;
        let window_w = self.w as f32;
        let window_h = self.h as f32;

        let surface_aspect = surface_w / surface_h;
        let window_aspect = window_w / window_h;

        if window_aspect > surface_aspect {
            // Window is wider - pillarbox (bars on the sides)
            let scale = window_h / surface_h;
            let scaled_w = surface_w * scale;
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            // Window is taller - letterbox (bars top and bottom)
            let scale = window_w / surface_w;
            let scaled_h = surface_h * scale;
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }
}
