//! Pixel surface resource.
//!
//! The monochrome framebuffer the scene is composed into. Drawing code only
//! needs the two operations of [`Surface`]; [`PixelSurface`] is the in-memory
//! implementation that the presentation system uploads to the window.

use bevy_ecs::prelude::Resource;

use crate::resources::lcdgeometry::LcdGeometry;

/// Minimal drawing target: solid rectangle fills on a cleared background.
pub trait Surface {
    /// Reset every pixel to background.
    fn clear(&mut self);
    /// Set the `w`×`h` block with top-left `(x, y)` to foreground.
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32);
}

/// Binary framebuffer, row-major, `true` = foreground.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<bool>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![false; (width * height) as usize],
        }
    }

    /// Surface sized for `geometry`.
    pub fn for_geometry(geometry: &LcdGeometry) -> Self {
        Self::new(geometry.surface_width(), geometry.surface_height())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.pixels[(y * self.width + x) as usize]
    }

    /// Number of foreground pixels.
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|&&p| p).count()
    }

    /// Iterate the pixel rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.pixels.chunks(self.width.max(1) as usize)
    }

    /// Text rendering sampled every `step` pixels, one line per sampled row.
    pub fn to_text(&self, step: u32, on: char, off: char) -> String {
        let step = step.max(1);
        let mut out = String::new();
        for y in (0..self.height).step_by(step as usize) {
            for x in (0..self.width).step_by(step as usize) {
                out.push(if self.get(x, y) { on } else { off });
            }
            out.push('\n');
        }
        out
    }
}

impl Surface for PixelSurface {
    fn clear(&mut self) {
        self.pixels.fill(false);
    }

    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32) {
        debug_assert!(
            x + w <= self.width && y + h <= self.height,
            "fill_rect ({x}, {y}, {w}, {h}) outside {}x{} surface",
            self.width,
            self.height
        );
        let x_end = (x + w).min(self.width);
        let y_end = (y + h).min(self.height);
        for py in y..y_end {
            let start = (py * self.width + x) as usize;
            let end = (py * self.width + x_end) as usize;
            if start < end {
                self.pixels[start..end].fill(true);
            }
        }
    }
}
