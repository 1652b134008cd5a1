//! Render target resource.
//!
//! GPU texture at the pixel surface resolution. The presentation system
//! copies the surface into it every refresh and then scales it into the
//! window with nearest-neighbor filtering, so LCD pixels stay square.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Render texture sized to the pixel surface.
///
/// # Note
/// This is a NonSend resource because `RenderTexture2D` contains GPU resources
/// that must be accessed from the main thread.
pub struct RenderTarget {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    /// Texture width in pixels.
    pub width: u32,
    /// Texture height in pixels.
    pub height: u32,
}

impl RenderTarget {
    /// Create a new render target of the given size.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        let target = Self {
            texture,
            width,
            height,
        };
        target.apply_point_filter();

        Ok(target)
    }

    /// Nearest-neighbor filtering; the LCD look depends on hard pixel edges.
    fn apply_point_filter(&self) {
        unsafe {
            ffi::SetTextureFilter(
                self.texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }
    }

    /// Recreate the render texture at a new resolution.
    pub fn recreate(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<(), String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to recreate render texture: {}", e))?;

        self.texture = texture;
        self.width = width;
        self.height = height;
        self.apply_point_filter();

        Ok(())
    }

    /// Get the source rectangle for drawing this texture.
    ///
    /// Returns a rectangle with negative height to flip the Y axis,
    /// compensating for OpenGL's inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.width as f32,
            height: -(self.height as f32), // Negative to flip Y
        }
    }
}
