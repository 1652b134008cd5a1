//! Configuration change systems.
//!
//! Watch [`AppConfig`] and push its values where they belong:
//! - [`apply_config_to_scene`] updates the LCD scale, the pixel surface and the
//!   palette. It has no window dependency and runs in headless schedules too.
//! - [`apply_config_to_window`] applies frame pacing and vsync to the raylib
//!   window and resizes the render target to the surface.
//!
//! Both run on the first frame (the resource counts as added) and whenever
//! the configuration changes afterwards.

use bevy_ecs::prelude::*;
use log::{debug, error};
use raylib::ffi;

use crate::resources::appconfig::AppConfig;
use crate::resources::lcdgeometry::LcdGeometry;
use crate::resources::palette::Palette;
use crate::resources::pixelsurface::PixelSurface;
use crate::resources::rendertarget::RenderTarget;

/// Apply scale and colors from [`AppConfig`] to the scene resources.
///
/// A scale change replaces the [`PixelSurface`] with a blank one of the new
/// size; the next tick draws into it.
pub fn apply_config_to_scene(
    maybe_config: Option<Res<AppConfig>>,
    mut geometry: ResMut<LcdGeometry>,
    mut palette: ResMut<Palette>,
    surface: Option<Res<PixelSurface>>,
    mut commands: Commands,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !(config.is_changed() || config.is_added()) {
        return;
    }

    if geometry.scale != config.scale {
        debug!("LCD scale {} -> {}", geometry.scale, config.scale);
        geometry.scale = config.scale;
    }

    let needs_surface = surface.is_none_or(|s| {
        s.width() != geometry.surface_width() || s.height() != geometry.surface_height()
    });
    if needs_surface {
        commands.insert_resource(PixelSurface::for_geometry(&geometry));
    }

    let wanted = config.palette();
    if *palette != wanted {
        *palette = wanted;
    }
}

/// Apply frame pacing, vsync and render target size to the window.
///
/// # Resource Dependencies
/// - `AppConfig` (optional) - the configuration to monitor
/// - `LcdGeometry` - target surface size
/// - `RaylibHandle` (non-send, mutable) - for window operations
/// - `RaylibThread` (non-send) - required for render texture recreation
/// - `RenderTarget` (non-send, mutable) - resized to the surface
pub fn apply_config_to_window(
    maybe_config: Option<Res<AppConfig>>,
    geometry: Res<LcdGeometry>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    mut render_target: NonSendMut<RenderTarget>,
) {
    let Some(config) = maybe_config else {
        return;
    };
    if !(config.is_changed() || config.is_added()) {
        return;
    }

    let (width, height) = (geometry.surface_width(), geometry.surface_height());
    if render_target.width != width || render_target.height != height {
        debug!(
            "Resizing render target: {}x{} -> {}x{}",
            render_target.width, render_target.height, width, height
        );
        if let Err(e) = render_target.recreate(&mut rl, &th, width, height) {
            error!("Failed to resize render target: {}", e);
        }
    }

    unsafe {
        if config.vsync {
            ffi::SetWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        } else {
            ffi::ClearWindowState(ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }

    // Ticks follow presented frames, so this is also the animation speed.
    rl.set_target_fps(config.target_fps);

    debug!(
        "Window config applied: vsync={}, target_fps={}",
        config.vsync, config.target_fps
    );
}
