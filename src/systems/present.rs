//! Presentation system.
//!
//! Copies the [`PixelSurface`] into the [`RenderTarget`] texture and scales the
//! texture into the window, letterboxed to keep the LCD aspect ratio. Runs on
//! every display refresh whether or not a tick happened, so the window always
//! shows the most recently composed frame.
//!
//! With [`DebugMode`] present a text overlay shows the frame, pose and column
//! of the last composed frame.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::debugmode::DebugMode;
use crate::resources::frameclock::FrameClock;
use crate::resources::lastresolution::LastResolution;
use crate::resources::palette::{Palette, Rgb};
use crate::resources::pixelsurface::PixelSurface;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::windowsize::WindowSize;

fn to_color(rgb: Rgb) -> Color {
    Color::new(rgb.r, rgb.g, rgb.b, 255)
}

/// Horizontal runs of lit pixels in one surface row as `(start, len)`.
pub fn lit_runs(row: &[bool]) -> impl Iterator<Item = (u32, u32)> + '_ {
    let mut x = 0usize;
    std::iter::from_fn(move || {
        while x < row.len() && !row[x] {
            x += 1;
        }
        if x >= row.len() {
            return None;
        }
        let start = x;
        while x < row.len() && row[x] {
            x += 1;
        }
        Some((start as u32, (x - start) as u32))
    })
}

/// Present the pixel surface in the window.
#[allow(clippy::too_many_arguments)]
pub fn present_surface(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    surface: Option<Res<PixelSurface>>,
    palette: Res<Palette>,
    window: Res<WindowSize>,
    debug: Option<Res<DebugMode>>,
    last: Res<LastResolution>,
    clock: Option<Res<FrameClock>>,
) {
    let foreground = to_color(palette.foreground);
    let background = to_color(palette.background);
    let (target_w, target_h) = (target.width, target.height);
    let source = target.source_rect();

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);

    {
        let mut t = d.begin_texture_mode(&th, &mut target.texture);
        t.clear_background(background);
        if let Some(surface) = surface.as_deref() {
            for (y, row) in surface.rows().enumerate() {
                for (x, len) in lit_runs(row) {
                    t.draw_rectangle(x as i32, y as i32, len as i32, 1, foreground);
                }
            }
        }
    }

    let dest = window.calculate_letterbox(target_w, target_h);
    d.draw_texture_pro(
        target.texture.texture(),
        source,
        dest,
        Vector2 { x: 0.0, y: 0.0 },
        0.0,
        Color::WHITE,
    );

    if debug.is_some() {
        let fps = d.get_fps();
        d.draw_text(
            &format!("DEBUG MODE (F11 to toggle) | FPS: {}", fps),
            10,
            10,
            10,
            Color::YELLOW,
        );
        let pose = match &last.0 {
            Some(r) => format!(
                "Drawn frame: {} | State: {:?} | Column: {}",
                r.frame, r.state, r.hero_column
            ),
            None => "Drawn frame: none".to_string(),
        };
        d.draw_text(&pose, 10, 24, 10, Color::YELLOW);
        if let Some(clock) = clock {
            let text = format!(
                "Clock: {}/{} | Ticks: {}",
                clock.frame(),
                clock.total_frames(),
                clock.ticks()
            );
            d.draw_text(&text, 10, 38, 10, Color::YELLOW);
        }
    }
}
