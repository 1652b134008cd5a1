//! Scene composition.
//!
//! One redraw of the LCD: clear, draw the obstacle, resolve the hero for the
//! current frame and rasterize it. [`compose_frame`] does the drawing against
//! any [`Surface`]; [`compose_scene`] is the ECS system wrapping it for the
//! tick schedule.

use bevy_ecs::prelude::*;

use crate::resources::frameclock::FrameClock;
use crate::resources::lastresolution::LastResolution;
use crate::resources::lcdgeometry::LcdGeometry;
use crate::resources::pixelsurface::{PixelSurface, Surface};
use crate::resources::spritecatalog::{SpriteCatalog, SpriteId};
use crate::resources::timeline::AnimationTimeline;
use crate::systems::animation::{Resolution, resolve};
use crate::systems::raster::{draw_glyph, draw_placement};

/// Sprite of the static obstacle.
pub const OBSTACLE_SPRITE: SpriteId = SpriteId::Ground;
/// Cell of the static obstacle, `(col, row)`.
pub const OBSTACLE_CELL: (i32, i32) = (8, 1);

/// Draw the complete scene for `frame` into `surface`.
///
/// The obstacle is drawn on every frame. The hero is drawn only when its
/// column is on the grid. Returns the resolution that was drawn.
pub fn compose_frame<S: Surface + ?Sized>(
    surface: &mut S,
    catalog: &SpriteCatalog,
    geometry: &LcdGeometry,
    timeline: &AnimationTimeline,
    frame: u32,
) -> Resolution {
    surface.clear();

    if let Some(cell) = geometry.cell(OBSTACLE_CELL.0, OBSTACLE_CELL.1) {
        draw_glyph(surface, catalog.glyph(OBSTACLE_SPRITE), cell, geometry.scale);
    }

    let resolution = resolve(frame, timeline, geometry);
    for placement in &resolution.placements {
        draw_placement(surface, catalog, placement, geometry.scale);
    }
    resolution
}

/// Render `frame` into a fresh surface sized for `geometry`.
///
/// Used by tooling that needs a frame without running the tick schedule.
pub fn render_frame(geometry: &LcdGeometry, frame: u32) -> (PixelSurface, Resolution) {
    let mut surface = PixelSurface::for_geometry(geometry);
    let resolution = compose_frame(
        &mut surface,
        &SpriteCatalog::new(),
        geometry,
        &AnimationTimeline::default(),
        frame,
    );
    (surface, resolution)
}

/// Compose the frame the clock currently holds into the [`PixelSurface`].
///
/// Does nothing when the surface is missing; the tick run condition normally
/// keeps the system from running at all in that case.
pub fn compose_scene(
    maybe_surface: Option<ResMut<PixelSurface>>,
    clock: Res<FrameClock>,
    catalog: Res<SpriteCatalog>,
    geometry: Res<LcdGeometry>,
    timeline: Res<AnimationTimeline>,
    mut last: ResMut<LastResolution>,
) {
    let Some(mut surface) = maybe_surface else {
        return;
    };
    let resolution = compose_frame(
        &mut *surface,
        &catalog,
        &geometry,
        &timeline,
        clock.frame(),
    );
    last.0 = Some(resolution);
}
