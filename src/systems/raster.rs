//! Glyph rasterizer.
//!
//! Blits 5×8 glyphs into a [`Surface`], one `scale`×`scale` block per lit
//! glyph pixel. Unlit pixels are left alone; callers clear the surface before
//! composing a frame.

use crate::resources::lcdgeometry::Cell;
use crate::resources::pixelsurface::Surface;
use crate::resources::spritecatalog::{GLYPH_HEIGHT, GLYPH_WIDTH, Glyph, SpriteCatalog, pixel_lit};
use crate::systems::animation::{HEAD_PIXEL, Placement};

/// Draw `glyph` into `cell`.
///
/// The block for glyph pixel `(col, row)` has its top-left corner at
/// `(cell.col * 5 * scale + col * scale, cell.row * 8 * scale + row * scale)`.
pub fn draw_glyph<S: Surface + ?Sized>(surface: &mut S, glyph: &Glyph, cell: Cell, scale: u32) {
    for row in 0..GLYPH_HEIGHT {
        for col in 0..GLYPH_WIDTH {
            if pixel_lit(glyph, col, row) {
                draw_pixel_block(surface, cell, col, row, scale);
            }
        }
    }
}

/// Draw the single block for glyph pixel `(col, row)` of `cell`.
pub fn draw_pixel_block<S: Surface + ?Sized>(
    surface: &mut S,
    cell: Cell,
    col: u32,
    row: u32,
    scale: u32,
) {
    let x = cell.col * GLYPH_WIDTH * scale + col * scale;
    let y = cell.row * GLYPH_HEIGHT * scale + row * scale;
    surface.fill_rect(x, y, scale, scale);
}

/// Draw one resolved placement.
pub fn draw_placement<S: Surface + ?Sized>(
    surface: &mut S,
    catalog: &SpriteCatalog,
    placement: &Placement,
    scale: u32,
) {
    match *placement {
        Placement::Glyph { sprite, cell } => draw_glyph(surface, catalog.glyph(sprite), cell, scale),
        Placement::HeadDot { cell } => {
            draw_pixel_block(surface, cell, HEAD_PIXEL.0, HEAD_PIXEL.1, scale)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::lcdgeometry::LcdGeometry;
    use crate::resources::pixelsurface::PixelSurface;
    use crate::resources::spritecatalog::SpriteId;

    /// Records fills instead of painting them.
    #[derive(Default)]
    struct Recorder {
        fills: Vec<(u32, u32, u32, u32)>,
        clears: usize,
    }

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32) {
            self.fills.push((x, y, w, h));
        }
    }

    fn cell(col: i32, row: i32) -> Cell {
        LcdGeometry::default().cell(col, row).unwrap()
    }

    #[test]
    fn test_single_row_lights_two_adjacent_blocks() {
        let mut glyph: Glyph = [0; 8];
        glyph[0] = 0b01100;
        let mut rec = Recorder::default();
        draw_glyph(&mut rec, &glyph, cell(0, 0), 4);
        // MSB is column 0, so the lit pixels are columns 1 and 2.
        assert_eq!(rec.fills, vec![(4, 0, 4, 4), (8, 0, 4, 4)]);
    }

    #[test]
    fn test_block_origin_includes_cell_offset() {
        let mut glyph: Glyph = [0; 8];
        glyph[3] = 0b00001;
        let mut rec = Recorder::default();
        draw_glyph(&mut rec, &glyph, cell(2, 1), 4);
        // x = 2*5*4 + 4*4 = 56, y = 1*8*4 + 3*4 = 44
        assert_eq!(rec.fills, vec![(56, 44, 4, 4)]);
    }

    #[test]
    fn test_unset_bits_and_clear_are_untouched() {
        let mut rec = Recorder::default();
        draw_glyph(&mut rec, &[0; 8], cell(5, 1), 4);
        assert!(rec.fills.is_empty());
        assert_eq!(rec.clears, 0);
    }

    #[test]
    fn test_full_glyph_fills_whole_cell() {
        let catalog = SpriteCatalog::new();
        let mut surface = PixelSurface::new(320, 64);
        draw_glyph(&mut surface, catalog.glyph(SpriteId::Ground), cell(8, 1), 4);
        assert_eq!(surface.lit_count(), 20 * 32);
        assert!(surface.get(160, 32) && surface.get(179, 63));
        assert!(!surface.get(159, 32) && !surface.get(180, 32) && !surface.get(160, 31));
    }

    #[test]
    fn test_glyph_drawing_is_reproducible() {
        let catalog = SpriteCatalog::new();
        let draw = || {
            let mut surface = PixelSurface::new(320, 64);
            draw_glyph(&mut surface, catalog.glyph(SpriteId::Run1), cell(3, 1), 4);
            surface
        };
        assert_eq!(draw(), draw());
    }

    #[test]
    fn test_lit_count_matches_bit_count() {
        let catalog = SpriteCatalog::new();
        for id in SpriteId::ALL {
            let glyph = catalog.glyph(id);
            let bits: u32 = glyph.iter().map(|row| row.count_ones()).sum();
            let mut surface = PixelSurface::new(320, 64);
            draw_glyph(&mut surface, glyph, cell(0, 0), 4);
            assert_eq!(surface.lit_count() as u32, bits * 16, "{}", id.name());
        }
    }

    #[test]
    fn test_head_dot_is_one_block() {
        let catalog = SpriteCatalog::new();
        let mut rec = Recorder::default();
        draw_placement(&mut rec, &catalog, &Placement::HeadDot { cell: cell(1, 0) }, 4);
        // x = 1*20 + 2*4, y = 0 + 3*4
        assert_eq!(rec.fills, vec![(28, 12, 4, 4)]);
    }

    #[test]
    fn test_scale_one() {
        let mut glyph: Glyph = [0; 8];
        glyph[7] = 0b10000;
        let mut surface = PixelSurface::new(80, 16);
        draw_glyph(&mut surface, &glyph, cell(15, 1), 1);
        assert_eq!(surface.lit_count(), 1);
        assert!(surface.get(75, 15));
    }
}
