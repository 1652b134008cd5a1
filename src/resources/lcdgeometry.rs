//! LCD geometry resource.
//!
//! Describes the character grid being emulated (columns × rows of 5×8 cells)
//! and the integer scale used to blow each LCD pixel up into a square block
//! of surface pixels. The pixel surface size is derived from it.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

use crate::resources::spritecatalog::{GLYPH_HEIGHT, GLYPH_WIDTH};

pub const DEFAULT_COLS: u32 = 16;
pub const DEFAULT_ROWS: u32 = 2;
pub const DEFAULT_SCALE: u32 = 4;

/// Address of one glyph slot in the grid. Build cells with
/// [`LcdGeometry::cell`], which rejects positions off the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub col: u32,
    pub row: u32,
}

/// Grid and scale of the emulated display.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcdGeometry {
    pub cols: u32,
    pub rows: u32,
    pub cell_width: u32,
    pub cell_height: u32,
    pub scale: u32,
}

impl Default for LcdGeometry {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            cell_width: GLYPH_WIDTH,
            cell_height: GLYPH_HEIGHT,
            scale: DEFAULT_SCALE,
        }
    }
}

impl LcdGeometry {
    pub fn with_scale(scale: u32) -> Self {
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Validated cell address, `None` when `(col, row)` is off the grid.
    pub fn cell(&self, col: i32, row: i32) -> Option<Cell> {
        let col = u32::try_from(col).ok()?;
        let row = u32::try_from(row).ok()?;
        (col < self.cols && row < self.rows).then_some(Cell { col, row })
    }

    /// Surface width in pixels.
    pub fn surface_width(&self) -> u32 {
        self.cols * self.cell_width * self.scale
    }

    /// Surface height in pixels.
    pub fn surface_height(&self) -> u32 {
        self.rows * self.cell_height * self.scale
    }

    /// Top-left surface pixel of `cell`.
    pub fn cell_origin(&self, cell: Cell) -> (u32, u32) {
        (
            cell.col * self.cell_width * self.scale,
            cell.row * self.cell_height * self.scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_surface_is_320_by_64() {
        let g = LcdGeometry::default();
        assert_eq!((g.surface_width(), g.surface_height()), (320, 64));
    }

    #[test]
    fn test_cell_rejects_off_grid() {
        let g = LcdGeometry::default();
        assert_eq!(g.cell(-1, 1), None);
        assert_eq!(g.cell(16, 1), None);
        assert_eq!(g.cell(0, 2), None);
        assert_eq!(g.cell(15, 1), Some(Cell { col: 15, row: 1 }));
    }

    #[test]
    fn test_cell_origin_uses_scale() {
        let g = LcdGeometry::with_scale(2);
        let cell = g.cell(3, 1).unwrap();
        assert_eq!(g.cell_origin(cell), (30, 16));
    }
}
