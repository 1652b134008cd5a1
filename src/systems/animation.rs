//! Frame-to-pose resolution for the runner.
//!
//! [`resolve`] maps a frame index to the hero's column, its visual state and
//! the glyph placements that draw it. It is a pure function of the frame and
//! the fixed timeline/geometry, so any frame can be rendered in isolation.
//!
//! # Cycle
//!
//! - The hero sweeps from one column left of the grid to one column past its
//!   right edge over `total_frames`, column rounded half-up.
//! - Outside the jump window it runs in the ground row, swapping between two
//!   run glyphs every `run_swap_frames` of the global counter.
//! - Inside the window eight equal phases take it up through the row above
//!   and back down:
//!
//! | State              | Placement                                     |
//! |--------------------|-----------------------------------------------|
//! | `Jump1`, `Jump8`   | `jump` in the ground row                      |
//! | `Jump2`, `Jump7`   | head block in the upper row + `jumpLower` below |
//! | `Jump3`..`Jump6`   | `jump` in the upper row                       |

use arrayvec::ArrayVec;
use serde::Serialize;

use crate::resources::lcdgeometry::{Cell, LcdGeometry};
use crate::resources::spritecatalog::SpriteId;
use crate::resources::timeline::AnimationTimeline;

/// Row of the grid the hero runs on.
pub const GROUND_ROW: i32 = 1;
/// Row the hero flies through at the top of the jump.
pub const UPPER_ROW: i32 = 0;
/// Pixel inside the upper cell lit as the hero's head while it straddles
/// both rows, as `(col, row)` in glyph pixels.
pub const HEAD_PIXEL: (u32, u32) = (2, 3);

/// Visual state of the hero for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AnimationState {
    Run,
    Jump1,
    Jump2,
    Jump3,
    Jump4,
    Jump5,
    Jump6,
    Jump7,
    Jump8,
}

impl AnimationState {
    const JUMPS: [AnimationState; 8] = [
        Self::Jump1,
        Self::Jump2,
        Self::Jump3,
        Self::Jump4,
        Self::Jump5,
        Self::Jump6,
        Self::Jump7,
        Self::Jump8,
    ];

    /// Jump state for a zero-based phase; phases past the last one clamp to it.
    pub fn from_jump_phase(phase: u32) -> Self {
        Self::JUMPS[(phase as usize).min(Self::JUMPS.len() - 1)]
    }

    pub fn is_jump(self) -> bool {
        self != Self::Run
    }
}

/// One draw needed for the hero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Placement {
    /// A full glyph in `cell`.
    Glyph { sprite: SpriteId, cell: Cell },
    /// A single pixel block at [`HEAD_PIXEL`] inside `cell`.
    HeadDot { cell: Cell },
}

impl Placement {
    pub fn cell(&self) -> Cell {
        match *self {
            Placement::Glyph { cell, .. } | Placement::HeadDot { cell } => cell,
        }
    }
}

/// Everything the composer needs to draw the hero for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resolution {
    pub frame: u32,
    /// May lie outside the grid at the ends of the cycle.
    pub hero_column: i32,
    pub state: AnimationState,
    /// Empty when `hero_column` is off the grid.
    pub placements: ArrayVec<Placement, 2>,
}

/// Hero column for `frame`: `round(-1 + frame / total * (cols + 1))`, halves
/// rounding up.
///
/// Computed in integers as `floor((2 * frame * (cols + 1) - total) / (2 * total))`
/// so the half-way frames land exactly.
pub fn hero_column(frame: u32, timeline: &AnimationTimeline, geometry: &LcdGeometry) -> i32 {
    let total = i64::from(timeline.total_frames.max(1));
    let span = i64::from(geometry.cols) + 1;
    let numerator = 2 * i64::from(frame) * span - total;
    numerator.div_euclid(2 * total) as i32
}

/// Visual state for `frame`.
pub fn animation_state(frame: u32, timeline: &AnimationTimeline) -> AnimationState {
    if !timeline.in_jump(frame) {
        return AnimationState::Run;
    }
    let phase = (frame - timeline.jump_start) / timeline.frames_per_phase.max(1);
    AnimationState::from_jump_phase(phase)
}

/// Run glyph for `frame`; swaps every `run_swap_frames` of the global counter.
pub fn run_sprite(frame: u32, timeline: &AnimationTimeline) -> SpriteId {
    if (frame / timeline.run_swap_frames.max(1)) % 2 == 0 {
        SpriteId::Run1
    } else {
        SpriteId::Run2
    }
}

/// Resolve the hero's pose for `frame`.
pub fn resolve(frame: u32, timeline: &AnimationTimeline, geometry: &LcdGeometry) -> Resolution {
    let hero_column = hero_column(frame, timeline, geometry);
    let state = animation_state(frame, timeline);
    let mut placements = ArrayVec::new();

    let ground = geometry.cell(hero_column, GROUND_ROW);
    let upper = geometry.cell(hero_column, UPPER_ROW);

    if let (Some(ground), Some(upper)) = (ground, upper) {
        match state {
            AnimationState::Run => placements.push(Placement::Glyph {
                sprite: run_sprite(frame, timeline),
                cell: ground,
            }),
            AnimationState::Jump1 | AnimationState::Jump8 => placements.push(Placement::Glyph {
                sprite: SpriteId::Jump,
                cell: ground,
            }),
            AnimationState::Jump2 | AnimationState::Jump7 => {
                placements.push(Placement::HeadDot { cell: upper });
                placements.push(Placement::Glyph {
                    sprite: SpriteId::JumpLower,
                    cell: ground,
                });
            }
            AnimationState::Jump3
            | AnimationState::Jump4
            | AnimationState::Jump5
            | AnimationState::Jump6 => placements.push(Placement::Glyph {
                sprite: SpriteId::Jump,
                cell: upper,
            }),
        }
    }

    Resolution {
        frame,
        hero_column,
        state,
        placements,
    }
}
