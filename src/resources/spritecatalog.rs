//! Sprite catalog resource.
//!
//! A closed table of 5×8 bitmap glyphs as used by character LCD modules.
//! Each glyph is eight row bytes; only the low five bits of a row are
//! significant and bit `4 - c` lights pixel column `c` (MSB is the leftmost
//! pixel).
//!
//! Sprites are addressed by [`SpriteId`]. The set is fixed at compile time, so
//! [`SpriteCatalog::glyph`] cannot fail. Name lookups exist for tooling and
//! treat an unknown name as a programming error.

use bevy_ecs::prelude::Resource;
use serde::Serialize;

/// Glyph width in pixels.
pub const GLYPH_WIDTH: u32 = 5;
/// Glyph height in pixels.
pub const GLYPH_HEIGHT: u32 = 8;

/// One 5×8 bitmap, top row first.
pub type Glyph = [u8; GLYPH_HEIGHT as usize];

/// Identifier of a sprite in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SpriteId {
    Run1,
    Run2,
    Jump,
    JumpLower,
    Ground,
    GroundLeft,
    GroundRight,
}

impl SpriteId {
    pub const ALL: [SpriteId; 7] = [
        Self::Run1,
        Self::Run2,
        Self::Jump,
        Self::JumpLower,
        Self::Ground,
        Self::GroundLeft,
        Self::GroundRight,
    ];

    /// Catalog name of the sprite.
    pub fn name(self) -> &'static str {
        match self {
            Self::Run1 => "run1",
            Self::Run2 => "run2",
            Self::Jump => "jump",
            Self::JumpLower => "jumpLower",
            Self::Ground => "ground",
            Self::GroundLeft => "groundLeft",
            Self::GroundRight => "groundRight",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }
}

const RUN1: Glyph = [
    0b01100, 0b01100, 0b00000, 0b01110, 0b11100, 0b01100, 0b11010, 0b10011,
];

const RUN2: Glyph = [
    0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b01100, 0b01100, 0b01110,
];

const JUMP: Glyph = [
    0b01100, 0b01100, 0b00000, 0b11110, 0b01101, 0b11111, 0b10000, 0b00000,
];

// Legs and torso of the jump pose shifted to the top of the cell, drawn in the
// ground row while the head pokes into the row above.
const JUMP_LOWER: Glyph = [
    0b11110, 0b01101, 0b11111, 0b10000, 0b00000, 0b00000, 0b00000, 0b00000,
];

const GROUND: Glyph = [0b11111; 8];
const GROUND_LEFT: Glyph = [0b11000; 8];
const GROUND_RIGHT: Glyph = [0b00011; 8];

/// Immutable sprite table. Insert once at startup.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct SpriteCatalog;

impl SpriteCatalog {
    pub fn new() -> Self {
        SpriteCatalog
    }

    /// Bitmap for `id`.
    pub fn glyph(&self, id: SpriteId) -> &'static Glyph {
        match id {
            SpriteId::Run1 => &RUN1,
            SpriteId::Run2 => &RUN2,
            SpriteId::Jump => &JUMP,
            SpriteId::JumpLower => &JUMP_LOWER,
            SpriteId::Ground => &GROUND,
            SpriteId::GroundLeft => &GROUND_LEFT,
            SpriteId::GroundRight => &GROUND_RIGHT,
        }
    }

    /// Bitmap for a catalog name such as `"jumpLower"`.
    ///
    /// Asking for a name outside the catalog is a bug in the caller; debug
    /// builds panic, release builds get `None`.
    pub fn glyph_named(&self, name: &str) -> Option<&'static Glyph> {
        let id = SpriteId::from_name(name);
        debug_assert!(id.is_some(), "unknown sprite name: {name}");
        id.map(|id| self.glyph(id))
    }
}

/// Whether pixel `(col, row)` of `glyph` is lit.
#[inline]
pub fn pixel_lit(glyph: &Glyph, col: u32, row: u32) -> bool {
    let mask = 1u8 << (GLYPH_WIDTH - 1 - col);
    glyph[row as usize] & mask != 0
}
