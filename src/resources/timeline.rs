//! Animation timeline resource.
//!
//! Frame-count constants of the run/jump cycle. The jump window is hand
//! placed near the start of the sweep and lasts exactly eight phases.

use bevy_ecs::prelude::Resource;

/// Timing of one full animation cycle, in ticks.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationTimeline {
    /// Last frame index of the cycle; the counter spans `0..=total_frames`.
    pub total_frames: u32,
    /// First frame of the jump (inclusive).
    pub jump_start: u32,
    /// Last frame of the jump (inclusive).
    pub jump_end: u32,
    /// Ticks spent in each of the eight jump phases.
    pub frames_per_phase: u32,
    /// Ticks between run glyph swaps.
    pub run_swap_frames: u32,
}

impl AnimationTimeline {
    pub const REFERENCE: AnimationTimeline = AnimationTimeline {
        total_frames: 320,
        jump_start: 31,
        jump_end: 54,
        frames_per_phase: 3,
        run_swap_frames: 20,
    };

    /// Whether `frame` falls inside the jump window.
    pub fn in_jump(&self, frame: u32) -> bool {
        (self.jump_start..=self.jump_end).contains(&frame)
    }
}

impl Default for AnimationTimeline {
    fn default() -> Self {
        Self::REFERENCE
    }
}
