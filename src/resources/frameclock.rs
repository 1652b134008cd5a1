//! Frame clock resource.
//!
//! Owns the cyclic frame counter. Only the
//! [`advance_frame_clock`](crate::systems::frameclock::advance_frame_clock)
//! system mutates it; everything else reads [`FrameClock::frame`].

use bevy_ecs::prelude::Resource;

use crate::resources::timeline::AnimationTimeline;

/// Cyclic counter over `0..=total_frames`.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameClock {
    frame: u32,
    total_frames: u32,
    /// Ticks completed since the clock was created, never wraps back.
    ticks: u64,
}

impl FrameClock {
    pub fn new(total_frames: u32) -> Self {
        Self {
            frame: 0,
            total_frames,
            ticks: 0,
        }
    }

    pub fn for_timeline(timeline: &AnimationTimeline) -> Self {
        Self::new(timeline.total_frames)
    }

    /// Clock positioned at `frame`, wrapped into range.
    pub fn starting_at(total_frames: u32, frame: u32) -> Self {
        Self {
            frame: frame % (total_frames + 1),
            ..Self::new(total_frames)
        }
    }

    pub fn frame(&self) -> u32 {
        self.frame
    }

    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Step to the next frame and return it.
    pub fn advance(&mut self) -> u32 {
        self.frame = next_frame(self.frame, self.total_frames);
        self.ticks += 1;
        self.frame
    }
}

/// Successor of `frame` in a cycle of `total_frames + 1` frames.
pub fn next_frame(frame: u32, total_frames: u32) -> u32 {
    (frame + 1) % (total_frames + 1)
}
