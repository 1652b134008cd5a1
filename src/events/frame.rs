//! Frame advance notification.
//!
//! [`FrameAdvancedEvent`] is triggered each time the frame clock steps, after
//! the frame has been composed. Hosts that mirror the current frame (status
//! lines, overlays, tests) observe it instead of polling the clock.
//!
//! # Example
//!
//! ```ignore
//! world.add_observer(|trigger: On<FrameAdvancedEvent>| {
//!     println!("now at frame {}", trigger.event().frame);
//! });
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::trace;

/// The frame clock moved to `frame`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameAdvancedEvent {
    /// Frame index the clock now holds.
    pub frame: u32,
    /// Ticks completed since the animation started.
    pub ticks: u64,
}

/// Observer that traces every frame advance.
pub fn log_frame_advanced(trigger: On<FrameAdvancedEvent>) {
    let event = trigger.event();
    trace!("frame -> {} (tick {})", event.frame, event.ticks);
}
