//! Tick systems.
//!
//! A tick is the chain `compose_scene → advance_frame_clock →
//! schedule_next_tick`, run at most once per display refresh and only when
//! the previous tick (or [`start_animation`]) requested it. The chain is gated
//! by [`tick_ready`], so a tick runs to completion, including requesting its
//! successor, before the next one can start.
//!
//! When the pixel surface is missing the pending request is dropped by
//! [`drop_tick_without_surface`]: nothing is drawn, the clock keeps its frame
//! and no new request is made.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::events::frame::FrameAdvancedEvent;
use crate::resources::frameclock::FrameClock;
use crate::resources::lastresolution::LastResolution;
use crate::resources::pixelsurface::PixelSurface;
use crate::resources::tickscheduler::TickScheduler;
use crate::resources::timeline::AnimationTimeline;
use crate::systems::compose::compose_scene;

/// Run condition: a tick is requested and everything it draws with exists.
pub fn tick_ready(
    scheduler: Res<TickScheduler>,
    clock: Option<Res<FrameClock>>,
    surface: Option<Res<PixelSurface>>,
) -> bool {
    scheduler.is_pending() && clock.is_some() && surface.is_some()
}

/// Run condition: a tick is requested but there is no surface to draw on.
pub fn tick_without_surface(
    scheduler: Res<TickScheduler>,
    surface: Option<Res<PixelSurface>>,
) -> bool {
    scheduler.is_pending() && surface.is_none()
}

/// Consume a tick request that cannot be drawn.
pub fn drop_tick_without_surface(mut scheduler: ResMut<TickScheduler>) {
    if let Some(handle) = scheduler.take_due() {
        debug!("No pixel surface, skipping tick {:?}", handle);
    }
}

/// Step the frame clock and announce the new frame.
pub fn advance_frame_clock(mut clock: ResMut<FrameClock>, mut commands: Commands) {
    let frame = clock.advance();
    commands.trigger(FrameAdvancedEvent {
        frame,
        ticks: clock.ticks(),
    });
}

/// Finish the current tick and request the next one.
pub fn schedule_next_tick(mut scheduler: ResMut<TickScheduler>) {
    scheduler.take_due();
    scheduler.request();
}

/// Add the tick systems to `schedule`.
pub fn add_tick_systems(schedule: &mut Schedule) {
    schedule.add_systems(
        (
            drop_tick_without_surface.run_if(tick_without_surface),
            (compose_scene, advance_frame_clock, schedule_next_tick)
                .chain()
                .run_if(tick_ready),
        )
            .chain(),
    );
}

/// Create the frame clock at frame 0 and request the first tick.
///
/// Expects [`AnimationTimeline`] and [`TickScheduler`] to be present; the
/// [`LastResolution`] resource is created if missing.
pub fn start_animation(world: &mut World) {
    let timeline = *world.resource::<AnimationTimeline>();
    world.insert_resource(FrameClock::for_timeline(&timeline));
    world.init_resource::<LastResolution>();
    let handle = world.resource_mut::<TickScheduler>().request();
    info!(
        "Animation started: {} frame cycle, first tick {:?}",
        timeline.total_frames + 1,
        handle
    );
}

/// Cancel the pending tick and drop the frame clock.
///
/// After this no tick runs until [`start_animation`] is called again.
pub fn teardown_animation(world: &mut World) {
    let cancelled = world
        .get_resource_mut::<TickScheduler>()
        .and_then(|mut scheduler| scheduler.cancel_pending());
    let clock = world.remove_resource::<FrameClock>();
    info!(
        "Animation torn down at frame {:?}, cancelled tick {:?}",
        clock.map(|c| c.frame()),
        cancelled
    );
}
