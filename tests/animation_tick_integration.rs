//! Animation tick integration tests.
//!
//! Drive the tick schedule headlessly (no raylib window) and check what each
//! tick leaves behind: the composed surface, the pose it drew, the frame clock
//! and the pending tick request.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

use lcdrunner::events::frame::FrameAdvancedEvent;
use lcdrunner::resources::appconfig::AppConfig;
use lcdrunner::resources::frameclock::FrameClock;
use lcdrunner::resources::lastresolution::LastResolution;
use lcdrunner::resources::lcdgeometry::LcdGeometry;
use lcdrunner::resources::palette::Palette;
use lcdrunner::resources::pixelsurface::PixelSurface;
use lcdrunner::resources::spritecatalog::SpriteCatalog;
use lcdrunner::resources::tickscheduler::TickScheduler;
use lcdrunner::resources::timeline::AnimationTimeline;
use lcdrunner::systems::animation::{AnimationState, GROUND_ROW, Placement, UPPER_ROW};
use lcdrunner::systems::appconfig::apply_config_to_scene;
use lcdrunner::systems::frameclock::{
    add_tick_systems, drop_tick_without_surface, start_animation, teardown_animation,
};

const CELL_W: u32 = 20;
const CELL_H: u32 = 32;
const OBSTACLE_COL: u32 = 8;

fn make_world() -> World {
    let geometry = LcdGeometry::default();
    let mut world = World::new();
    world.insert_resource(SpriteCatalog::new());
    world.insert_resource(PixelSurface::for_geometry(&geometry));
    world.insert_resource(geometry);
    world.insert_resource(AnimationTimeline::default());
    world.insert_resource(TickScheduler::new());
    world
}

fn tick_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    add_tick_systems(&mut schedule);
    schedule
}

fn started_world() -> (World, Schedule) {
    let mut world = make_world();
    start_animation(&mut world);
    (world, tick_schedule())
}

fn lit_in_cell(surface: &PixelSurface, col: u32, row: u32) -> usize {
    let mut count = 0;
    for y in row * CELL_H..(row + 1) * CELL_H {
        for x in col * CELL_W..(col + 1) * CELL_W {
            if surface.get(x, y) {
                count += 1;
            }
        }
    }
    count
}

fn clock_frame(world: &World) -> u32 {
    world.resource::<FrameClock>().frame()
}

fn drawn(world: &World) -> lcdrunner::systems::animation::Resolution {
    world
        .resource::<LastResolution>()
        .0
        .clone()
        .expect("a tick should have composed a frame")
}

#[derive(Resource, Default)]
struct SeenFrames(Vec<u32>);

#[test]
fn each_refresh_runs_exactly_one_tick() {
    let (mut world, mut schedule) = started_world();

    for expected in 1..=5 {
        schedule.run(&mut world);
        assert_eq!(clock_frame(&world), expected);
        assert_eq!(drawn(&world).frame, expected - 1);
        assert!(world.resource::<TickScheduler>().is_pending());
    }
}

#[test]
fn cycle_closes_after_total_plus_one_ticks() {
    let (mut world, mut schedule) = started_world();

    for _ in 0..321 {
        schedule.run(&mut world);
    }

    let clock = world.resource::<FrameClock>();
    assert_eq!(clock.frame(), 0);
    assert_eq!(clock.ticks(), 321);
    assert_eq!(drawn(&world).frame, 320);
}

#[test]
fn obstacle_is_drawn_on_every_tick() {
    let (mut world, mut schedule) = started_world();

    for _ in 0..=320 {
        schedule.run(&mut world);
        let surface = world.resource::<PixelSurface>();
        assert_eq!(
            lit_in_cell(surface, OBSTACLE_COL, GROUND_ROW as u32),
            (CELL_W * CELL_H) as usize,
            "frame {}",
            drawn(&world).frame
        );
    }
}

#[test]
fn off_grid_ticks_draw_only_the_obstacle() {
    let (mut world, mut schedule) = started_world();
    let obstacle_only = (CELL_W * CELL_H) as usize;

    for _ in 0..=320 {
        schedule.run(&mut world);
        let resolution = drawn(&world);
        if !(0..16).contains(&resolution.hero_column) {
            assert!(resolution.placements.is_empty());
            assert_eq!(
                world.resource::<PixelSurface>().lit_count(),
                obstacle_only,
                "frame {}",
                resolution.frame
            );
        }
    }
}

#[test]
fn off_grid_frames_are_at_cycle_ends() {
    let (mut world, mut schedule) = started_world();
    let mut off_grid = Vec::new();

    for _ in 0..=320 {
        schedule.run(&mut world);
        let resolution = drawn(&world);
        if resolution.placements.is_empty() {
            off_grid.push(resolution.frame);
        }
    }

    // Column -1 until frame 10, column 16 from frame 311 on.
    let expected: Vec<u32> = (0..=9).chain(311..=320).collect();
    assert_eq!(off_grid, expected);
}

#[test]
fn straddle_ticks_light_both_rows_of_one_column() {
    let (mut world, mut schedule) = started_world();
    let mut straddles = 0;

    for _ in 0..=320 {
        schedule.run(&mut world);
        let resolution = drawn(&world);
        if !matches!(resolution.state, AnimationState::Jump2 | AnimationState::Jump7) {
            continue;
        }
        straddles += 1;

        let col = resolution.hero_column as u32;
        let surface = world.resource::<PixelSurface>();
        // Head dot: one 4x4 block at glyph pixel (2, 3) of the upper cell.
        assert_eq!(lit_in_cell(surface, col, UPPER_ROW as u32), 16);
        assert!(surface.get(col * CELL_W + 8, 12));
        // jumpLower body in the ground cell: 13 lit glyph pixels.
        assert_eq!(lit_in_cell(surface, col, GROUND_ROW as u32), 13 * 16);
        assert!(matches!(resolution.placements[0], Placement::HeadDot { .. }));
    }

    // Two straddle phases of three ticks each.
    assert_eq!(straddles, 6);
}

#[test]
fn upper_row_stays_dark_outside_the_jump() {
    let (mut world, mut schedule) = started_world();

    for _ in 0..=320 {
        schedule.run(&mut world);
        let resolution = drawn(&world);
        if resolution.state == AnimationState::Run {
            let surface = world.resource::<PixelSurface>();
            for col in 0..16 {
                assert_eq!(lit_in_cell(surface, col, UPPER_ROW as u32), 0);
            }
        }
    }
}

#[test]
fn frame_advanced_event_follows_every_tick() {
    let (mut world, mut schedule) = started_world();
    world.insert_resource(SeenFrames::default());
    world.add_observer(|trigger: On<FrameAdvancedEvent>, mut seen: ResMut<SeenFrames>| {
        seen.0.push(trigger.event().frame);
    });
    world.flush();

    for _ in 0..10 {
        schedule.run(&mut world);
    }

    assert_eq!(world.resource::<SeenFrames>().0, (1..=10).collect::<Vec<_>>());
}

#[test]
fn missing_surface_skips_the_tick_without_retry() {
    let (mut world, mut schedule) = started_world();
    schedule.run(&mut world);
    schedule.run(&mut world);
    assert_eq!(clock_frame(&world), 2);

    world.remove_resource::<PixelSurface>();
    schedule.run(&mut world);

    assert_eq!(clock_frame(&world), 2);
    assert!(!world.resource::<TickScheduler>().is_pending());

    // The surface coming back does not revive the chain.
    let geometry = *world.resource::<LcdGeometry>();
    world.insert_resource(PixelSurface::for_geometry(&geometry));
    schedule.run(&mut world);
    assert_eq!(clock_frame(&world), 2);
    assert_eq!(drawn(&world).frame, 1);
}

#[test]
fn no_tick_runs_before_start() {
    let mut world = make_world();
    world.init_resource::<LastResolution>();
    let mut schedule = tick_schedule();

    schedule.run(&mut world);

    assert!(!world.contains_resource::<FrameClock>());
    assert!(world.resource::<LastResolution>().0.is_none());
    assert_eq!(world.resource::<PixelSurface>().lit_count(), 0);
}

#[test]
fn teardown_stops_further_ticks() {
    let (mut world, mut schedule) = started_world();
    for _ in 0..5 {
        schedule.run(&mut world);
    }

    teardown_animation(&mut world);
    let surface_before = world.resource::<PixelSurface>().clone();

    for _ in 0..5 {
        schedule.run(&mut world);
    }

    assert!(!world.contains_resource::<FrameClock>());
    assert!(!world.resource::<TickScheduler>().is_pending());
    assert_eq!(drawn(&world).frame, 4);
    assert_eq!(*world.resource::<PixelSurface>(), surface_before);
}

#[test]
fn restart_after_teardown_begins_at_frame_zero() {
    let (mut world, mut schedule) = started_world();
    for _ in 0..7 {
        schedule.run(&mut world);
    }
    teardown_animation(&mut world);

    start_animation(&mut world);
    schedule.run(&mut world);

    assert_eq!(drawn(&world).frame, 0);
    assert_eq!(clock_frame(&world), 1);
}

#[test]
fn identical_worlds_draw_identical_frames() {
    let (mut a, mut schedule_a) = started_world();
    let (mut b, mut schedule_b) = started_world();

    for _ in 0..60 {
        schedule_a.run(&mut a);
        schedule_b.run(&mut b);
        assert_eq!(*a.resource::<PixelSurface>(), *b.resource::<PixelSurface>());
    }
}

#[test]
fn config_scale_applies_before_the_first_tick() {
    let mut world = make_world();
    world.insert_resource(Palette::default());
    let mut config = AppConfig::new();
    config.scale = 2;
    world.insert_resource(config);
    start_animation(&mut world);

    let mut schedule = tick_schedule();
    schedule.add_systems(apply_config_to_scene.before(drop_tick_without_surface));
    schedule.run(&mut world);

    let surface = world.resource::<PixelSurface>();
    assert_eq!((surface.width(), surface.height()), (160, 32));
    // Obstacle at half size: one 10x16 cell.
    assert_eq!(surface.lit_count(), 10 * 16);
    assert_eq!(clock_frame(&world), 1);
}
