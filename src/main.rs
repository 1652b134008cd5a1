//! LCD Runner main entry point.
//!
//! Emulates a 16×2 character LCD in a window and plays the runner animation
//! on it, using:
//! - **raylib** for windowing and presentation
//! - **bevy_ecs** for resources, systems and the per-refresh schedule
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window and create the render target
//! 2. Insert the LCD resources and register observers
//! 3. Start the animation (frame 0, first tick requested)
//! 4. Once per display refresh run the schedule:
//!    - apply configuration changes
//!    - run the pending tick: compose, advance the clock, request the next tick
//!    - present the surface in the window
//! 5. Tear the animation down when the window closes
//!
//! `--dump-frame` and `--dump-timeline` render without a window and exit.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --debug
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use lcdrunner::events::frame::log_frame_advanced;
use lcdrunner::events::switchdebug::{SwitchDebugEvent, switch_debug_observer};
use lcdrunner::resources::appconfig::{AppConfig, DEFAULT_CONFIG_PATH};
use lcdrunner::resources::lastresolution::LastResolution;
use lcdrunner::resources::lcdgeometry::LcdGeometry;
use lcdrunner::resources::pixelsurface::PixelSurface;
use lcdrunner::resources::rendertarget::RenderTarget;
use lcdrunner::resources::spritecatalog::SpriteCatalog;
use lcdrunner::resources::tickscheduler::TickScheduler;
use lcdrunner::resources::timeline::AnimationTimeline;
use lcdrunner::resources::windowsize::WindowSize;
use lcdrunner::systems::animation::resolve;
use lcdrunner::systems::appconfig::{apply_config_to_scene, apply_config_to_window};
use lcdrunner::systems::compose::render_frame;
use lcdrunner::systems::frameclock::{
    add_tick_systems, drop_tick_without_surface, schedule_next_tick, start_animation,
    teardown_animation,
};
use lcdrunner::systems::input::poll_debug_key;
use lcdrunner::systems::present::present_surface;

/// LCD Runner
#[derive(Parser)]
#[command(version, about = "A runner jumping over an obstacle on an emulated 16x2 character LCD")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Start with the debug overlay enabled (F11 toggles it at runtime).
    #[arg(long)]
    debug: bool,

    /// Render one frame of the cycle as text and exit.
    #[arg(long, value_name = "N")]
    dump_frame: Option<u32>,

    /// Print the resolved pose of every frame as JSON lines and exit.
    #[arg(long)]
    dump_timeline: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config =
        AppConfig::with_path(cli.config.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH)));
    if let Err(e) = config.load_from_file() {
        log::warn!("{}, using defaults", e);
    }

    let timeline = AnimationTimeline::default();
    let geometry = LcdGeometry::with_scale(config.scale);

    // Early-exit: render a single frame as text (no window needed)
    if let Some(frame) = cli.dump_frame {
        if frame > timeline.total_frames {
            log::error!(
                "Frame {} is outside the cycle 0..={}",
                frame,
                timeline.total_frames
            );
            std::process::exit(1);
        }
        let (surface, _) = render_frame(&geometry, frame);
        print!("{}", surface.to_text(geometry.scale, '#', '.'));
        return;
    }

    // Early-exit: dump the whole timeline (no window needed)
    if cli.dump_timeline {
        for frame in 0..=timeline.total_frames {
            let resolution = resolve(frame, &timeline, &geometry);
            match serde_json::to_string(&resolution) {
                Ok(line) => println!("{}", line),
                Err(e) => {
                    log::error!("Failed to serialize frame {}: {}", frame, e);
                    std::process::exit(1);
                }
            }
        }
        return;
    }

    log::info!("Starting LCD Runner");
    // --------------- Raylib window & render target ---------------
    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("LCD Runner")
        .build();
    rl.set_target_fps(config.target_fps);
    // Disable ESC to exit
    rl.set_exit_key(None);

    let render_target = match RenderTarget::new(
        &mut rl,
        &thread,
        geometry.surface_width(),
        geometry.surface_height(),
    ) {
        Ok(target) => target,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(SpriteCatalog::new());
    world.insert_resource(PixelSurface::for_geometry(&geometry));
    world.insert_resource(geometry);
    world.insert_resource(timeline);
    world.insert_resource(TickScheduler::new());
    world.insert_resource(config.palette());
    world.insert_resource(LastResolution::default());
    // WindowSize is the actual window dimensions (updated each frame)
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(config);

    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(log_frame_advanced));
    world.spawn(Observer::new(switch_debug_observer));
    // Ensure the observers are registered before anything triggers events.
    world.flush();

    if cli.debug {
        world.trigger(SwitchDebugEvent {});
        world.flush();
    }

    let mut update = Schedule::default();
    // Config must land before the tick reads the geometry and surface
    update.add_systems(
        (apply_config_to_scene, apply_config_to_window)
            .chain()
            .before(drop_tick_without_surface),
    );
    update.add_systems(poll_debug_key);
    add_tick_systems(&mut update);
    update.add_systems(
        present_surface
            .after(schedule_next_tick)
            .after(apply_config_to_window)
            .after(poll_debug_key),
    );

    if let Err(e) = update.initialize(&mut world) {
        log::error!("Failed to initialize schedule: {}", e);
        std::process::exit(1);
    }

    start_animation(&mut world);

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        update.run(&mut world);

        world.clear_trackers(); // Clear change detection for next frame

        // Update window size each frame (may change due to resize)
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }

    teardown_animation(&mut world);
}
