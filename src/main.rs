//! Rubik's Cube reference host.
//!
//! A raylib window around the cube plugin:
//! - **raylib** for windowing, drawing, ray casting and input
//! - **bevy_ecs** for the puzzle's entity-component-system world
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing), open the window
//! 2. Set up the ECS world via [`game::setup_world`]
//! 3. Every frame:
//!    - cast the cursor ray and fill the pointer state
//!    - handle hotkeys (scramble, rebuild, resize)
//!    - advance time and run the update schedule
//!    - print cube notifications, draw the cube and the HUD
//!
//! # Running
//!
//! ```sh
//! cargo run --release --features render -- --size 4 --scramble 30
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{info, warn};
use raylib::prelude::*;
use std::path::PathBuf;

use rubikscube::events::cube::CubeNotification;
use rubikscube::game;
use rubikscube::resources::camerarig::CameraRig;
use rubikscube::resources::cube::Cube;
use rubikscube::resources::cubeconfig::CubeConfig;
use rubikscube::resources::notifications::NotificationBridge;
use rubikscube::resources::scramblerng::ScrambleRng;
use rubikscube::systems::input::{handle_hotkeys, update_pointer_state};
use rubikscube::systems::render::{render_hud, render_pass, rig_camera};
use rubikscube::systems::time::update_world_time;

/// Rubik's Cube
#[derive(Parser)]
#[command(version, about = "Interactive Rubik's Cube (2x2x2 up to 16x16x16)")]
struct Cli {
    /// Cubies per edge (clamped to 2..=16). Overrides the config file.
    #[arg(long)]
    size: Option<i32>,

    /// Scramble right after start with this many extra turns.
    #[arg(long, value_name = "STEPS")]
    scramble: Option<i32>,

    /// Path to the INI configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,

    /// Seed for the scramble generator, for reproducible scrambles.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = CubeConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{}; using defaults", e);
    }
    if let Some(size) = cli.size {
        config.size = Cube::clamp_size(size);
    }

    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .msaa_4x()
        .title("Rubik's Cube")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    game::setup_world(&mut world, config);
    if let Some(seed) = cli.seed {
        world.insert_resource(ScrambleRng::with_seed(seed));
    }
    if let Some(steps) = cli.scramble {
        game::scramble(&mut world, steps);
    }

    let mut update = game::build_update_schedule();

    // --------------- Main loop ---------------
    let current_camera = |world: &World| {
        let piece_size = world.resource::<Cube>().piece_size;
        rig_camera(world.resource::<CameraRig>(), piece_size)
    };
    while !rl.window_should_close() {
        update_pointer_state(&mut world, &rl, current_camera(&world));
        handle_hotkeys(&mut world, &rl);

        update_world_time(&mut world, rl.get_frame_time());
        update.run(&mut world);
        world.clear_trackers();

        for notification in world.resource::<NotificationBridge>().drain() {
            match notification {
                CubeNotification::Changed { steps } => info!("Moves: {}", steps),
                CubeNotification::Solved => info!("Solved!"),
            }
        }

        let camera = current_camera(&world);
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::RAYWHITE);
        {
            let mut d3 = d.begin_mode3D(camera);
            render_pass(&mut world, &mut d3);
        }
        render_hud(&world, &mut d);
    }
}
