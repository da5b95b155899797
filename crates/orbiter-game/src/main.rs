//! Mars Orbiter — headless game shell.
//!
//! Runs the full simulation loop against the recording presenter with a small
//! scripted flight plan: no window, no GPU, no audio device. Useful for
//! balance experiments, soak runs, and as the reference wiring for a real
//! frontend, which would swap in a windowed `Presenter` implementation.
//!
//! Run with: `cargo run -p orbiter-game -- --ticks 900 --fast`

mod governor;

use clap::Parser;
use orbiter_config::{CliArgs, Config};
use orbiter_input::{InputEvent, InputMap, KeyCode};
use orbiter_render::RecordingPresenter;
use orbiter_sim::Simulation;
use tracing::{error, info};

use crate::governor::FrameGovernor;

/// CLI arguments for the game binary.
#[derive(Parser, Debug)]
#[command(name = "orbiter-game", about = "Mars Orbiter — orbital insertion arcade sim")]
struct GameArgs {
    #[command(flatten)]
    base: CliArgs,

    /// Stop after this many ticks (0 = run until quit).
    #[arg(long, default_value_t = 900)]
    ticks: u64,

    /// Seed for the randomized insertion orbit.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Skip the frame governor and run ticks back to back.
    #[arg(long)]
    fast: bool,
}

fn main() {
    let args = GameArgs::parse();

    let config_dir = args
        .base
        .config
        .clone()
        .unwrap_or_else(Config::default_dir);
    let config = match Config::load_or_create(&config_dir) {
        Ok(mut config) => {
            config.apply_cli_overrides(&args.base);
            config
        }
        Err(err) => {
            // Logging isn't up yet; this goes straight to stderr.
            eprintln!("failed to load config: {err}");
            std::process::exit(1);
        }
    };

    orbiter_log::init_logging(None, cfg!(debug_assertions), Some(&config));

    if let Err(err) = config.validate() {
        error!("{err}");
        std::process::exit(1);
    }

    info!("Mars Orbiter");
    info!(
        "Window: {}x{} | fullscreen: {} | {} ticks/s",
        config.window.width, config.window.height, config.window.fullscreen, config.simulation.fps
    );
    info!(seed = args.seed, ticks = args.ticks, fast = args.fast, "starting run");

    let input_map = match InputMap::load_or_default(&config_dir.join("bindings.ron")) {
        Ok(map) => map,
        Err(err) => {
            error!("{err}");
            std::process::exit(1);
        }
    };

    let fps = config.simulation.fps;
    let telemetry_interval = u64::from(fps) * u64::from(config.debug.telemetry_secs.max(1));

    let mut presenter = RecordingPresenter::new();
    script_flight_plan(&mut presenter);

    let mut sim = Simulation::new(config, args.seed);
    sim.set_input_map(input_map);
    let mut governor = FrameGovernor::new(fps);

    while sim.is_running() && (args.ticks == 0 || sim.tick_count() < args.ticks) {
        sim.tick(&mut presenter);

        if sim.tick_count() % telemetry_interval == 0 {
            let sat = sim.satellite();
            info!(
                "tick {:>5} | Dx {:+.2} Dy {:+.2} | alt {:6.1} | fuel {:3} | ecc {:.8} | {:?} | mapping: {}",
                sim.tick_count(),
                sat.velocity.x,
                sat.velocity.y,
                sat.distance,
                sat.fuel,
                sim.eccentricity(),
                sim.fail_status(),
                sim.mapping_enabled(),
            );
        }

        if !args.fast {
            governor.wait();
        }
    }

    let sat = sim.satellite();
    info!(
        "run complete: {} ticks, {} frames | fuel {} | alt {:.1} | {:?}",
        sim.tick_count(),
        presenter.frames_presented(),
        sat.fuel,
        sat.distance,
        sim.fail_status(),
    );
}

/// A short scripted flight plan so a headless run exercises every input
/// path: a retrograde burn, a radial burn, a trail clear, and a mapping
/// attempt. Poll ordinals are zero-based ticks.
fn script_flight_plan(presenter: &mut RecordingPresenter) {
    presenter.script(30, InputEvent::KeyDown(KeyCode::ArrowLeft));
    presenter.script(44, InputEvent::KeyUp(KeyCode::ArrowLeft));
    presenter.script(90, InputEvent::KeyDown(KeyCode::ArrowUp));
    presenter.script(98, InputEvent::KeyUp(KeyCode::ArrowUp));
    presenter.script(150, InputEvent::KeyDown(KeyCode::Space));
    presenter.script(151, InputEvent::KeyUp(KeyCode::Space));
    presenter.script(200, InputEvent::KeyDown(KeyCode::KeyM));
    presenter.script(320, InputEvent::KeyUp(KeyCode::KeyM));
}
