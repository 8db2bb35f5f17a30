//! Grid Snake entry point
//!
//! The browser build is driven from JavaScript through `platform::web`.
//! Natively this runs a headless autopilot game on a simulated 60 Hz clock
//! and prints the final board.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use grid_snake::renderer::TextRenderer;
    use grid_snake::sim::autopilot;
    use grid_snake::{Engine, GameConfig, GamePhase, HighScore, LoopDriver};

    /// Simulated display refresh
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after two simulated minutes
    const MAX_FRAMES: u32 = 60 * 120;

    env_logger::init();
    log::info!("Grid Snake (native demo) starting...");

    let mut config = GameConfig::load();
    if let Some(arg) = std::env::args().nth(1) {
        match arg.parse::<u64>() {
            Ok(seed) => config.seed = Some(seed),
            Err(_) => {
                eprintln!("usage: grid-snake [seed]");
                std::process::exit(2);
            }
        }
    }

    let mut driver = LoopDriver::new(0.0, config.steps_per_second);
    let mut engine = Engine::with_sink(config, HighScore::load());
    let mut renderer = TextRenderer::new();
    engine.start();

    let mut frames = 0;
    while frames < MAX_FRAMES && engine.phase() != GamePhase::GameOver {
        let direction = autopilot::choose_direction(&engine.snapshot());
        engine.steer(direction);
        frames += 1;
        driver.frame(frames as f64 * FRAME_MS, &mut engine, &mut renderer);
    }

    println!("{}", renderer.frame());
    println!(
        "{} ticks in {:.1} simulated seconds, high score {}",
        engine.ticks(),
        frames as f64 * FRAME_MS / 1000.0,
        engine.sink().best()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::wasm_start, this is just to satisfy the compiler
}
