//! Sky Hopper entry point
//!
//! Native builds run a headless demo session: the autopilot steers, the
//! vertex renderer tessellates every frame, and the result is logged.
//!
//! Usage: `sky-hopper [settings.json] [max-frames]`

use std::path::Path;

use sky_hopper::renderer::VertexRenderer;
use sky_hopper::sim::{SystemClock, TickInput, autopilot};
use sky_hopper::{Game, Settings, StatusSink};

/// Prints status changes the way a HUD would show them
#[derive(Default)]
struct LogSink {
    score: u64,
    lives: u32,
}

impl StatusSink for LogSink {
    fn set_score(&mut self, score: u64) {
        if score != self.score {
            log::debug!("Score: {}", score);
        }
        self.score = score;
    }

    fn set_lives(&mut self, lives: u32) {
        if lives != self.lives {
            log::info!("Lives: {}", lives);
        }
        self.lives = lives;
    }

    fn on_game_over(&mut self, final_score: u64) {
        log::info!("Game over! Final score: {}", final_score);
    }
}

const DEFAULT_MAX_FRAMES: u64 = 60 * 60;

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Sky Hopper (native) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };
    let max_frames = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_MAX_FRAMES);

    let mut game = Game::new(&settings, SystemClock::new());
    let mut renderer = VertexRenderer::new();
    let mut sink = LogSink::default();

    game.request_start(&mut sink);

    let mut frames = 0u64;
    loop {
        let input: TickInput = autopilot(game.state());
        if !game.frame(&input, &mut renderer, &mut sink) {
            break;
        }
        frames += 1;
        if frames >= max_frames {
            log::info!("Frame limit reached");
            break;
        }
        // Nominal 60 Hz pacing; shoot cooldowns and shields read the real clock
        std::thread::sleep(std::time::Duration::from_millis(16));
    }

    println!(
        "Played {} frames: score {}, lives {}, best {}, last frame {} vertices",
        frames,
        game.state().score,
        game.state().lives,
        game.high_score(),
        renderer.vertices().len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `Game::frame` from their own animation callback
}
