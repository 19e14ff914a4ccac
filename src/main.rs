//! Brick Breaker entry point
//!
//! Headless native driver: runs sessions on autopilot and prints the final
//! frame of each.
//!
//! Usage: `brick-breaker [config.json]`
//!
//! Environment:
//! - `BRICK_SEED`: RNG seed (default: current time)
//! - `BRICK_FRAMES`: frame limit per round (default 20000)
//! - `BRICK_ROUNDS`: rounds to play, restarting between them (default 1)
//! - `RUST_LOG`: log filter (e.g. `info`, `debug`)

use std::time::{SystemTime, UNIX_EPOCH};

use brick_breaker::{Autopilot, GameConfig, GameSession, GameStatus, TextRenderer, run_frames};

const DEFAULT_FRAMES: u64 = 20_000;

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match std::env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            log::warn!("Ignoring unparsable {key}={raw:?}");
            default
        }),
        Err(_) => default,
    }
}

fn main() {
    env_logger::init();
    log::info!("Brick Breaker (native) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load_or_default(path),
        None => GameConfig::default(),
    };

    let time_seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let seed = env_or("BRICK_SEED", time_seed);
    let max_frames = env_or("BRICK_FRAMES", DEFAULT_FRAMES);
    let rounds = env_or("BRICK_ROUNDS", 1u32).max(1);
    log::info!("Seed {seed}, {rounds} round(s) of up to {max_frames} frames");

    let mut session = match GameSession::new(config, seed) {
        Ok(session) => session,
        Err(err) => {
            log::error!("{err}");
            std::process::exit(1);
        }
    };
    let mut pilot = Autopilot::default();
    let mut renderer = TextRenderer::default();

    for round in 1..=rounds {
        if round > 1 {
            session.restart();
        }
        let status = run_frames(&mut session, &mut pilot, &mut renderer, max_frames);

        println!("{}", renderer.output());
        match status {
            GameStatus::Won => println!("Round {round}: cleared the field, score {}", session.score),
            GameStatus::Lost => println!("Round {round}: out of lives, score {}", session.score),
            GameStatus::Playing => println!(
                "Round {round}: frame limit reached, score {} ({} bricks left)",
                session.score,
                session.bricks.remaining_breakable()
            ),
        }
    }
}
