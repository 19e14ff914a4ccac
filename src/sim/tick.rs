//! Fixed-step simulation tick
//!
//! One call advances the session by exactly one frame.

use serde::{Deserialize, Serialize};

use super::collision;
use super::paddle::PaddleIntent;
use super::state::{GameSession, GameStatus};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    /// Held direction (keyboard)
    pub intent: PaddleIntent,
    /// Absolute pointer x; overrides `intent` when present
    pub pointer_x: Option<f32>,
}

impl TickInput {
    pub fn steer(intent: PaddleIntent) -> Self {
        Self {
            intent,
            pointer_x: None,
        }
    }

    pub fn pointer(x: f32) -> Self {
        Self {
            intent: PaddleIntent::None,
            pointer_x: Some(x),
        }
    }
}

impl GameSession {
    /// Advance one frame (no-op once Won or Lost)
    pub fn tick(&mut self, input: &TickInput) {
        tick(self, input);
    }
}

/// Advance the session by one frame
pub fn tick(session: &mut GameSession, input: &TickInput) {
    if session.status.is_terminal() {
        return;
    }

    session.events.clear();
    session.tick_count += 1;

    session.ball.advance();
    session
        .paddle
        .advance(input.intent, input.pointer_x, &session.config);

    let report = collision::resolve(
        &mut session.ball,
        &session.paddle,
        &mut session.bricks,
        &session.config,
        &mut session.events,
    );
    session.score += report.points;
    if report.bricks_destroyed > 0 {
        log::debug!(
            "Tick {}: {} brick(s) destroyed, +{} points, {} left",
            session.tick_count,
            report.bricks_destroyed,
            report.points,
            session.bricks.remaining_breakable()
        );
    }
    if report.hit_floor {
        session.lose_life();
    }

    if session.status == GameStatus::Playing && session.bricks.is_cleared() {
        session.set_status(GameStatus::Won);
    }
}
