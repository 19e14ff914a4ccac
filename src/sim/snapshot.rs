//! Read-only frame views for renderers
//!
//! Renderers never see live entities; they get a value copy of whatever is
//! visible this frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::brick::BrickCategory;
use super::state::{GameEvent, GameSession, GameStatus};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleView {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrickView {
    pub row: usize,
    pub col: usize,
    pub pos: Vec2,
    pub size: Vec2,
    pub category: BrickCategory,
    pub hits_remaining: Option<u8>,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub field_size: Vec2,
    pub ball: BallView,
    pub paddle: PaddleView,
    /// Active bricks only
    pub bricks: Vec<BrickView>,
    pub score: u64,
    pub lives: u8,
    pub status: GameStatus,
    pub tick: u64,
    pub events: Vec<GameEvent>,
}

impl FrameSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl GameSession {
    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            field_size: Vec2::new(self.config.field_width, self.config.field_height),
            ball: BallView {
                pos: self.ball.pos,
                vel: self.ball.vel,
                radius: self.ball.radius,
            },
            paddle: PaddleView {
                pos: self.paddle.pos,
                size: self.paddle.size,
            },
            bricks: self
                .bricks
                .active()
                .map(|b| BrickView {
                    row: b.row,
                    col: b.col,
                    pos: b.pos,
                    size: b.size,
                    category: b.category,
                    hits_remaining: b.hits_remaining,
                })
                .collect(),
            score: self.score,
            lives: self.lives,
            status: self.status,
            tick: self.tick_count,
            events: self.events().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_snapshot_skips_inactive_bricks() {
        let mut session = GameSession::new(GameConfig::default(), 3).expect("default config is valid");
        let total = session.bricks.bricks.len();
        session.bricks.bricks[30].active = false;

        let frame = session.snapshot();
        assert_eq!(frame.bricks.len(), total - 1);
        assert!(frame
            .bricks
            .iter()
            .all(|b| (b.row, b.col) != (session.bricks.bricks[30].row, session.bricks.bricks[30].col)));
        assert_eq!(frame.ball.pos, session.ball.pos);
        assert_eq!(frame.lives, 3);
    }

    #[test]
    fn test_snapshot_does_not_track_session() {
        let mut session = GameSession::new(GameConfig::default(), 3).expect("default config is valid");
        let frame = session.snapshot();
        session.ball.pos = Vec2::new(1.0, 1.0);
        assert_ne!(frame.ball.pos, session.ball.pos);
    }

    #[test]
    fn test_snapshot_json() {
        let session = GameSession::new(GameConfig::default(), 3).expect("default config is valid");
        let json = session.snapshot().to_json().expect("snapshot serializes");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["status"], "Playing");
        assert_eq!(value["lives"], 3);
        assert_eq!(value["bricks"].as_array().map(Vec::len), Some(45));
    }
}
