//! The player's paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// Discrete steering intent for one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PaddleIntent {
    Left,
    Right,
    #[default]
    None,
}

/// The player's paddle (axis-aligned rectangle)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal pixels per tick when steered by intent
    pub speed: f32,
}

impl Paddle {
    pub fn new(config: &GameConfig) -> Self {
        let mut paddle = Self {
            pos: Vec2::ZERO,
            size: Vec2::new(config.paddle_width, config.paddle_height),
            speed: config.paddle_speed,
        };
        paddle.reset(config);
        paddle
    }

    /// Center horizontally at the resting height
    pub fn reset(&mut self, config: &GameConfig) {
        self.pos = Vec2::new(
            (config.field_width - self.size.x) / 2.0,
            config.paddle_rest_y(),
        );
    }

    /// Move for one tick, then clamp into the field
    ///
    /// An absolute pointer position wins over the directional intent.
    pub fn advance(&mut self, intent: PaddleIntent, pointer_x: Option<f32>, config: &GameConfig) {
        match pointer_x {
            Some(x) => self.pos.x = x - self.size.x / 2.0,
            None => match intent {
                PaddleIntent::Left => self.pos.x -= self.speed,
                PaddleIntent::Right => self.pos.x += self.speed,
                PaddleIntent::None => {}
            },
        }
        let max_x = (config.field_width - self.size.x).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
}
