//! The ball: pure kinematics, no collision awareness

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Center position
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Per-axis speed used when the ball is served
    pub speed: f32,
}

impl Ball {
    /// Create a ball already served from the paddle's resting position
    pub fn new(config: &GameConfig, rng: &mut impl Rng) -> Self {
        let mut ball = Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            radius: config.ball_radius,
            speed: config.ball_speed,
        };
        ball.reset(config, rng);
        ball
    }

    /// Re-center above the paddle and serve up-left or up-right
    pub fn reset(&mut self, config: &GameConfig, rng: &mut impl Rng) {
        self.pos = Vec2::new(
            config.field_width / 2.0,
            config.paddle_rest_y() - config.ball_start_offset,
        );
        let dir_x = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
        self.vel = Vec2::new(dir_x * self.speed, -self.speed);
    }

    /// One Euler step
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn reflect_horizontal(&mut self) {
        self.vel.x = -self.vel.x;
    }

    #[inline]
    pub fn reflect_vertical(&mut self) {
        self.vel.y = -self.vel.y;
    }

    #[inline]
    pub fn speed_magnitude(&self) -> f32 {
        self.vel.length()
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.radius
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.radius
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.radius
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.radius
    }
}
