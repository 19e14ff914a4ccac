//! Session state and core simulation types
//!
//! A [`GameSession`] owns everything one play-through needs. It never talks
//! to input devices or drawing surfaces; drivers push a
//! [`TickInput`](super::TickInput) in and read a
//! [`FrameSnapshot`](super::FrameSnapshot) out.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::brick::{BrickField, HitOutcome};
use super::paddle::Paddle;
use crate::config::{ConfigError, GameConfig};

/// Session status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Active gameplay
    #[default]
    Playing,
    /// Every breakable brick cleared
    Won,
    /// Out of lives
    Lost,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::Playing
    }
}

/// Something that happened during the last tick (for renderers and drivers)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    BrickHit {
        row: usize,
        col: usize,
        outcome: HitOutcome,
    },
    BrickDestroyed {
        row: usize,
        col: usize,
        points: u64,
    },
    PaddleHit {
        hit_pos: f32,
    },
    WallBounce,
    CeilingBounce,
    LifeLost {
        remaining: u8,
    },
    Won,
    Lost,
}

/// One complete play-through
#[derive(Debug, Clone)]
pub struct GameSession {
    pub config: GameConfig,
    pub ball: Ball,
    pub paddle: Paddle,
    pub bricks: BrickField,
    pub score: u64,
    pub lives: u8,
    pub status: GameStatus,
    /// Ticks simulated since the last (re)start
    pub tick_count: u64,
    /// Events emitted by the most recent advancing tick
    pub events: Vec<GameEvent>,
    /// Serve-direction randomness
    pub rng: Pcg32,
}

impl GameSession {
    /// Create a new session with the given seed
    pub fn new(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, Pcg32::seed_from_u64(seed))
    }

    /// Create a new session drawing serve directions from `rng`
    ///
    /// Rejects configs that fail [`GameConfig::validate`].
    pub fn with_rng(config: GameConfig, mut rng: Pcg32) -> Result<Self, ConfigError> {
        config.validate()?;

        let ball = Ball::new(&config, &mut rng);
        let paddle = Paddle::new(&config);
        let bricks = BrickField::build(&config);
        log::info!(
            "Session started: {}x{} bricks, {} lives",
            bricks.rows,
            bricks.cols,
            config.initial_lives
        );

        Ok(Self {
            lives: config.initial_lives,
            config,
            ball,
            paddle,
            bricks,
            score: 0,
            status: GameStatus::Playing,
            tick_count: 0,
            events: Vec::new(),
            rng,
        })
    }

    /// Start over with fresh entities, score and lives
    ///
    /// The RNG keeps running, so a restarted session serves differently.
    pub fn restart(&mut self) {
        self.ball = Ball::new(&self.config, &mut self.rng);
        self.paddle = Paddle::new(&self.config);
        self.bricks = BrickField::build(&self.config);
        self.score = 0;
        self.lives = self.config.initial_lives;
        self.status = GameStatus::Playing;
        self.tick_count = 0;
        self.events.clear();
        log::info!("Session restarted");
    }

    /// Ball dropped past the floor: lose a life, then end or re-serve
    pub(crate) fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.events.push(GameEvent::LifeLost {
            remaining: self.lives,
        });

        if self.lives == 0 {
            self.set_status(GameStatus::Lost);
            return;
        }

        log::debug!("Life lost, {} remaining", self.lives);
        self.ball.reset(&self.config, &mut self.rng);
        self.paddle.reset(&self.config);
    }

    /// Terminal transition (no-op once terminal)
    pub(crate) fn set_status(&mut self, status: GameStatus) {
        if self.status.is_terminal() || status == self.status {
            return;
        }
        self.status = status;
        match status {
            GameStatus::Won => self.events.push(GameEvent::Won),
            GameStatus::Lost => self.events.push(GameEvent::Lost),
            GameStatus::Playing => {}
        }
        log::info!(
            "Session ended: {:?} after {} ticks, score {}",
            status,
            self.tick_count,
            self.score
        );
    }

    /// Events emitted by the most recent advancing tick
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }
}
