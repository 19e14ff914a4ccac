//! Brick Breaker - a single-screen brick-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, session state)
//! - `config`: Layout and tuning configuration with JSON loading
//! - `input`: Per-tick input intent and input sources (autopilot, scripted)
//! - `renderer`: Snapshot-driven rendering and the frame driver

pub mod config;
pub mod input;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use input::{Autopilot, InputSource, ScriptedInput};
pub use renderer::{Renderer, TextRenderer, run_frames};
pub use sim::{GameSession, GameStatus, TickInput};

/// Default layout and tuning constants
pub mod consts {
    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults (speed is per-axis, in pixels per tick)
    pub const BALL_RADIUS: f32 = 8.0;
    pub const BALL_SPEED: f32 = 4.0;
    /// Distance between the ball center and the paddle's top edge on reset
    pub const BALL_START_OFFSET: f32 = 20.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 12.0;
    pub const PADDLE_SPEED: f32 = 7.0;
    /// Gap between the paddle's bottom edge and the floor
    pub const PADDLE_BOTTOM_OFFSET: f32 = 30.0;

    /// Brick grid defaults
    pub const BRICK_ROWS: usize = 5;
    pub const BRICK_COLS: usize = 9;
    pub const BRICK_WIDTH: f32 = 75.0;
    pub const BRICK_HEIGHT: f32 = 20.0;
    pub const BRICK_PADDING: f32 = 10.0;
    pub const BRICK_OFFSET_TOP: f32 = 40.0;
    pub const BRICK_OFFSET_LEFT: f32 = 30.0;

    /// Hits needed to destroy a strong brick
    pub const STRONG_BRICK_HITS: u8 = 2;

    /// Points awarded on the destroying hit
    pub const BASIC_POINTS: u64 = 10;
    pub const STRONG_POINTS: u64 = 20;

    pub const INITIAL_LIVES: u8 = 3;
}
