//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (row-major bricks)
//! - No rendering or platform dependencies

pub mod ball;
pub mod brick;
pub mod collision;
pub mod paddle;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use ball::Ball;
pub use brick::{Brick, BrickCategory, BrickField, HitOutcome};
pub use collision::{CollisionReport, ball_overlaps_rect, paddle_bounce_velocity, paddle_contact};
pub use paddle::{Paddle, PaddleIntent};
pub use snapshot::{BallView, BrickView, FrameSnapshot, PaddleView};
pub use state::{GameEvent, GameSession, GameStatus};
pub use tick::{TickInput, tick};
