//! Collision detection and response
//!
//! The ball is treated as its enclosing square against axis-aligned
//! rectangles. Checks run in a fixed order every tick and never
//! short-circuit each other:
//!
//! 1. bricks (vertical bounce, damage, scoring)
//! 2. paddle (angle remap from the contact point)
//! 3. side walls
//! 4. ceiling
//! 5. floor (reported to the session, which handles the lost life)

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec2;

use super::ball::Ball;
use super::brick::BrickField;
use super::paddle::Paddle;
use super::state::GameEvent;
use crate::config::GameConfig;

/// Summary of one collision pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Points earned from bricks destroyed this pass
    pub points: u64,
    pub bricks_destroyed: u32,
    /// Ball's bottom edge crossed the floor
    pub hit_floor: bool,
}

/// AABB overlap between the ball's enclosing square and a rectangle
#[inline]
pub fn ball_overlaps_rect(ball: &Ball, min: Vec2, max: Vec2) -> bool {
    ball.right() > min.x && ball.left() < max.x && ball.bottom() > min.y && ball.top() < max.y
}

/// Normalized contact position along the paddle, if the ball is touching it
///
/// 0.0 is the left edge, 1.0 the right edge.
pub fn paddle_contact(ball: &Ball, paddle: &Paddle) -> Option<f32> {
    let below_top = ball.bottom() > paddle.pos.y;
    let within_span = ball.pos.x >= paddle.pos.x && ball.pos.x <= paddle.right();
    if below_top && within_span {
        Some((ball.pos.x - paddle.pos.x) / paddle.size.x)
    } else {
        None
    }
}

/// Outgoing velocity for a paddle hit at `hit_pos`
///
/// `angle = hit_pos * PI - PI/2`, measured from straight up. Magnitude of
/// `vel` is kept.
pub fn paddle_bounce_velocity(vel: Vec2, hit_pos: f32) -> Vec2 {
    let speed = vel.length();
    let angle = hit_pos * PI - FRAC_PI_2;
    Vec2::new(speed * angle.sin(), -speed * angle.cos())
}

/// Step 1: every active brick the ball overlaps
pub fn resolve_bricks(
    ball: &mut Ball,
    bricks: &mut BrickField,
    events: &mut Vec<GameEvent>,
) -> (u64, u32) {
    let mut points = 0;
    let mut destroyed = 0;

    for brick in bricks.bricks.iter_mut().filter(|b| b.active) {
        if !ball_overlaps_rect(ball, brick.pos, brick.max()) {
            continue;
        }

        // Always a vertical bounce, whichever edge was struck
        ball.reflect_vertical();

        let outcome = brick.hit();
        events.push(GameEvent::BrickHit {
            row: brick.row,
            col: brick.col,
            outcome,
        });
        if outcome.destroyed() {
            let award = brick.points();
            points += award;
            destroyed += 1;
            events.push(GameEvent::BrickDestroyed {
                row: brick.row,
                col: brick.col,
                points: award,
            });
        }
    }

    (points, destroyed)
}

/// Step 2: paddle angle remap
pub fn resolve_paddle(ball: &mut Ball, paddle: &Paddle, events: &mut Vec<GameEvent>) -> bool {
    match paddle_contact(ball, paddle) {
        Some(hit_pos) => {
            ball.vel = paddle_bounce_velocity(ball.vel, hit_pos);
            events.push(GameEvent::PaddleHit { hit_pos });
            true
        }
        None => false,
    }
}

/// Steps 3 and 4: side walls and ceiling
pub fn resolve_walls(ball: &mut Ball, config: &GameConfig, events: &mut Vec<GameEvent>) {
    if ball.left() < 0.0 || ball.right() > config.field_width {
        ball.reflect_horizontal();
        events.push(GameEvent::WallBounce);
    }
    if ball.top() < 0.0 {
        ball.reflect_vertical();
        events.push(GameEvent::CeilingBounce);
    }
}

/// Step 5: has the ball dropped past the floor
#[inline]
pub fn crossed_floor(ball: &Ball, config: &GameConfig) -> bool {
    ball.bottom() > config.field_height
}

/// Run the full collision pass for one tick
pub fn resolve(
    ball: &mut Ball,
    paddle: &Paddle,
    bricks: &mut BrickField,
    config: &GameConfig,
    events: &mut Vec<GameEvent>,
) -> CollisionReport {
    let (points, bricks_destroyed) = resolve_bricks(ball, bricks, events);
    resolve_paddle(ball, paddle, events);
    resolve_walls(ball, config, events);
    let hit_floor = crossed_floor(ball, config);

    CollisionReport {
        points,
        bricks_destroyed,
        hit_floor,
    }
}
