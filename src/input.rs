//! Input sources
//!
//! The simulation only ever sees a [`TickInput`]. Anything that produces one
//! per frame (keyboard glue, a pointer, a demo AI, a recorded script) plugs
//! in through [`InputSource`].

use std::collections::VecDeque;

use crate::sim::{FrameSnapshot, GameStatus, TickInput};

/// Supplies one input per frame
pub trait InputSource {
    fn next_input(&mut self, frame: &FrameSnapshot) -> TickInput;
}

/// Idle/demo mode - the paddle follows the ball by pointer
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// Max horizontal sway (px) so returns don't settle into a loop
    pub sway: f32,
    /// How far ahead along the ball's heading to aim (px)
    pub lead: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            sway: 30.0,
            lead: 12.0,
        }
    }
}

impl InputSource for Autopilot {
    fn next_input(&mut self, frame: &FrameSnapshot) -> TickInput {
        if frame.status != GameStatus::Playing {
            return TickInput::default();
        }

        // Oscillating offset based on time creates variety in return angles
        let t = frame.tick as f32 * 0.01;
        let offset = (t.sin() * 0.7 + (t * 0.7).sin() * 0.3) * self.sway;

        // Aim slightly ahead of the ball along its heading
        let ahead = frame.ball.pos + frame.ball.vel.normalize_or_zero() * self.lead;

        TickInput::pointer(ahead.x + offset)
    }
}

/// Replays a fixed list of inputs, then idles
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    queue: VecDeque<TickInput>,
}

impl ScriptedInput {
    pub fn new(inputs: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            queue: inputs.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl InputSource for ScriptedInput {
    fn next_input(&mut self, _frame: &FrameSnapshot) -> TickInput {
        self.queue.pop_front().unwrap_or_default()
    }
}
