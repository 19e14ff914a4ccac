//! Rendering module
//!
//! Renderers draw [`FrameSnapshot`]s and never feed anything back into the
//! simulation. [`run_frames`] is the frame scheduler: tick, then draw,
//! strictly alternating.

pub mod text;

pub use text::TextRenderer;

use crate::input::InputSource;
use crate::sim::{FrameSnapshot, GameSession, GameStatus};

/// Anything that can present a frame
pub trait Renderer {
    fn draw(&mut self, frame: &FrameSnapshot);
}

/// Discards every frame (headless runs)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &FrameSnapshot) {}
}

/// Drive a session until it ends or `max_frames` ticks have run
///
/// Draws the starting frame first, then one frame after every tick.
/// Returns the status the session stopped in.
pub fn run_frames(
    session: &mut GameSession,
    input: &mut impl InputSource,
    renderer: &mut impl Renderer,
    max_frames: u64,
) -> GameStatus {
    let mut frame = session.snapshot();
    renderer.draw(&frame);

    for _ in 0..max_frames {
        if session.is_over() {
            break;
        }
        let tick_input = input.next_input(&frame);
        session.tick(&tick_input);
        frame = session.snapshot();
        renderer.draw(&frame);
    }

    session.status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::input::ScriptedInput;

    /// Records every frame it is handed
    #[derive(Default)]
    struct Recorder {
        frames: Vec<FrameSnapshot>,
    }

    impl Renderer for Recorder {
        fn draw(&mut self, frame: &FrameSnapshot) {
            self.frames.push(frame.clone());
        }
    }

    #[test]
    fn test_run_frames_alternates_tick_and_draw() {
        let mut session = GameSession::new(GameConfig::default(), 11).expect("default config is valid");
        let mut recorder = Recorder::default();

        let status = run_frames(&mut session, &mut ScriptedInput::default(), &mut recorder, 20);
        assert_eq!(status, GameStatus::Playing);
        assert_eq!(recorder.frames.len(), 21);
        let ticks: Vec<u64> = recorder.frames.iter().map(|f| f.tick).collect();
        assert_eq!(ticks, (0..=20).collect::<Vec<_>>());
    }

    #[test]
    fn test_run_frames_stops_at_terminal_status() {
        let mut session = GameSession::new(GameConfig::default(), 11).expect("default config is valid");
        session.lives = 1;
        // Idle paddle: the ball eventually drops past the floor
        let status = run_frames(
            &mut session,
            &mut ScriptedInput::default(),
            &mut NullRenderer,
            100_000,
        );
        assert_eq!(status, GameStatus::Lost);
        let stopped_at = session.tick_count;
        assert!(stopped_at < 100_000);

        // Driving a finished session does nothing
        run_frames(&mut session, &mut ScriptedInput::default(), &mut NullRenderer, 10);
        assert_eq!(session.tick_count, stopped_at);
    }
}
