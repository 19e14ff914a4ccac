//! Character-grid renderer
//!
//! Rasterizes a frame into a fixed grid of cells, one glyph per cell. Used by
//! the native binary and handy in test failure output.

use glam::Vec2;

use super::Renderer;
use crate::sim::{BrickCategory, FrameSnapshot, GameStatus};

const EMPTY: char = ' ';
const BALL: char = 'o';
const PADDLE: char = '=';

fn brick_glyph(category: BrickCategory, hits_remaining: Option<u8>) -> char {
    match (category, hits_remaining) {
        (BrickCategory::Unbreakable, _) => '#',
        (BrickCategory::Strong, Some(hits)) if hits > 1 => '%',
        // Cracked strong bricks look like basic ones
        _ => '+',
    }
}

/// Renders frames as text, keeping the most recent one
#[derive(Debug, Clone)]
pub struct TextRenderer {
    pub columns: usize,
    pub rows: usize,
    last: String,
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(80, 30)
    }
}

impl TextRenderer {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns: columns.max(1),
            rows: rows.max(1),
            last: String::new(),
        }
    }

    /// Most recently drawn frame
    pub fn output(&self) -> &str {
        &self.last
    }

    /// Rasterize a frame into lines (HUD line first)
    pub fn render(&self, frame: &FrameSnapshot) -> String {
        let mut grid = vec![vec![EMPTY; self.columns]; self.rows];
        let cell = Vec2::new(
            frame.field_size.x / self.columns as f32,
            frame.field_size.y / self.rows as f32,
        );

        for brick in &frame.bricks {
            let glyph = brick_glyph(brick.category, brick.hits_remaining);
            self.fill(&mut grid, brick.pos, brick.pos + brick.size, cell, glyph);
        }
        let paddle = &frame.paddle;
        self.fill(&mut grid, paddle.pos, paddle.pos + paddle.size, cell, PADDLE);

        if let Some((col, row)) = self.cell_of(frame.ball.pos, cell) {
            grid[row][col] = BALL;
        }

        let status = match frame.status {
            GameStatus::Playing => "",
            GameStatus::Won => "  YOU WIN",
            GameStatus::Lost => "  GAME OVER",
        };
        let mut out = format!(
            "score {:>6}  lives {}  tick {}{}\n",
            frame.score, frame.lives, frame.tick, status
        );
        let border: String = std::iter::repeat_n('-', self.columns + 2).collect();
        out.push_str(&border);
        out.push('\n');
        for line in grid {
            out.push('|');
            out.extend(line);
            out.push_str("|\n");
        }
        out.push_str(&border);
        out
    }

    fn cell_of(&self, point: Vec2, cell: Vec2) -> Option<(usize, usize)> {
        if point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let col = (point.x / cell.x) as usize;
        let row = (point.y / cell.y) as usize;
        (col < self.columns && row < self.rows).then_some((col, row))
    }

    /// Paint every cell whose center lies inside `[min, max)`; thin rects get at least one cell
    fn fill(&self, grid: &mut [Vec<char>], min: Vec2, max: Vec2, cell: Vec2, glyph: char) {
        let mut painted = false;
        for (row, line) in grid.iter_mut().enumerate() {
            let cy = (row as f32 + 0.5) * cell.y;
            if cy < min.y || cy >= max.y {
                continue;
            }
            for (col, slot) in line.iter_mut().enumerate() {
                let cx = (col as f32 + 0.5) * cell.x;
                if cx >= min.x && cx < max.x {
                    *slot = glyph;
                    painted = true;
                }
            }
        }
        if !painted && let Some((col, row)) = self.cell_of((min + max) / 2.0, cell) {
            grid[row][col] = glyph;
        }
    }
}

impl Renderer for TextRenderer {
    fn draw(&mut self, frame: &FrameSnapshot) {
        self.last = self.render(frame);
    }
}
