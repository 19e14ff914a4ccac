//! Bricks and the brick grid

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::consts::{BASIC_POINTS, STRONG_BRICK_HITS, STRONG_POINTS};

/// Brick types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickCategory {
    #[default]
    Basic,
    Strong,
    Unbreakable, // Cannot be destroyed, doesn't count for the win
}

impl BrickCategory {
    /// Category for a grid row: top row unbreakable, second strong, rest basic
    pub fn for_row(row: usize) -> Self {
        match row {
            0 => BrickCategory::Unbreakable,
            1 => BrickCategory::Strong,
            _ => BrickCategory::Basic,
        }
    }

    /// Starting hit counter (`None` = unbounded)
    pub fn initial_hits(&self) -> Option<u8> {
        match self {
            BrickCategory::Basic => Some(1),
            BrickCategory::Strong => Some(STRONG_BRICK_HITS),
            BrickCategory::Unbreakable => None,
        }
    }
}

/// What a single hit did to a brick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HitOutcome {
    /// Last hit taken; the brick is now inactive
    Destroyed,
    /// Took a hit but still standing
    Damaged,
    /// Unbreakable (or already inactive); nothing changed
    Deflected,
}

impl HitOutcome {
    #[inline]
    pub fn destroyed(&self) -> bool {
        matches!(self, HitOutcome::Destroyed)
    }
}

/// A brick entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub row: usize,
    pub col: usize,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    pub category: BrickCategory,
    pub hits_remaining: Option<u8>,
    pub active: bool,
}

impl Brick {
    pub fn new(row: usize, col: usize, pos: Vec2, size: Vec2, category: BrickCategory) -> Self {
        Self {
            row,
            col,
            pos,
            size,
            category,
            hits_remaining: category.initial_hits(),
            active: true,
        }
    }

    /// Register a ball hit. The only mutator of hit state.
    pub fn hit(&mut self) -> HitOutcome {
        if !self.active {
            return HitOutcome::Deflected;
        }
        let Some(hits) = self.hits_remaining.as_mut() else {
            return HitOutcome::Deflected;
        };
        *hits = hits.saturating_sub(1);
        if *hits == 0 {
            self.active = false;
            HitOutcome::Destroyed
        } else {
            HitOutcome::Damaged
        }
    }

    /// Points awarded when this brick is destroyed
    pub fn points(&self) -> u64 {
        match self.category {
            BrickCategory::Strong => STRONG_POINTS,
            _ => BASIC_POINTS,
        }
    }

    /// Returns true if this brick must be destroyed to win
    #[inline]
    pub fn counts_for_clear(&self) -> bool {
        self.category != BrickCategory::Unbreakable
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }
}

/// Fixed rows x cols grid of bricks, stored row-major
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickField {
    pub rows: usize,
    pub cols: usize,
    pub bricks: Vec<Brick>,
}

impl BrickField {
    /// Lay out a fresh grid from the config
    pub fn build(config: &GameConfig) -> Self {
        let size = Vec2::new(config.brick_width, config.brick_height);
        let pitch = size + Vec2::splat(config.brick_padding);
        let origin = Vec2::new(config.brick_offset_left, config.brick_offset_top);

        let mut bricks = Vec::with_capacity(config.brick_rows * config.brick_cols);
        for row in 0..config.brick_rows {
            let category = BrickCategory::for_row(row);
            for col in 0..config.brick_cols {
                let pos = origin + Vec2::new(col as f32, row as f32) * pitch;
                bricks.push(Brick::new(row, col, pos, size, category));
            }
        }

        Self {
            rows: config.brick_rows,
            cols: config.brick_cols,
            bricks,
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Brick> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.bricks.get(row * self.cols + col)
    }

    /// Bricks still taking part in collision and rendering
    pub fn active(&self) -> impl Iterator<Item = &Brick> {
        self.bricks.iter().filter(|b| b.active)
    }

    /// Active bricks that still have to be destroyed
    pub fn remaining_breakable(&self) -> usize {
        self.active().filter(|b| b.counts_for_clear()).count()
    }

    /// True once every breakable brick is gone
    pub fn is_cleared(&self) -> bool {
        self.remaining_breakable() == 0
    }
}
