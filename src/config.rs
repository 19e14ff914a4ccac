//! Game configuration
//!
//! Every layout and tuning value the simulation reads lives here. A config is
//! immutable once handed to a session; load one from JSON (missing fields
//! fall back to the defaults in [`crate::consts`]) or use `Default`.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors raised while loading or validating a [`GameConfig`]
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    NonPositive { field: &'static str },
    PaddleTooWide { width: f32, field_width: f32 },
    BrickGridOverflow { needed: f32, available: f32 },
    NoBreakableRows { rows: usize },
    ZeroLives,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "failed to read config: {err}"),
            Self::Parse(err) => write!(f, "invalid config json: {err}"),
            Self::NonPositive { field } => write!(f, "`{field}` must be a positive number"),
            Self::PaddleTooWide { width, field_width } => write!(
                f,
                "paddle width {width} does not fit in field width {field_width}"
            ),
            Self::BrickGridOverflow { needed, available } => write!(
                f,
                "brick grid needs {needed}px of width but only {available}px are available"
            ),
            Self::NoBreakableRows { rows } => write!(
                f,
                "brick grid has {rows} row(s); at least 2 are needed for a breakable brick"
            ),
            Self::ZeroLives => write!(f, "`initial_lives` must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Immutable layout and tuning for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-axis speed applied on reset
    pub ball_speed: f32,
    /// Height of the ball center above the paddle's resting top edge
    pub ball_start_offset: f32,

    // === Paddle ===
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub paddle_bottom_offset: f32,

    // === Bricks ===
    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_width: f32,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_offset_top: f32,
    pub brick_offset_left: f32,

    // === Rules ===
    pub initial_lives: u8,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,
            ball_start_offset: BALL_START_OFFSET,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_speed: PADDLE_SPEED,
            paddle_bottom_offset: PADDLE_BOTTOM_OFFSET,

            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_offset_top: BRICK_OFFSET_TOP,
            brick_offset_left: BRICK_OFFSET_LEFT,

            initial_lives: INITIAL_LIVES,
        }
    }
}

impl GameConfig {
    /// Parse and validate a config from JSON text
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load a config file, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("{err}; using default config");
                Self::default()
            }
        }
    }

    /// Check that the layout is playable
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ball_radius", self.ball_radius),
            ("ball_speed", self.ball_speed),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("brick_width", self.brick_width),
            ("brick_height", self.brick_height),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositive { field });
            }
        }
        if self.brick_cols == 0 {
            return Err(ConfigError::NonPositive { field: "brick_cols" });
        }

        if self.paddle_width > self.field_width {
            return Err(ConfigError::PaddleTooWide {
                width: self.paddle_width,
                field_width: self.field_width,
            });
        }

        let needed = self.brick_offset_left + self.brick_grid_width();
        if needed > self.field_width {
            return Err(ConfigError::BrickGridOverflow {
                needed,
                available: self.field_width,
            });
        }

        if self.brick_rows < 2 {
            return Err(ConfigError::NoBreakableRows {
                rows: self.brick_rows,
            });
        }

        if self.initial_lives == 0 {
            return Err(ConfigError::ZeroLives);
        }

        Ok(())
    }

    /// Total width spanned by the brick columns (no trailing padding)
    pub fn brick_grid_width(&self) -> f32 {
        let cols = self.brick_cols as f32;
        cols * self.brick_width + (cols - 1.0).max(0.0) * self.brick_padding
    }

    /// Top edge of the paddle at rest
    #[inline]
    pub fn paddle_rest_y(&self) -> f32 {
        self.field_height - self.paddle_height - self.paddle_bottom_offset
    }

    /// Largest legal paddle x (left edge)
    #[inline]
    pub fn paddle_max_x(&self) -> f32 {
        self.field_width - self.paddle_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(r#"{ "ball_speed": 6.0, "initial_lives": 5 }"#)
            .expect("partial config should parse");
        assert_eq!(config.ball_speed, 6.0);
        assert_eq!(config.initial_lives, 5);
        assert_eq!(config.field_width, FIELD_WIDTH);
        assert_eq!(config.brick_rows, BRICK_ROWS);
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_overflowing_grid() {
        let config = GameConfig {
            brick_cols: 20,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::BrickGridOverflow { .. }));
        assert!(err.to_string().contains("brick grid needs"));
    }

    #[test]
    fn test_rejects_single_row_grid() {
        let config = GameConfig {
            brick_rows: 1,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoBreakableRows { rows: 1 })
        ));
    }

    #[test]
    fn test_rejects_non_positive_and_nan() {
        let config = GameConfig {
            ball_radius: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "ball_radius" })
        ));

        let config = GameConfig {
            paddle_speed: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "paddle_speed" })
        ));
    }

    #[test]
    fn test_rejects_zero_lives_and_wide_paddle() {
        let config = GameConfig {
            initial_lives: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroLives)));

        let config = GameConfig {
            paddle_width: 900.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::PaddleTooWide { .. })
        ));
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let config = GameConfig::load_or_default("/nonexistent/brick-breaker.json");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_derived_geometry() {
        let config = GameConfig::default();
        assert_eq!(config.paddle_rest_y(), 600.0 - 12.0 - 30.0);
        assert_eq!(config.paddle_max_x(), 700.0);
        assert_eq!(config.brick_grid_width(), 9.0 * 75.0 + 8.0 * 10.0);
    }
}
