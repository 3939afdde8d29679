//! Game configuration
//!
//! Every field has a default, so a `breakout.toml` only needs the values it
//! changes.

use okna::config::Config;
use okna::foundation::{color::Color, math::Vec2};
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// What happens when the ball crosses a screen edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryMode {
    /// Negate the velocity component and leave the ball where it is
    #[default]
    Flip,
    /// Put the ball back inside the screen and point it away from the edge
    Clamp,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakoutConfig {
    /// Ball settings
    pub ball: BallConfig,

    /// Paddle settings
    pub paddle: PaddleConfig,

    /// Frames per second the loop is paced at
    pub target_fps: f32,

    /// Screen edge behaviour
    pub boundary: BoundaryMode,
}

/// Ball configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    /// Window width
    pub width: u32,

    /// Window height
    pub height: u32,

    /// Starting velocity in pixels per second
    pub velocity: Vec2,

    /// Fill color
    pub color: Color,
}

/// Paddle configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    /// Starting window width
    pub width: u32,

    /// Starting window height
    pub height: u32,

    /// Gap between the paddle and the bottom of the screen
    pub bottom_margin: f32,

    /// Fill color
    pub color: Color,
}

impl Default for BreakoutConfig {
    fn default() -> Self {
        Self {
            ball: BallConfig::default(),
            paddle: PaddleConfig::default(),
            target_fps: 60.0,
            boundary: BoundaryMode::default(),
        }
    }
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            width: 60,
            height: 60,
            velocity: Vec2::new(450.0, -450.0),
            color: Color::MAROON,
        }
    }
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: 200,
            height: 60,
            bottom_margin: 100.0,
            color: Color::VIOLET,
        }
    }
}

impl Config for BreakoutConfig {}

impl BreakoutConfig {
    /// Reject settings the game cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        if !(self.target_fps.is_finite() && self.target_fps > 0.0) {
            return Err(GameError::InvalidConfig(format!(
                "target_fps must be positive, got {}",
                self.target_fps
            )));
        }
        if self.ball.width == 0 || self.ball.height == 0 {
            return Err(GameError::InvalidConfig("ball must have a non-zero size".to_string()));
        }
        if self.paddle.width == 0 || self.paddle.height == 0 {
            return Err(GameError::InvalidConfig("paddle must have a non-zero size".to_string()));
        }
        Ok(())
    }
}
