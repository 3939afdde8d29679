//! Per-frame ball update
//!
//! The game itself only owns the ball's velocity. Positions live in the
//! windows: each frame the loop hands in the rectangles it synced from the
//! OS, and writes the moved ball back out.

use okna::foundation::math::{Rect, Vec2};

use crate::collision::reflect;
use crate::config::{BoundaryMode, BreakoutConfig};

/// Starting rectangles for the paddle and the ball
///
/// The paddle is centered horizontally, `bottom_margin` above the bottom of
/// the screen; the ball sits centered on top of it.
pub fn initial_layout(config: &BreakoutConfig, screen: Vec2) -> (Rect, Rect) {
    let (bar_w, bar_h) = (config.paddle.width as f32, config.paddle.height as f32);
    let (ball_w, ball_h) = (config.ball.width as f32, config.ball.height as f32);

    let paddle = Rect::new(
        (screen.x - bar_w) / 2.0,
        screen.y - bar_h - config.paddle.bottom_margin,
        bar_w,
        bar_h,
    );
    let ball = Rect::new((screen.x - ball_w) / 2.0, paddle.top() - ball_h, ball_w, ball_h);
    (paddle, ball)
}

/// Ball motion state
#[derive(Debug, Clone, PartialEq)]
pub struct Breakout {
    velocity: Vec2,
    screen: Vec2,
    boundary: BoundaryMode,
}

impl Breakout {
    /// Ball moving at `velocity` inside a `screen`-sized area
    pub const fn new(velocity: Vec2, screen: Vec2, boundary: BoundaryMode) -> Self {
        Self {
            velocity,
            screen,
            boundary,
        }
    }

    /// Current ball velocity in pixels per second
    pub const fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Advance the ball by one frame of `dt` seconds
    ///
    /// Moves the ball, bounces it off the screen edges, then off the paddle.
    /// Returns whether the paddle was hit.
    pub fn step(&mut self, ball: &mut Rect, paddle: &Rect, dt: f32) -> bool {
        ball.position += self.velocity * dt;
        self.bounce_off_screen(ball);
        reflect(ball, paddle, &mut self.velocity)
    }

    /// Handle the ball crossing a screen edge
    ///
    /// In [`BoundaryMode::Flip`] the crossed axis's velocity is negated and
    /// the ball stays put, so it may travel further out before the flip
    /// shows. [`BoundaryMode::Clamp`] also puts it back on screen.
    pub fn bounce_off_screen(&mut self, ball: &mut Rect) {
        let out_left = ball.left() < 0.0;
        let out_right = ball.right() >= self.screen.x;
        let out_top = ball.top() < 0.0;
        let out_bottom = ball.bottom() >= self.screen.y;

        match self.boundary {
            BoundaryMode::Flip => {
                if out_left || out_right {
                    self.velocity.x = -self.velocity.x;
                }
                if out_top || out_bottom {
                    self.velocity.y = -self.velocity.y;
                }
            }
            BoundaryMode::Clamp => {
                if out_left {
                    ball.position.x = 0.0;
                    self.velocity.x = self.velocity.x.abs();
                } else if out_right {
                    ball.position.x = self.screen.x - ball.width;
                    self.velocity.x = -self.velocity.x.abs();
                }
                if out_top {
                    ball.position.y = 0.0;
                    self.velocity.y = self.velocity.y.abs();
                } else if out_bottom {
                    ball.position.y = self.screen.y - ball.height;
                    self.velocity.y = -self.velocity.y.abs();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn screen() -> Vec2 {
        Vec2::new(1920.0, 1080.0)
    }

    fn paddle() -> Rect {
        Rect::new(100.0, 400.0, 200.0, 60.0)
    }

    #[test]
    fn test_initial_layout_stacks_ball_on_paddle() {
        let (paddle, ball) = initial_layout(&BreakoutConfig::default(), screen());

        assert_eq!(paddle, Rect::new(860.0, 920.0, 200.0, 60.0));
        assert_eq!(ball, Rect::new(930.0, 860.0, 60.0, 60.0));
        assert_relative_eq!(ball.bottom(), paddle.top());
    }

    #[test]
    fn test_step_moves_ball_by_velocity() {
        let mut game = Breakout::new(Vec2::new(0.0, -450.0), screen(), BoundaryMode::Flip);
        let mut ball = Rect::new(100.0, 100.0, 60.0, 60.0);

        let hit = game.step(&mut ball, &paddle(), 0.1);

        assert!(!hit);
        assert_relative_eq!(ball.position.x, 100.0);
        assert_relative_eq!(ball.position.y, 55.0, epsilon = 1e-4);
        assert_eq!(game.velocity(), Vec2::new(0.0, -450.0));
    }

    #[test]
    fn test_step_bounces_off_paddle_top() {
        let mut game = Breakout::new(Vec2::new(0.0, 450.0), screen(), BoundaryMode::Flip);
        let mut ball = Rect::new(100.0, 395.0, 60.0, 60.0);

        let hit = game.step(&mut ball, &paddle(), 0.0);

        assert!(hit);
        assert_relative_eq!(ball.position.y, 340.0);
        assert!(game.velocity().y < 0.0);
    }

    #[test]
    fn test_flip_mode_negates_without_moving() {
        let mut game = Breakout::new(Vec2::new(-450.0, 0.0), screen(), BoundaryMode::Flip);
        let mut ball = Rect::new(-70.0, 100.0, 60.0, 60.0);

        game.bounce_off_screen(&mut ball);

        assert_eq!(game.velocity(), Vec2::new(450.0, 0.0));
        assert_eq!(ball.position, Vec2::new(-70.0, 100.0));
    }

    #[test]
    fn test_flip_mode_keeps_flipping_while_outside() {
        let mut game = Breakout::new(Vec2::new(-450.0, 0.0), screen(), BoundaryMode::Flip);
        let mut ball = Rect::new(-70.0, 100.0, 60.0, 60.0);

        game.bounce_off_screen(&mut ball);
        game.bounce_off_screen(&mut ball);

        assert_eq!(game.velocity(), Vec2::new(-450.0, 0.0));
    }

    #[test]
    fn test_flip_mode_bottom_and_right_edges() {
        let mut game = Breakout::new(Vec2::new(450.0, 450.0), screen(), BoundaryMode::Flip);
        let mut ball = Rect::new(1860.0, 1020.0, 60.0, 60.0);

        game.bounce_off_screen(&mut ball);

        assert_eq!(game.velocity(), Vec2::new(-450.0, -450.0));
    }

    #[test]
    fn test_clamp_mode_repositions_and_points_inward() {
        let mut game = Breakout::new(Vec2::new(-450.0, 450.0), screen(), BoundaryMode::Clamp);
        let mut ball = Rect::new(-70.0, 1050.0, 60.0, 60.0);

        game.bounce_off_screen(&mut ball);
        assert_eq!(ball.position, Vec2::new(0.0, 1020.0));
        assert_eq!(game.velocity(), Vec2::new(450.0, -450.0));

        // Still touching the bottom edge: direction must not change again.
        game.bounce_off_screen(&mut ball);
        assert_eq!(game.velocity(), Vec2::new(450.0, -450.0));
    }

    #[test]
    fn test_ball_inside_screen_is_untouched() {
        let mut game = Breakout::new(Vec2::new(450.0, -450.0), screen(), BoundaryMode::Clamp);
        let mut ball = Rect::new(500.0, 500.0, 60.0, 60.0);

        game.bounce_off_screen(&mut ball);

        assert_eq!(ball.position, Vec2::new(500.0, 500.0));
        assert_eq!(game.velocity(), Vec2::new(450.0, -450.0));
    }
}
