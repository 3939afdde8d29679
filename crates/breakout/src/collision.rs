//! Box-against-box collision for the ball
//!
//! The ball and the paddle are both axis-aligned rectangles. A hit is
//! classified by the face of the obstacle the ball ran into, judged by
//! which axis penetrates least.

use okna::foundation::math::{Rect, Vec2};

/// Face of the obstacle the ball hit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// Ball came in from the obstacle's left side
    Left,
    /// Ball came in from the obstacle's right side
    Right,
    /// Ball came down onto the obstacle's top
    Top,
    /// Ball came up into the obstacle's bottom
    Bottom,
    /// No overlap
    None,
}

/// Classify how `a` overlaps `b`
///
/// Per axis, the penetration depth is the smallest of the two edge
/// distances and their sum minus the larger extent (which covers one box
/// containing the other). The shallower axis wins; equal depths resolve to
/// a side hit.
pub fn collide(a: &Rect, b: &Rect) -> Collision {
    if !a.intersects(b) {
        return Collision::None;
    }

    let dx = penetration(a.right() - b.left(), b.right() - a.left(), a.width.max(b.width));
    let dy = penetration(a.bottom() - b.top(), b.bottom() - a.top(), a.height.max(b.height));

    if dx > dy {
        let dist_top = a.bottom() - b.top();
        let dist_bottom = b.bottom() - a.top();
        if dist_top <= dist_bottom {
            Collision::Top
        } else {
            Collision::Bottom
        }
    } else {
        let dist_left = a.right() - b.left();
        let dist_right = b.right() - a.left();
        if dist_left <= dist_right {
            Collision::Left
        } else {
            Collision::Right
        }
    }
}

fn penetration(near: f32, far: f32, larger_extent: f32) -> f32 {
    let (near, far) = (near.abs(), far.abs());
    near.min(far).min(near + far - larger_extent)
}

/// Bounce `ball` off `obstacle`
///
/// The velocity component along the hit axis is forced away from the
/// obstacle rather than negated, so a ball still touching the obstacle on
/// the next frame cannot be turned back into it. The ball is moved flush
/// against the face it hit. Returns whether there was a collision.
pub fn reflect(ball: &mut Rect, obstacle: &Rect, velocity: &mut Vec2) -> bool {
    let hit = collide(ball, obstacle);
    match hit {
        Collision::Left => {
            velocity.x = -velocity.x.abs();
            ball.position.x = obstacle.left() - ball.width;
        }
        Collision::Right => {
            velocity.x = velocity.x.abs();
            ball.position.x = obstacle.right();
        }
        Collision::Top => {
            velocity.y = -velocity.y.abs();
            ball.position.y = obstacle.top() - ball.height;
        }
        Collision::Bottom => {
            velocity.y = velocity.y.abs();
            ball.position.y = obstacle.bottom();
        }
        Collision::None => return false,
    }

    log::trace!("Ball hit {hit:?} face, velocity now {velocity:?}");
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn paddle() -> Rect {
        Rect::new(100.0, 400.0, 200.0, 60.0)
    }

    #[test]
    fn test_ball_above_paddle_misses() {
        let ball = Rect::new(100.0, 100.0, 60.0, 60.0);

        assert_eq!(collide(&ball, &paddle()), Collision::None);
    }

    #[test]
    fn test_ball_landing_on_paddle_hits_top() {
        let mut ball = Rect::new(100.0, 395.0, 60.0, 60.0);
        let mut velocity = Vec2::new(0.0, 450.0);

        assert_eq!(collide(&ball, &paddle()), Collision::Top);
        assert!(reflect(&mut ball, &paddle(), &mut velocity));

        assert_relative_eq!(ball.position.y, 340.0);
        assert_relative_eq!(ball.position.x, 100.0);
        assert!(velocity.y < 0.0);
        assert_relative_eq!(velocity.y, -450.0);
    }

    #[test]
    fn test_ball_rising_into_paddle_hits_bottom() {
        let mut ball = Rect::new(150.0, 455.0, 60.0, 60.0);
        let mut velocity = Vec2::new(100.0, -450.0);

        assert!(reflect(&mut ball, &paddle(), &mut velocity));

        assert_relative_eq!(ball.position.y, 460.0);
        assert_relative_eq!(velocity.y, 450.0);
        assert_relative_eq!(velocity.x, 100.0);
    }

    #[test]
    fn test_side_hits() {
        let obstacle = paddle();

        let mut from_left = Rect::new(45.0, 410.0, 60.0, 40.0);
        let mut velocity = Vec2::new(300.0, 50.0);
        assert_eq!(collide(&from_left, &obstacle), Collision::Left);
        assert!(reflect(&mut from_left, &obstacle, &mut velocity));
        assert_relative_eq!(from_left.position.x, 40.0);
        assert_relative_eq!(velocity.x, -300.0);

        let mut from_right = Rect::new(295.0, 410.0, 60.0, 40.0);
        let mut velocity = Vec2::new(-300.0, 50.0);
        assert_eq!(collide(&from_right, &obstacle), Collision::Right);
        assert!(reflect(&mut from_right, &obstacle, &mut velocity));
        assert_relative_eq!(from_right.position.x, 300.0);
        assert_relative_eq!(velocity.x, 300.0);
    }

    #[test]
    fn test_equal_depths_resolve_to_side_hit() {
        let obstacle = Rect::new(0.0, 0.0, 100.0, 100.0);
        let ball = Rect::new(-50.0, -50.0, 60.0, 60.0);

        assert_eq!(collide(&ball, &obstacle), Collision::Left);
    }

    #[test]
    fn test_velocity_sign_is_forced_not_flipped() {
        let mut ball = Rect::new(100.0, 341.0, 60.0, 60.0);
        // Already moving away: a second contact must not send it back down.
        let mut velocity = Vec2::new(0.0, -450.0);

        assert!(reflect(&mut ball, &paddle(), &mut velocity));
        assert!(reflect(&mut ball, &paddle(), &mut velocity));

        assert_relative_eq!(velocity.y, -450.0);
        assert_relative_eq!(ball.position.y, 340.0);
    }

    #[test]
    fn test_separated_boxes_never_collide() {
        let obstacle = paddle();
        let mut velocity = Vec2::new(450.0, -450.0);
        for &(x, y) in &[
            (0.0, 0.0),
            (39.0, 400.0),
            (301.0, 400.0),
            (150.0, 339.0),
            (150.0, 461.0),
            (-500.0, 1000.0),
        ] {
            let mut ball = Rect::new(x, y, 60.0, 60.0);
            assert_eq!(collide(&ball, &obstacle), Collision::None, "ball at ({x}, {y})");
            assert!(!reflect(&mut ball, &obstacle, &mut velocity));
            assert_eq!(ball.position, Vec2::new(x, y));
        }
        assert_eq!(velocity, Vec2::new(450.0, -450.0));
    }

    #[test]
    fn test_overlaps_classify_deterministically_and_separate() {
        let obstacle = paddle();
        for step_x in 0..=26 {
            for step_y in 0..=12 {
                let x = 40.0 + step_x as f32 * 10.0;
                let y = 340.0 + step_y as f32 * 10.0;
                let ball = Rect::new(x, y, 60.0, 60.0);

                let first = collide(&ball, &obstacle);
                assert_ne!(first, Collision::None, "ball at ({x}, {y})");
                assert_eq!(collide(&ball, &obstacle), first);

                let mut reflected = ball;
                let mut velocity = Vec2::new(450.0, -450.0);
                assert!(reflect(&mut reflected, &obstacle, &mut velocity));
                match first {
                    Collision::Left => assert!(reflected.right() <= obstacle.left()),
                    Collision::Right => assert!(reflected.left() >= obstacle.right()),
                    Collision::Top => assert!(reflected.bottom() <= obstacle.top()),
                    Collision::Bottom => assert!(reflected.top() >= obstacle.bottom()),
                    Collision::None => unreachable!(),
                }
            }
        }
    }

    #[test]
    fn test_ball_containing_obstacle_still_classifies() {
        let big = Rect::new(0.0, 0.0, 500.0, 100.0);
        let small = Rect::new(200.0, 20.0, 50.0, 50.0);

        assert_ne!(collide(&big, &small), Collision::None);
    }
}
