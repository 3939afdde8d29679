//! Math utilities and types
//!
//! Provides the 2D types used for window placement and screen-space
//! collision.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// An axis-aligned rectangle in screen coordinates
///
/// The origin is the top-left corner and y grows downwards, matching the
/// desktop coordinate system GLFW reports window positions in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub position: Vec2,
    /// Extent along x
    pub width: f32,
    /// Extent along y
    pub height: f32,
}

impl Rect {
    /// Create a rectangle from its top-left corner and extents
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            width,
            height,
        }
    }

    /// Create a rectangle at `position` with the given extents
    pub const fn from_position(position: Vec2, width: f32, height: f32) -> Self {
        Self {
            position,
            width,
            height,
        }
    }

    /// Left edge
    pub fn left(&self) -> f32 {
        self.position.x
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.position.x + self.width
    }

    /// Top edge
    pub fn top(&self) -> f32 {
        self.position.y
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.position.y + self.height
    }

    /// Extents as a vector
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Whether the two rectangles overlap
    ///
    /// Only a strict gap on some axis separates them; rectangles sharing an
    /// edge count as intersecting.
    pub fn intersects(&self, other: &Self) -> bool {
        !(self.right() < other.left()
            || self.left() > other.right()
            || self.bottom() < other.top()
            || self.top() > other.bottom())
    }
}
