//! RGBA colors used to fill windows

use serde::{Deserialize, Serialize};

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque black
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Violet
    pub const VIOLET: Self = Self::new(135, 60, 190, 255);
    /// Maroon
    pub const MAROON: Self = Self::new(190, 33, 55, 255);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Channels normalized to `0.0..=1.0`, in RGBA order
    pub fn to_normalized(self) -> [f32; 4] {
        [
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        ]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalized_channels() {
        let [r, g, b, a] = Color::VIOLET.to_normalized();

        assert_relative_eq!(r, 135.0 / 255.0);
        assert_relative_eq!(g, 60.0 / 255.0);
        assert_relative_eq!(b, 190.0 / 255.0);
        assert_relative_eq!(a, 1.0);
    }

    #[test]
    fn test_default_is_opaque_black() {
        assert_eq!(Color::default(), Color::BLACK);
        assert_eq!(Color::from([0, 0, 0, 255]), Color::BLACK);
    }
}
