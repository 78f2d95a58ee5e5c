//! Basic geometry types.

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A size in 2D space (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// A zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size is empty (zero or negative area).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Scale by `factor` and round to whole pixels, never below 1x1.
    pub fn to_pixels(self, factor: f64) -> (u32, u32) {
        let width = (self.width as f64 * factor).round() as u32;
        let height = (self.height as f64 * factor).round() as u32;
        (width.max(1), height.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(0.0, 48.0).is_empty());
        assert!(!Size::new(48.0, 48.0).is_empty());
    }

    #[test]
    fn test_size_to_pixels() {
        assert_eq!(Size::new(48.0, 48.0).to_pixels(2.0), (96, 96));
        assert_eq!(Size::new(48.0, 48.0).to_pixels(1.5), (72, 72));
        assert_eq!(Size::new(48.0, 48.0).to_pixels(0.0), (1, 1));
    }
}
