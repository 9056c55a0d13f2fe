/// Viewport size in pixels.
///
/// The board is mapped onto the viewport in normalized device coordinates,
/// so only its shape matters to the renderer: cells are square only when the
/// viewport is.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square viewport of side `size`.
    #[inline]
    pub const fn square(size: f32) -> Self {
        Self { width: size, height: size }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub fn is_square(self) -> bool {
        self.width == self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_constructor_is_square() {
        assert!(Viewport::square(720.0).is_square());
        assert!(!Viewport::new(720.0, 480.0).is_square());
    }

    #[test]
    fn validity() {
        assert!(Viewport::new(1.0, 1.0).is_valid());
        assert!(!Viewport::new(0.0, 1.0).is_valid());
        assert!(!Viewport::new(f32::INFINITY, 1.0).is_valid());
    }
}
