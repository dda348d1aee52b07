/// Width and height of an output surface, in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelSize {
    pub width: i32,
    pub height: i32,
}

impl PixelSize {
    #[must_use]
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True when there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[must_use]
    pub fn area(&self) -> usize {
        if self.is_empty() {
            return 0;
        }

        self.width as usize * self.height as usize
    }

    /// Converts a logical size into device pixels, rounding each dimension.
    #[must_use]
    pub fn scaled_by(&self, pixel_density: f64) -> Self {
        Self {
            width: (f64::from(self.width) * pixel_density).round() as i32,
            height: (f64::from(self.height) * pixel_density).round() as i32,
        }
    }
}
