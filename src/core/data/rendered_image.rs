use crate::core::data::colour::Colour;
use crate::core::data::pixel_size::PixelSize;
use thiserror::Error;

const BYTES_PER_PIXEL: usize = 4;

fn size_to_buffer_len(size: PixelSize) -> usize {
    size.area() * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderedImageError {
    #[error("pixel at x:{x}, y:{y} outside of image bounds {width}x{height}")]
    PixelOutsideBounds {
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },
}

pub type RenderedImageData = Vec<u8>;

/// A row-major RGBA image produced by one render pass.
///
/// Dimensions are device pixels; `pixel_density` records how many device
/// pixels make up one logical pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedImage {
    size: PixelSize,
    pixel_density: f64,
    pixels: RenderedImageData,
}

impl RenderedImage {
    /// Allocates an opaque black image.
    #[must_use]
    pub fn new(size: PixelSize, pixel_density: f64) -> Self {
        let mut pixels = vec![0; size_to_buffer_len(size)];
        for chunk in pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&Colour::BLACK.to_rgba());
        }

        Self {
            size,
            pixel_density,
            pixels,
        }
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[must_use]
    pub fn width(&self) -> i32 {
        self.size.width
    }

    #[must_use]
    pub fn height(&self) -> i32 {
        self.size.height
    }

    #[must_use]
    pub fn pixel_density(&self) -> f64 {
        self.pixel_density
    }

    /// Size in logical pixels, i.e. the size the image occupies on screen.
    #[must_use]
    pub fn logical_size(&self) -> PixelSize {
        self.size.scaled_by(1.0 / self.pixel_density)
    }

    #[must_use]
    pub fn pixels(&self) -> &RenderedImageData {
        &self.pixels
    }

    #[must_use]
    pub fn into_pixels(self) -> RenderedImageData {
        self.pixels
    }

    /// Mutable RGBA bytes of one row.
    ///
    /// # Panics
    ///
    /// Panics if `row` is outside the image.
    pub fn scan_line_mut(&mut self, row: i32) -> &mut [u8] {
        let stride = self.size.width as usize * BYTES_PER_PIXEL;
        let start = row as usize * stride;
        &mut self.pixels[start..start + stride]
    }

    pub fn pixel(&self, x: i32, y: i32) -> Result<Colour, RenderedImageError> {
        if x < 0 || y < 0 || x >= self.size.width || y >= self.size.height {
            return Err(RenderedImageError::PixelOutsideBounds {
                x,
                y,
                width: self.size.width,
                height: self.size.height,
            });
        }

        let index = (y as usize * self.size.width as usize + x as usize) * BYTES_PER_PIXEL;

        Ok(Colour {
            r: self.pixels[index],
            g: self.pixels[index + 1],
            b: self.pixels[index + 2],
        })
    }

    /// True when every pixel has the same colour.
    #[must_use]
    pub fn is_uniform(&self) -> bool {
        let mut chunks = self.pixels.chunks_exact(BYTES_PER_PIXEL);
        match chunks.next() {
            Some(first) => chunks.all(|chunk| chunk == first),
            None => true,
        }
    }
}
