use crate::core::data::pixel_size::PixelSize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RenderParametersError {
    #[error("center ({x}, {y}) must be finite")]
    NonFiniteCenter { x: f64, y: f64 },
    #[error("scale {0} must be finite and greater than zero")]
    InvalidScale(f64),
    #[error("pixel density {0} must be finite and greater than zero")]
    InvalidPixelDensity(f64),
    #[error("output size {width}x{height} must not be negative")]
    NegativeSize { width: i32, height: i32 },
}

/// A snapshot of everything the worker needs for one render cycle.
///
/// Immutable once captured. `PartialEq` lets the request channel coalesce
/// repeated submissions of the same view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParameters {
    center_x: f64,
    center_y: f64,
    scale: f64,
    output_size: PixelSize,
    pixel_density: f64,
}

impl RenderParameters {
    pub fn new(
        center_x: f64,
        center_y: f64,
        scale: f64,
        output_size: PixelSize,
        pixel_density: f64,
    ) -> Result<Self, RenderParametersError> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(RenderParametersError::NonFiniteCenter {
                x: center_x,
                y: center_y,
            });
        }

        if !scale.is_finite() || scale <= 0.0 {
            return Err(RenderParametersError::InvalidScale(scale));
        }

        if !pixel_density.is_finite() || pixel_density <= 0.0 {
            return Err(RenderParametersError::InvalidPixelDensity(pixel_density));
        }

        if output_size.width < 0 || output_size.height < 0 {
            return Err(RenderParametersError::NegativeSize {
                width: output_size.width,
                height: output_size.height,
            });
        }

        Ok(Self {
            center_x,
            center_y,
            scale,
            output_size,
            pixel_density,
        })
    }

    #[must_use]
    pub fn center_x(&self) -> f64 {
        self.center_x
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.center_y
    }

    /// Plane units per logical pixel, as requested by the caller.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn output_size(&self) -> PixelSize {
        self.output_size
    }

    #[must_use]
    pub fn pixel_density(&self) -> f64 {
        self.pixel_density
    }

    /// Derives the device-pixel geometry used for one render cycle.
    #[must_use]
    pub fn geometry(&self) -> FrameGeometry {
        let device_size = self.output_size.scaled_by(self.pixel_density);

        FrameGeometry {
            center_x: self.center_x,
            center_y: self.center_y,
            scale: self.scale / self.pixel_density,
            requested_scale: self.scale,
            half_width: device_size.width / 2,
            half_height: device_size.height / 2,
            device_size,
            pixel_density: self.pixel_density,
        }
    }
}

/// Worker-local copy of the per-cycle values derived from [`RenderParameters`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    pub center_x: f64,
    pub center_y: f64,
    /// Plane units per device pixel.
    pub scale: f64,
    /// Scale as submitted, before dividing by the pixel density.
    pub requested_scale: f64,
    pub half_width: i32,
    pub half_height: i32,
    pub device_size: PixelSize,
    pub pixel_density: f64,
}

impl FrameGeometry {
    /// Plane coordinate of a device pixel column.
    #[inline]
    #[must_use]
    pub fn plane_x(&self, column: i32) -> f64 {
        self.center_x + f64::from(column - self.half_width) * self.scale
    }

    /// Plane coordinate of a device pixel row.
    #[inline]
    #[must_use]
    pub fn plane_y(&self, row: i32) -> f64 {
        self.center_y + f64::from(row - self.half_height) * self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(scale: f64, width: i32, height: i32, density: f64) -> RenderParameters {
        RenderParameters::new(-0.5, 0.25, scale, PixelSize::new(width, height), density)
            .expect("test parameters are valid")
    }

    #[test]
    fn test_new_rejects_non_positive_scale() {
        let result = RenderParameters::new(0.0, 0.0, 0.0, PixelSize::new(10, 10), 1.0);

        assert_eq!(result, Err(RenderParametersError::InvalidScale(0.0)));
    }

    #[test]
    fn test_new_rejects_nan_center() {
        let result = RenderParameters::new(f64::NAN, 0.0, 1.0, PixelSize::new(10, 10), 1.0);

        assert!(matches!(
            result,
            Err(RenderParametersError::NonFiniteCenter { .. })
        ));
    }

    #[test]
    fn test_new_rejects_zero_density() {
        let result = RenderParameters::new(0.0, 0.0, 1.0, PixelSize::new(10, 10), 0.0);

        assert_eq!(result, Err(RenderParametersError::InvalidPixelDensity(0.0)));
    }

    #[test]
    fn test_new_rejects_negative_size() {
        let result = RenderParameters::new(0.0, 0.0, 1.0, PixelSize::new(-1, 10), 1.0);

        assert_eq!(
            result,
            Err(RenderParametersError::NegativeSize {
                width: -1,
                height: 10
            })
        );
    }

    #[test]
    fn test_new_accepts_zero_size() {
        let result = RenderParameters::new(0.0, 0.0, 1.0, PixelSize::new(0, 0), 1.0);

        assert!(result.is_ok());
    }

    #[test]
    fn test_geometry_divides_scale_by_density() {
        let geometry = params(0.004, 100, 80, 2.0).geometry();

        assert_eq!(geometry.scale, 0.002);
        assert_eq!(geometry.requested_scale, 0.004);
        assert_eq!(geometry.device_size, PixelSize::new(200, 160));
        assert_eq!(geometry.half_width, 100);
        assert_eq!(geometry.half_height, 80);
    }

    #[test]
    fn test_plane_coordinates_are_centered() {
        let geometry = params(0.5, 4, 2, 1.0).geometry();

        assert_eq!(geometry.plane_x(2), -0.5);
        assert_eq!(geometry.plane_x(0), -1.5);
        assert_eq!(geometry.plane_y(1), 0.25);
        assert_eq!(geometry.plane_y(0), -0.25);
    }
}
