use crate::core::data::pixel_size::PixelSize;
use crate::core::data::render_parameters::{RenderParameters, RenderParametersError};

pub const DEFAULT_CENTER_X: f64 = -0.637011;
pub const DEFAULT_CENTER_Y: f64 = -0.0395159;
pub const DEFAULT_SCALE: f64 = 0.00403897;
pub const DEFAULT_OUTPUT_SIZE: PixelSize = PixelSize {
    width: 550,
    height: 400,
};
pub const DEFAULT_PIXEL_DENSITY: f64 = 1.0;

pub const DEFAULT_ZOOM_IN_FACTOR: f64 = 0.8;
/// Logical pixels moved per scroll step.
pub const DEFAULT_SCROLL_STEP: i32 = 20;
/// Wheel rotation, in degrees, that makes up one zoom step.
pub const DEFAULT_WHEEL_DEGREES_PER_STEP: f64 = 15.0;

/// Initial view and navigation settings for interactive exploration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotConfig {
    pub center_x: f64,
    pub center_y: f64,
    pub scale: f64,
    pub output_size: PixelSize,
    pub pixel_density: f64,
    pub zoom_in_factor: f64,
    pub scroll_step: i32,
    pub wheel_degrees_per_step: f64,
}

impl Default for MandelbrotConfig {
    fn default() -> Self {
        Self {
            center_x: DEFAULT_CENTER_X,
            center_y: DEFAULT_CENTER_Y,
            scale: DEFAULT_SCALE,
            output_size: DEFAULT_OUTPUT_SIZE,
            pixel_density: DEFAULT_PIXEL_DENSITY,
            zoom_in_factor: DEFAULT_ZOOM_IN_FACTOR,
            scroll_step: DEFAULT_SCROLL_STEP,
            wheel_degrees_per_step: DEFAULT_WHEEL_DEGREES_PER_STEP,
        }
    }
}

impl MandelbrotConfig {
    #[must_use]
    pub fn zoom_out_factor(&self) -> f64 {
        1.0 / self.zoom_in_factor
    }

    pub fn render_parameters(&self) -> Result<RenderParameters, RenderParametersError> {
        RenderParameters::new(
            self.center_x,
            self.center_y,
            self.scale,
            self.output_size,
            self.pixel_density,
        )
    }
}
