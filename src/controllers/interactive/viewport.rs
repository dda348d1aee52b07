use crate::core::data::pixel_size::PixelSize;
use crate::core::data::render_parameters::{RenderParameters, RenderParametersError};
use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;

/// Eighths of a degree per unit of wheel angle delta.
const WHEEL_DELTA_PER_DEGREE: i32 = 8;

/// Navigation state of an interactive view.
///
/// Tracks the scale the user asked for separately from the scale of the image
/// currently on screen, so a presentation layer can stretch the stale image
/// until the renderer catches up. Every navigation step returns the parameters
/// to submit to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    config: MandelbrotConfig,
    center_x: f64,
    center_y: f64,
    current_scale: f64,
    displayed_scale: Option<f64>,
    size: PixelSize,
    pixel_density: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(config: MandelbrotConfig) -> Self {
        Self {
            config,
            center_x: config.center_x,
            center_y: config.center_y,
            current_scale: config.scale,
            displayed_scale: None,
            size: config.output_size,
            pixel_density: config.pixel_density,
        }
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        (self.center_x, self.center_y)
    }

    #[must_use]
    pub fn current_scale(&self) -> f64 {
        self.current_scale
    }

    #[must_use]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    pub fn parameters(&self) -> Result<RenderParameters, RenderParametersError> {
        RenderParameters::new(
            self.center_x,
            self.center_y,
            self.current_scale,
            self.size,
            self.pixel_density,
        )
    }

    pub fn zoom(&mut self, factor: f64) -> Result<RenderParameters, RenderParametersError> {
        self.current_scale *= factor;
        self.parameters()
    }

    pub fn zoom_in(&mut self) -> Result<RenderParameters, RenderParametersError> {
        self.zoom(self.config.zoom_in_factor)
    }

    pub fn zoom_out(&mut self) -> Result<RenderParameters, RenderParametersError> {
        self.zoom(self.config.zoom_out_factor())
    }

    /// Zooms by one step per `wheel_degrees_per_step` of wheel rotation;
    /// positive deltas zoom in.
    pub fn wheel(&mut self, angle_delta_y: i32) -> Result<RenderParameters, RenderParametersError> {
        let degrees = angle_delta_y / WHEEL_DELTA_PER_DEGREE;
        let steps = f64::from(degrees) / self.config.wheel_degrees_per_step;
        self.zoom(self.config.zoom_in_factor.powf(steps))
    }

    /// Moves the center by a logical pixel offset.
    pub fn scroll(&mut self, delta_x: i32, delta_y: i32) -> Result<RenderParameters, RenderParametersError> {
        self.center_x += f64::from(delta_x) * self.current_scale;
        self.center_y += f64::from(delta_y) * self.current_scale;
        self.parameters()
    }

    pub fn scroll_left(&mut self) -> Result<RenderParameters, RenderParametersError> {
        self.scroll(-self.config.scroll_step, 0)
    }

    pub fn scroll_right(&mut self) -> Result<RenderParameters, RenderParametersError> {
        self.scroll(self.config.scroll_step, 0)
    }

    pub fn scroll_up(&mut self) -> Result<RenderParameters, RenderParametersError> {
        self.scroll(0, self.config.scroll_step)
    }

    pub fn scroll_down(&mut self) -> Result<RenderParameters, RenderParametersError> {
        self.scroll(0, -self.config.scroll_step)
    }

    /// Finishes a drag of the displayed image. `offset_x`/`offset_y` is where
    /// the image's top-left corner was dropped and `image_size` its logical
    /// size; the view scrolls by however far that is from the centred
    /// position.
    pub fn drag_release(
        &mut self,
        offset_x: i32,
        offset_y: i32,
        image_size: PixelSize,
    ) -> Result<RenderParameters, RenderParametersError> {
        let delta_x = (self.size.width - image_size.width) / 2 - offset_x;
        let delta_y = (self.size.height - image_size.height) / 2 - offset_y;
        self.scroll(delta_x, delta_y)
    }

    pub fn resize(
        &mut self,
        size: PixelSize,
        pixel_density: f64,
    ) -> Result<RenderParameters, RenderParametersError> {
        self.size = size;
        self.pixel_density = pixel_density;
        self.parameters()
    }

    /// Records the scale of the image that is now on screen.
    pub fn accept_frame(&mut self, scale_factor: f64) {
        self.displayed_scale = Some(scale_factor);
    }

    /// How much the displayed image must be stretched to match the current
    /// zoom. `None` until a frame has been accepted.
    #[must_use]
    pub fn preview_scale_factor(&self) -> Option<f64> {
        self.displayed_scale
            .map(|displayed| displayed / self.current_scale)
    }

    /// True when the image on screen was rendered at the current scale.
    #[must_use]
    pub fn is_displaying_current_scale(&self) -> bool {
        self.displayed_scale
            .is_some_and(|displayed| fuzzy_eq(displayed, self.current_scale))
    }
}

fn fuzzy_eq(a: f64, b: f64) -> bool {
    (a - b).abs() * 1e12 <= a.abs().min(b.abs())
}
