mod controllers;
mod core;
mod presenters;

pub use crate::controllers::interactive::FractalRenderer;
pub use crate::controllers::interactive::data::frame_data::FrameData;
pub use crate::controllers::interactive::errors::render::RenderError;
pub use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
pub use crate::controllers::interactive::request_channel::SubmitOutcome;
pub use crate::controllers::interactive::viewport::Viewport;
pub use crate::core::actions::cancellation::{CancelToken, Cancelled, NeverCancel};
pub use crate::core::actions::render_progressive::ports::colour_map::ColourMap;
pub use crate::core::actions::render_progressive::render_pass::{PassOutcome, render_pass};
pub use crate::core::actions::render_progressive::render_progressive::{
    CompletedPass, render_progressive,
};
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_size::PixelSize;
pub use crate::core::data::render_parameters::{
    FrameGeometry, RenderParameters, RenderParametersError,
};
pub use crate::core::data::rendered_image::{RenderedImage, RenderedImageError};
pub use crate::core::fractals::mandelbrot::colour_maps::spectral::SpectralColourTable;
pub use crate::core::fractals::mandelbrot::escape_time::{
    ESCAPE_LIMIT, escape_time, escape_time_single_step,
};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::MandelbrotConfig;
pub use crate::core::fractals::mandelbrot::pass_schedule::{NUM_PASSES, max_iterations};
pub use crate::presenters::latest_frame::adapter::LatestFrameAdapter;
