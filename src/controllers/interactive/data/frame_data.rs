use crate::core::data::rendered_image::RenderedImage;
use std::time::Duration;

/// A published pass, handed over to the consumer by value.
#[derive(Debug, Clone)]
pub struct FrameData {
    pub image: RenderedImage,
    /// Scale as originally requested, before the pixel density was applied.
    pub scale_factor: f64,
    pub pass: u32,
    pub max_iterations: u32,
    /// Time since the render cycle that produced this pass began.
    pub render_duration: Duration,
}
