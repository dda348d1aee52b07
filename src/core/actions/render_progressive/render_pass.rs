use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_progressive::ports::colour_map::ColourMap;
use crate::core::data::colour::Colour;
use crate::core::data::render_parameters::FrameGeometry;
use crate::core::data::rendered_image::RenderedImage;
use crate::core::fractals::mandelbrot::escape_time::{ESCAPE_LIMIT, escape_time};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PassOutcome {
    /// No pixel escaped within the iteration cap.
    pub all_black: bool,
}

/// Renders one full pass into `image`, row by row.
///
/// The cancel token is polled before every scanline and once more after the
/// last one, so a restart or abort is noticed within one row of work. On
/// cancellation the partially written image must be discarded by the caller.
pub fn render_pass<CMap, C>(
    image: &mut RenderedImage,
    geometry: &FrameGeometry,
    max_iterations: u32,
    colour_map: &CMap,
    cancel: &C,
) -> Result<PassOutcome, Cancelled>
where
    CMap: ColourMap + ?Sized,
    C: CancelToken + ?Sized,
{
    debug_assert_eq!(image.size(), geometry.device_size);

    let mut all_black = true;

    for row in 0..geometry.device_size.height {
        cancel.ensure_running()?;

        let ay = geometry.plane_y(row);
        let scan_line = image.scan_line_mut(row);

        for (column, pixel) in (0..).zip(scan_line.chunks_exact_mut(4)) {
            let ax = geometry.plane_x(column);
            let iterations = escape_time(ax, ay, max_iterations, ESCAPE_LIMIT);

            let colour = if iterations < max_iterations {
                all_black = false;
                colour_map.map(iterations)
            } else {
                Colour::BLACK
            };

            pixel.copy_from_slice(&colour.to_rgba());
        }
    }

    cancel.ensure_running()?;

    Ok(PassOutcome { all_black })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::pixel_size::PixelSize;
    use crate::core::data::render_parameters::RenderParameters;
    use crate::core::fractals::mandelbrot::colour_maps::spectral::SpectralColourTable;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn geometry(center_x: f64, center_y: f64, scale: f64, width: i32, height: i32) -> FrameGeometry {
        RenderParameters::new(center_x, center_y, scale, PixelSize::new(width, height), 1.0)
            .expect("test parameters are valid")
            .geometry()
    }

    #[test]
    fn test_region_inside_set_is_all_black() {
        let geometry = geometry(-0.1, 0.0, 0.001, 16, 12);
        let mut image = RenderedImage::new(geometry.device_size, 1.0);

        let outcome =
            render_pass(&mut image, &geometry, 96, &SpectralColourTable::new(), &NeverCancel);

        assert_eq!(outcome, Ok(PassOutcome { all_black: true }));
        assert!(image.is_uniform());
    }

    #[test]
    fn test_region_outside_set_is_coloured() {
        let geometry = geometry(3.0, 3.0, 0.01, 8, 8);
        let table = SpectralColourTable::new();
        let mut image = RenderedImage::new(geometry.device_size, 1.0);

        let outcome = render_pass(&mut image, &geometry, 96, &table, &NeverCancel);

        assert_eq!(outcome, Ok(PassOutcome { all_black: false }));
        assert_eq!(image.pixel(4, 4), Ok(table.map(1)));
    }

    #[test]
    fn test_odd_width_fills_every_column() {
        let geometry = geometry(3.0, 3.0, 0.01, 7, 3);
        let table = SpectralColourTable::new();
        let mut image = RenderedImage::new(geometry.device_size, 1.0);

        render_pass(&mut image, &geometry, 96, &table, &NeverCancel).expect("not cancelled");

        assert_eq!(image.pixel(6, 2), Ok(table.map(1)));
    }

    #[test]
    fn test_cancel_checked_once_per_scanline() {
        let geometry = geometry(3.0, 3.0, 0.01, 4, 10);
        let checks = AtomicU32::new(0);
        let token = || -> Option<Cancelled> {
            checks.fetch_add(1, Ordering::Relaxed);
            None
        };
        let mut image = RenderedImage::new(geometry.device_size, 1.0);

        render_pass(&mut image, &geometry, 96, &SpectralColourTable::new(), &token)
            .expect("not cancelled");

        assert_eq!(checks.load(Ordering::Relaxed), 11);
    }

    #[test]
    fn test_restart_stops_within_one_scanline() {
        let geometry = geometry(-0.637011, -0.0395159, 0.00403897, 40, 100);
        let checks = AtomicU32::new(0);
        let token = || {
            if checks.fetch_add(1, Ordering::Relaxed) >= 3 {
                Some(Cancelled::Restart)
            } else {
                None
            }
        };
        let mut image = RenderedImage::new(geometry.device_size, 1.0);

        let outcome = render_pass(&mut image, &geometry, 96, &SpectralColourTable::new(), &token);

        assert_eq!(outcome, Err(Cancelled::Restart));
        assert_eq!(checks.load(Ordering::Relaxed), 4);
    }
}
