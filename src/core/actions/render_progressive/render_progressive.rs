use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_progressive::ports::colour_map::ColourMap;
use crate::core::actions::render_progressive::render_pass::render_pass;
use crate::core::data::render_parameters::FrameGeometry;
use crate::core::data::rendered_image::RenderedImage;
use crate::core::fractals::mandelbrot::pass_schedule::{
    is_degenerate_pass, max_iterations, next_pass,
};
use log::debug;

/// One completed pass, ready to hand to a consumer.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedPass {
    pub pass: u32,
    pub max_iterations: u32,
    pub image: RenderedImage,
}

/// Renders `geometry` with increasing iteration caps, calling `emit` after
/// every pass that completes without cancellation.
///
/// The same buffer is refined in place; every emitted pass gets its own copy,
/// so the consumer owns what it receives. A degenerate all-black first pass is
/// not emitted and the schedule resumes at a higher cap. An empty output size
/// renders nothing.
pub fn render_progressive<CMap, C, E>(
    geometry: &FrameGeometry,
    colour_map: &CMap,
    cancel: &C,
    mut emit: E,
) -> Result<(), Cancelled>
where
    CMap: ColourMap + ?Sized,
    C: CancelToken + ?Sized,
    E: FnMut(CompletedPass),
{
    if geometry.device_size.is_empty() {
        debug!(
            "nothing to render for {}x{} output",
            geometry.device_size.width, geometry.device_size.height
        );
        return Ok(());
    }

    let mut image = RenderedImage::new(geometry.device_size, geometry.pixel_density);
    let mut pass = 0;

    loop {
        let cap = max_iterations(pass);
        let outcome = render_pass(&mut image, geometry, cap, colour_map, cancel)?;
        let next = next_pass(pass, outcome.all_black);

        if is_degenerate_pass(pass, outcome.all_black) {
            debug!("pass {pass} is all black at {cap} iterations, skipping ahead");
        } else {
            cancel.ensure_running()?;

            if next.is_none() {
                emit(CompletedPass {
                    pass,
                    max_iterations: cap,
                    image,
                });
                return Ok(());
            }

            emit(CompletedPass {
                pass,
                max_iterations: cap,
                image: image.clone(),
            });
        }

        match next {
            Some(next) => pass = next,
            None => return Ok(()),
        }
    }
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

    fn collect_passes<C: CancelToken>(
        geometry: &FrameGeometry,
        cancel: &C,
    ) -> (Result<(), Cancelled>, Vec<CompletedPass>) {
        let mut passes = Vec::new();
        let result = render_progressive(geometry, &SpectralColourTable::new(), cancel, |pass| {
            passes.push(pass)
        });
        (result, passes)
    }

    #[test]
    fn test_escaping_region_emits_all_eight_passes() {
        // Every pixel escapes on the first step, so each pass is cheap.
        let geometry = geometry(3.0, 3.0, 0.01, 6, 4);

        let (result, passes) = collect_passes(&geometry, &NeverCancel);

        assert_eq!(result, Ok(()));
        let indices: Vec<u32> = passes.iter().map(|p| p.pass).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(passes[0].max_iterations, 96);
        assert!(passes.iter().all(|p| p.image.size() == PixelSize::new(6, 4)));
    }

    #[test]
    fn test_all_black_first_pass_resumes_at_pass_four() {
        // A tiny patch inside the main cardioid: nothing escapes.
        let geometry = geometry(-0.1, 0.0, 0.0001, 2, 2);

        let (result, passes) = collect_passes(&geometry, &NeverCancel);

        assert_eq!(result, Ok(()));
        let indices: Vec<u32> = passes.iter().map(|p| p.pass).collect();
        assert_eq!(indices, vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_empty_size_emits_nothing() {
        let geometry = geometry(-0.5, 0.0, 0.01, 0, 400);

        let (result, passes) = collect_passes(&geometry, &NeverCancel);

        assert_eq!(result, Ok(()));
        assert!(passes.is_empty());
    }

    #[test]
    fn test_restart_mid_pass_emits_nothing() {
        let geometry = geometry(3.0, 3.0, 0.01, 4, 20);
        let checks = AtomicU32::new(0);
        let token = || (checks.fetch_add(1, Ordering::Relaxed) >= 5).then_some(Cancelled::Restart);

        let (result, passes) = collect_passes(&geometry, &token);

        assert_eq!(result, Err(Cancelled::Restart));
        assert!(passes.is_empty());
    }

    #[test]
    fn test_restart_after_first_pass_stops_further_emits() {
        // 3 rows: 4 checks inside the pass, then one before emitting.
        let geometry = geometry(3.0, 3.0, 0.01, 4, 3);
        let checks = AtomicU32::new(0);
        let token = || (checks.fetch_add(1, Ordering::Relaxed) >= 6).then_some(Cancelled::Restart);

        let (result, passes) = collect_passes(&geometry, &token);

        assert_eq!(result, Err(Cancelled::Restart));
        assert_eq!(passes.len(), 1);
        assert_eq!(passes[0].pass, 0);
    }

    #[test]
    fn test_abort_before_emit_discards_completed_pass() {
        let geometry = geometry(3.0, 3.0, 0.01, 4, 3);
        let checks = AtomicU32::new(0);
        let token = || (checks.fetch_add(1, Ordering::Relaxed) >= 4).then_some(Cancelled::Abort);

        let (result, passes) = collect_passes(&geometry, &token);

        assert_eq!(result, Err(Cancelled::Abort));
        assert!(passes.is_empty());
    }
}
