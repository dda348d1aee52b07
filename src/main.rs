use mandelbrot_renderer::{
    FractalRenderer, InteractiveControllerPresenterPort, LatestFrameAdapter, MandelbrotConfig,
    NUM_PASSES, RenderParameters, Viewport,
};
use std::sync::Arc;
use std::time::{Duration, Instant};

const FRAME_TIMEOUT: Duration = Duration::from_secs(30);
const ZOOM_STEPS: usize = 2;
/// Pass after which each view is considered good enough to move on.
const PREVIEW_PASS: u32 = 2;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let adapter = Arc::new(LatestFrameAdapter::new());
    let mut renderer =
        FractalRenderer::new(Arc::clone(&adapter) as Arc<dyn InteractiveControllerPresenterPort>);
    let mut viewport = Viewport::new(MandelbrotConfig::default());

    let initial = viewport.parameters()?;
    render_view(&renderer, &adapter, &mut viewport, initial)?;

    for _ in 0..ZOOM_STEPS {
        let parameters = viewport.zoom_in()?;
        render_view(&renderer, &adapter, &mut viewport, parameters)?;
    }

    renderer.shutdown();

    Ok(())
}

fn render_view(
    renderer: &FractalRenderer,
    adapter: &LatestFrameAdapter,
    viewport: &mut Viewport,
    parameters: RenderParameters,
) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();
    renderer.submit(parameters)?;

    log::info!(
        "rendering ({}, {}) at scale {}",
        parameters.center_x(),
        parameters.center_y(),
        parameters.scale()
    );

    while let Some(frame) = adapter.wait_for_frame(FRAME_TIMEOUT) {
        // Late passes of the previous view may still arrive.
        if frame.scale_factor != parameters.scale() {
            continue;
        }

        viewport.accept_frame(frame.scale_factor);

        log::info!(
            "pass {}/{} ({} iterations, {}x{}) in {:?}",
            frame.pass + 1,
            NUM_PASSES,
            frame.max_iterations,
            frame.image.width(),
            frame.image.height(),
            frame.render_duration
        );

        if frame.pass >= PREVIEW_PASS {
            log::info!("view ready after {:?}", start.elapsed());
            return Ok(());
        }
    }

    Err(format!("no frame within {FRAME_TIMEOUT:?}").into())
}
