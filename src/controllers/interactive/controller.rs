use crate::controllers::interactive::data::frame_data::FrameData;
use crate::controllers::interactive::errors::render::RenderError;
use crate::controllers::interactive::ports::presenter::InteractiveControllerPresenterPort;
use crate::controllers::interactive::request_channel::{RenderRequestChannel, SubmitOutcome};
use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::render_progressive::render_progressive::render_progressive;
use crate::core::data::pixel_size::PixelSize;
use crate::core::data::render_parameters::RenderParameters;
use crate::core::fractals::mandelbrot::colour_maps::spectral::SpectralColourTable;
use log::{debug, error, trace, warn};
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

const WORKER_THREAD_NAME: &str = "mandelbrot-render";

/// Marks the worker as stopped however its thread ends, panics included.
struct WorkerExitGuard<'a> {
    requests: &'a RenderRequestChannel,
}

impl Drop for WorkerExitGuard<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            error!("render worker panicked; the next request starts a new one");
        }

        self.requests.worker_exited();
    }
}

struct SharedState {
    requests: RenderRequestChannel,
    colour_map: SpectralColourTable,
    presenter_port: Arc<dyn InteractiveControllerPresenterPort>,
}

/// Background Mandelbrot renderer with progressive refinement.
///
/// A single worker thread is started by the first request. It renders the
/// latest parameters in passes of increasing quality and publishes each pass
/// through the presenter port. New requests preempt the running cycle within
/// one scanline; dropping the renderer stops and joins the worker.
pub struct FractalRenderer {
    shared: Arc<SharedState>,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl FractalRenderer {
    pub fn new(presenter_port: Arc<dyn InteractiveControllerPresenterPort>) -> Self {
        Self {
            shared: Arc::new(SharedState {
                requests: RenderRequestChannel::new(),
                colour_map: SpectralColourTable::new(),
                presenter_port,
            }),
            worker: Mutex::new(None),
        }
    }

    /// Requests a render of the given view. Returns without waiting for it.
    pub fn render(
        &self,
        center_x: f64,
        center_y: f64,
        scale: f64,
        output_size: PixelSize,
        pixel_density: f64,
    ) -> Result<SubmitOutcome, RenderError> {
        let parameters =
            RenderParameters::new(center_x, center_y, scale, output_size, pixel_density)?;

        self.submit(parameters)
    }

    pub fn submit(&self, parameters: RenderParameters) -> Result<SubmitOutcome, RenderError> {
        let outcome = self.shared.requests.submit(parameters);

        match outcome {
            SubmitOutcome::StartWorker => self.spawn_worker()?,
            SubmitOutcome::Restart => debug!("restarting render for {parameters:?}"),
            SubmitOutcome::Unchanged => trace!("render parameters unchanged, request coalesced"),
            SubmitOutcome::ShutDown => warn!("render requested after shutdown, ignoring"),
        }

        Ok(outcome)
    }

    /// Aborts any render in progress and waits for the worker to exit.
    pub fn shutdown(&mut self) {
        self.shared.requests.request_abort();

        if let Some(handle) = self.worker.get_mut().take() {
            if handle.join().is_err() {
                error!("render worker panicked");
            }
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.shared.requests.is_running()
    }

    fn spawn_worker(&self) -> Result<(), RenderError> {
        let worker_shared = Arc::clone(&self.shared);

        let spawned = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                Self::worker_loop(&worker_shared);
            });

        match spawned {
            Ok(handle) => {
                *self.worker.lock() = Some(handle);
                Ok(())
            }
            Err(err) => {
                self.shared.requests.worker_exited();
                Err(err.into())
            }
        }
    }

    fn worker_loop(shared: &SharedState) {
        debug!("render worker started");

        let _exit_guard = WorkerExitGuard {
            requests: &shared.requests,
        };
        let mut next = shared.requests.snapshot();

        while let Some(parameters) = next {
            match Self::render_cycle(shared, &parameters) {
                Ok(()) => debug!("render cycle complete"),
                Err(Cancelled::Restart) => debug!("render cycle superseded"),
                Err(Cancelled::Abort) => break,
            }

            next = shared.requests.wait_for_work();
        }

        debug!("render worker stopped");
    }

    fn render_cycle(shared: &SharedState, parameters: &RenderParameters) -> Result<(), Cancelled> {
        let geometry = parameters.geometry();
        let start = Instant::now();

        debug!(
            "rendering center ({}, {}) at scale {} into {}x{} device pixels",
            geometry.center_x,
            geometry.center_y,
            geometry.requested_scale,
            geometry.device_size.width,
            geometry.device_size.height
        );

        render_progressive(&geometry, &shared.colour_map, &shared.requests, |completed| {
            let render_duration = start.elapsed();

            trace!(
                "publishing pass {} ({} iterations) after {:?}",
                completed.pass, completed.max_iterations, render_duration
            );

            shared.presenter_port.present(FrameData {
                image: completed.image,
                scale_factor: geometry.requested_scale,
                pass: completed.pass,
                max_iterations: completed.max_iterations,
                render_duration,
            });
        })
    }
}

impl Drop for FractalRenderer {
    fn drop(&mut self) {
        self.shutdown();
    }
}
