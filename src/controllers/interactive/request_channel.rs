use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::data::render_parameters::RenderParameters;
use parking_lot::{Condvar, Mutex};

/// What a submission did to the render request state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No worker was running; the caller must start one.
    StartWorker,
    /// The running worker was asked to drop its current cycle.
    Restart,
    /// The same parameters were already waiting to be picked up.
    Unchanged,
    /// Shutdown was requested; the submission was ignored.
    ShutDown,
}

#[derive(Debug, Default)]
struct RenderRequestState {
    parameters: Option<RenderParameters>,
    /// Stored parameters not yet copied out by the worker.
    pending: bool,
    restart: bool,
    abort: bool,
    running: bool,
}

/// Latest-wins handoff of render parameters between callers and the worker.
///
/// Holds at most one pending request: a submission overwrites whatever the
/// worker has not picked up yet. Every field is read and written under the
/// same lock, and the worker copies the parameters out before rendering so
/// the lock is never held during computation.
#[derive(Debug, Default)]
pub struct RenderRequestChannel {
    state: Mutex<RenderRequestState>,
    wake: Condvar,
}

impl RenderRequestChannel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `parameters` as the latest request. Never blocks on rendering.
    pub fn submit(&self, parameters: RenderParameters) -> SubmitOutcome {
        let mut state = self.state.lock();

        if state.abort {
            return SubmitOutcome::ShutDown;
        }

        if state.running && state.pending && state.parameters == Some(parameters) {
            return SubmitOutcome::Unchanged;
        }

        state.parameters = Some(parameters);
        state.pending = true;

        if !state.running {
            state.running = true;
            return SubmitOutcome::StartWorker;
        }

        state.restart = true;
        self.wake.notify_one();

        SubmitOutcome::Restart
    }

    /// First snapshot taken by a freshly started worker. `None` on shutdown.
    pub fn snapshot(&self) -> Option<RenderParameters> {
        let mut state = self.state.lock();

        if state.abort {
            return None;
        }

        state.restart = false;
        state.pending = false;
        state.parameters
    }

    /// Blocks until a restart or shutdown is requested, then returns a copy
    /// of the latest parameters. `None` on shutdown.
    ///
    /// Returns immediately if a request arrived while the previous cycle was
    /// still rendering.
    pub fn wait_for_work(&self) -> Option<RenderParameters> {
        let mut state = self.state.lock();

        while !state.restart && !state.abort {
            self.wake.wait(&mut state);
        }

        if state.abort {
            return None;
        }

        state.restart = false;
        state.pending = false;
        state.parameters
    }

    /// Sets the abort flag and wakes the worker. Safe to call repeatedly.
    pub fn request_abort(&self) {
        let mut state = self.state.lock();
        state.abort = true;
        self.wake.notify_all();
    }

    /// Called by the worker as it exits, or by the owner when starting it failed.
    pub fn worker_exited(&self) {
        self.state.lock().running = false;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.lock().running
    }
}

impl CancelToken for RenderRequestChannel {
    fn check(&self) -> Option<Cancelled> {
        let state = self.state.lock();

        if state.abort {
            Some(Cancelled::Abort)
        } else if state.restart {
            Some(Cancelled::Restart)
        } else {
            None
        }
    }
}
