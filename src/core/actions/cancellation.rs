use thiserror::Error;

/// Why a cancellable action stopped early.
///
/// This is control flow, not a failure: neither variant is ever reported to
/// the consumer of rendered images.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Cancelled {
    /// Newer parameters arrived; drop the current work and start over.
    #[error("render restarted with newer parameters")]
    Restart,
    /// The worker is shutting down for good.
    #[error("render aborted")]
    Abort,
}

pub trait CancelToken: Send + Sync {
    /// Returns the pending cancellation, if any.
    fn check(&self) -> Option<Cancelled>;

    #[inline]
    fn is_cancelled(&self) -> bool {
        self.check().is_some()
    }

    /// `Err` when a cancellation is pending, for use with `?`.
    #[inline]
    fn ensure_running(&self) -> Result<(), Cancelled> {
        match self.check() {
            Some(cancelled) => Err(cancelled),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NeverCancel;

impl CancelToken for NeverCancel {
    #[inline]
    fn check(&self) -> Option<Cancelled> {
        None
    }
}

impl<F> CancelToken for F
where
    F: Fn() -> Option<Cancelled> + Send + Sync,
{
    #[inline]
    fn check(&self) -> Option<Cancelled> {
        self()
    }
}
