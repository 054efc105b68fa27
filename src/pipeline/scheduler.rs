use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::foundation::error::{TraceError, TraceResult};

/// Cooperative scheduling seam for the tracing pipeline.
///
/// The engine is single-threaded; it voluntarily suspends at fixed points
/// (between binarization chunks and every few scanned rows while tracing) so
/// a host event loop can interleave interactive work. A checkpoint that
/// returns `Err` aborts the pipeline; this is how cancellation reaches the
/// engine. Yielding never changes the output: running with
/// [`RunToCompletion`] produces byte-identical results.
pub trait Scheduler {
    /// Suspension point. Return `Err` to abort the pipeline.
    fn checkpoint(&mut self) -> TraceResult<()>;
}

/// Scheduler that never suspends and never cancels.
#[derive(Clone, Copy, Debug, Default)]
pub struct RunToCompletion;

impl Scheduler for RunToCompletion {
    fn checkpoint(&mut self) -> TraceResult<()> {
        Ok(())
    }
}

/// Shared cancellation flag usable as a scheduler.
///
/// Clone the flag, hand one copy to the pipeline and keep the other; calling
/// [`CancelFlag::cancel`] makes the next checkpoint fail with
/// [`TraceError::Cancelled`].
#[derive(Clone, Debug, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    /// Create a flag in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation at the next checkpoint.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Scheduler for CancelFlag {
    fn checkpoint(&mut self) -> TraceResult<()> {
        if self.is_cancelled() {
            return Err(TraceError::Cancelled);
        }
        Ok(())
    }
}

impl<F> Scheduler for F
where
    F: FnMut() -> TraceResult<()>,
{
    fn checkpoint(&mut self) -> TraceResult<()> {
        self()
    }
}
