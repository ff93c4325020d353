use crate::batch::{run_batch, BatchOutcome};
use crate::error::{CompressionError, Result};
use crate::job::CompressionJob;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread;

/// Events streamed from the background worker to the caller. Progress events
/// arrive in file order; exactly one terminal event (`Finished` or `Failed`)
/// closes the stream.
#[derive(Debug)]
pub enum BatchEvent {
    Progress { processed: usize, total: usize },
    Finished(BatchOutcome),
    Failed(CompressionError),
}

/// Single-slot batch executor: at most one run is in flight at a time,
/// enforced here rather than by the caller's UI state.
#[derive(Debug, Clone, Default)]
pub struct Runner {
    busy: Arc<AtomicBool>,
}

impl Runner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Starts a batch on a background thread and returns the event stream.
    ///
    /// The job is moved into the worker and stays read-only; the channel is
    /// the only state shared back with the caller. Returns
    /// `Err(CompressionError::BatchBusy)` if a run is already active.
    pub fn spawn(&self, job: CompressionJob) -> Result<Receiver<BatchEvent>> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(CompressionError::BatchBusy);
        }

        let (tx, rx) = mpsc::channel();
        let busy = Arc::clone(&self.busy);

        thread::spawn(move || {
            let progress_tx = tx.clone();
            let result = run_batch(&job, |processed, total| {
                // receiver may have hung up; the run still completes
                let _ = progress_tx.send(BatchEvent::Progress { processed, total });
            });

            let terminal = match result {
                Ok(outcome) => BatchEvent::Finished(outcome),
                Err(e) => BatchEvent::Failed(e),
            };
            let _ = tx.send(terminal);
            busy.store(false, Ordering::Release);
        });

        Ok(rx)
    }
}
