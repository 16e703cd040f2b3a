use parking_lot::Mutex;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Timer-based dispatcher that runs only the most recent scheduled task.
///
/// Scheduling a task aborts any task still waiting for its delay. Once the
/// delay has passed the task is handed to its own tokio task, so a later
/// `schedule` or `cancel` never interrupts work already dispatched.
/// Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Mutex::new(None),
        }
    }

    pub fn schedule<F>(&self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let delay = self.delay;
        let timer = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tokio::spawn(task);
        });

        if let Some(previous) = self.pending.lock().replace(timer) {
            if !previous.is_finished() {
                tracing::debug!("Superseded pending dispatch");
            }
            previous.abort();
        }
    }

    /// Drop the waiting task, if any. Returns whether one was waiting.
    pub fn cancel(&self) -> bool {
        match self.pending.lock().take() {
            Some(timer) => {
                let was_waiting = !timer.is_finished();
                timer.abort();
                was_waiting
            }
            None => false,
        }
    }

}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if let Some(timer) = self.pending.get_mut().take() {
            timer.abort();
        }
    }
}
