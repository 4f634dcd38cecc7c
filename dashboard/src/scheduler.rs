//! Cancellable delayed tasks

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Shared cancellation flag handed to the scheduled work
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// Work that runs once after a delay unless cancelled first.
///
/// Dropping the task cancels it.
#[derive(Debug)]
pub struct ScheduledTask {
    token: CancelToken,
    handle: JoinHandle<()>,
}

impl ScheduledTask {
    /// Spawn `work` to run after `delay`. `work` receives the task's token so
    /// it can check for cancellation before committing side effects.
    pub fn schedule<F, Fut>(delay: Duration, work: F) -> Self
    where
        F: FnOnce(CancelToken) -> Fut,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let token = CancelToken::default();
        let work = work(token.clone());

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            work.await;
        });

        Self { token, handle }
    }

    /// Flag the task as cancelled and abort it if still pending
    pub fn cancel(&self) {
        self.token.cancel();
        self.handle.abort();
    }

    #[cfg(test)]
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
