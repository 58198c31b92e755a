//! Transient status messages and their expiry timer.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// Message shown in the banner after an operation completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Increases with every notification shown; expiries are matched on it.
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
}

impl Notification {
    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Cancellable expiry for the active notification.
///
/// Scheduling aborts whatever expiry is still pending, so at most one timer
/// is alive at a time.
pub struct NotificationTimer {
    runtime: Handle,
    window: Duration,
    pending: Option<JoinHandle<()>>,
}

impl NotificationTimer {
    pub fn new(runtime: Handle, window: Duration) -> Self {
        Self {
            runtime,
            window,
            pending: None,
        }
    }

    /// Run `on_expire(id)` once the display window has elapsed.
    pub fn schedule<F>(&mut self, id: u64, on_expire: F)
    where
        F: FnOnce(u64) + Send + 'static,
    {
        self.cancel();
        let window = self.window;
        self.pending = Some(self.runtime.spawn(async move {
            tokio::time::sleep(window).await;
            on_expire(id);
        }));
    }

    pub fn cancel(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.abort();
        }
    }
}

impl Drop for NotificationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}
