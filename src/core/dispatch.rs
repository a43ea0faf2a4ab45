//! # Background dispatch: tracked, panic-isolated handler tasks.
//!
//! [`Dispatcher`] launches one blocking-pool task per handler for
//! `fire_background` and keeps a [`TaskTracker`] so the owner can wait for them
//! during teardown.
//!
//! ## Architecture
//! ```text
//! fire_background(event, args)
//!     │
//!     ├──► spawn_blocking ──► catch_unwind(listener1.call(args))
//!     │                           └──► panic → tracing::error!, task ends
//!     ├──► spawn_blocking ──► catch_unwind(listener2.call(args))
//!     └──► spawn_blocking ──► catch_unwind(listenerN.call(args))
//!                 │
//!                 └── each task holds a TaskTrackerToken until it returns
//! ```
//!
//! ## Rules
//! - **Non-blocking**: `launch()` returns as soon as the task is handed to tokio.
//! - **No ordering**: tasks run on the blocking pool and may overlap arbitrarily.
//! - **Isolation**: a panicking handler never reaches the caller or other handlers.
//! - **No cancellation**: launched tasks always run to completion.
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if a handler uses `Arc<Mutex<T>>` and panics while holding the lock.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio_util::task::TaskTracker;
use tracing::{error, trace, warn};

use crate::error::TriggerError;
use crate::handlers::{Args, Listener};

/// Launches and tracks background handler tasks.
#[derive(Debug)]
pub(crate) struct Dispatcher {
    tracker: TaskTracker,
    runtime: Option<Handle>,
    /// Serialises `wait` so one caller's `reopen` can't cut another's wait short.
    waiting: Mutex<()>,
}

impl Dispatcher {
    pub(crate) fn new(runtime: Option<Handle>) -> Self {
        Self {
            tracker: TaskTracker::new(),
            runtime,
            waiting: Mutex::new(()),
        }
    }

    /// Resolves the runtime to launch on: the configured handle, else the ambient one.
    pub(crate) fn runtime(&self) -> Result<Handle, TriggerError> {
        match &self.runtime {
            Some(handle) => Ok(handle.clone()),
            None => Handle::try_current().map_err(|_| TriggerError::RuntimeUnavailable),
        }
    }

    /// Launches a single handler call on the blocking pool of `runtime`.
    pub(crate) fn launch(&self, runtime: &Handle, event: Arc<str>, listener: Listener, args: Args) {
        let token = self.tracker.token();
        trace!(event = %event, "launching background handler");

        runtime.spawn_blocking(move || {
            let _token = token;
            run_isolated(&event, &listener, &args);
        });
    }

    /// Number of launched tasks that have not finished yet.
    pub(crate) fn pending(&self) -> usize {
        self.tracker.len()
    }

    /// Waits for every launched task, bounded by `grace` (`None` = don't wait).
    ///
    /// Returns at once when nothing is pending, without touching the timer.
    /// The tracker is reopened afterwards so the registry keeps working.
    ///
    /// # Panics
    /// If tasks are pending, `grace` is `Some` and the current runtime has no
    /// time driver.
    pub(crate) async fn wait(&self, grace: Option<Duration>) -> Result<(), TriggerError> {
        let _serial = self.waiting.lock().await;
        if self.tracker.is_empty() {
            return Ok(());
        }

        self.tracker.close();

        let finished = match grace {
            None => self.tracker.is_empty(),
            Some(grace) => tokio::time::timeout(grace, self.tracker.wait())
                .await
                .is_ok(),
        };

        self.tracker.reopen();

        if finished {
            Ok(())
        } else {
            let pending = self.tracker.len();
            let grace = grace.unwrap_or(Duration::ZERO);
            warn!(?grace, pending, "background handlers still running after grace");
            Err(TriggerError::GraceExceeded { grace, pending })
        }
    }
}

/// Calls the listener, converting a panic into a log line.
fn run_isolated(event: &str, listener: &Listener, args: &Args) {
    if let Err(panic_err) = std::panic::catch_unwind(AssertUnwindSafe(|| listener.call(args))) {
        let info = panic_message(&*panic_err);
        error!(event = %event, panic = %info, "background handler panicked");
    }
}

/// Extracts a readable message from a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
