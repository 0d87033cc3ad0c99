//! Session tick timer: the navigator's only background task.
//!
//! DESIGN
//! ======
//! `Session::mount` moves the navigator behind a mutex and spawns a task
//! that wakes once per period and calls `tick()`. The task handle lives in
//! a `TickTimer`, which aborts the task when dropped.
//!
//! Abort only takes effect at the task's next await, so a tick that has
//! already woken may still be waiting on the lock. Teardown therefore
//! disposes the navigator under the lock first; the task checks for
//! disposal under the same lock and exits without ticking.
//!
//! The lock is never held across an await point.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::debug;

use super::{LayerNavigator, NavigatorSnapshot};

/// Default tick period: one second of session clock per tick.
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_secs(1);

pub type SharedNavigator = Arc<Mutex<LayerNavigator>>;

/// Lock the navigator, recovering the state if a previous holder panicked.
pub fn lock(navigator: &SharedNavigator) -> MutexGuard<'_, LayerNavigator> {
    navigator.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// TICK TIMER
// =============================================================================

/// Handle to the periodic tick task. Dropping it stops the ticks.
pub struct TickTimer {
    handle: JoinHandle<()>,
}

impl TickTimer {
    /// Spawn the tick task. The first tick fires one `period` after start.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime or if `period` is zero.
    #[must_use]
    pub fn start(navigator: SharedNavigator, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let mut nav = lock(&navigator);
                if nav.is_disposed() {
                    break;
                }
                nav.tick();
            }
        });
        Self { handle }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for TickTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// =============================================================================
// SESSION
// =============================================================================

/// A mounted navigator plus its tick timer.
pub struct Session {
    navigator: SharedNavigator,
    timer: Option<TickTimer>,
}

impl Session {
    /// Mount `navigator` and start ticking every `period`.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime or if `period` is zero.
    #[must_use]
    pub fn mount(navigator: LayerNavigator, period: Duration) -> Self {
        let session_id = navigator.session_id();
        let navigator = Arc::new(Mutex::new(navigator));
        let timer = TickTimer::start(Arc::clone(&navigator), period);
        debug!(%session_id, period_ms = period.as_millis(), "session mounted");
        Self { navigator, timer: Some(timer) }
    }

    /// Mount without a timer; the clock only moves on explicit `tick()` calls.
    #[must_use]
    pub fn detached(navigator: LayerNavigator) -> Self {
        Self { navigator: Arc::new(Mutex::new(navigator)), timer: None }
    }

    /// Run `f` against the navigator under the session lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut LayerNavigator) -> R) -> R {
        f(&mut lock(&self.navigator))
    }

    #[must_use]
    pub fn snapshot(&self) -> NavigatorSnapshot {
        lock(&self.navigator).snapshot()
    }

    #[must_use]
    pub fn is_ticking(&self) -> bool {
        self.timer.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Another handle to the navigator state. Outlives `unmount`.
    #[must_use]
    pub fn shared(&self) -> SharedNavigator {
        Arc::clone(&self.navigator)
    }

    /// Dispose the navigator, stop the timer and return the final state.
    #[must_use]
    pub fn unmount(self) -> NavigatorSnapshot {
        let snapshot = {
            let mut nav = lock(&self.navigator);
            nav.dispose();
            nav.snapshot()
        };
        debug!(session_id = %snapshot.session_id, elapsed_secs = snapshot.elapsed_secs, "session unmounted");
        snapshot
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        lock(&self.navigator).dispose();
        drop(self.timer.take());
    }
}

#[cfg(test)]
#[path = "timer_test.rs"]
mod tests;
