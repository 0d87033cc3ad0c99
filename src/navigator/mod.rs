//! Layer navigator: progressive-disclosure state machine.
//!
//! DESIGN
//! ======
//! One `LayerNavigator` per mounted dashboard session. It owns the current
//! layer, the set of completed layers, the session clock, earned
//! achievements and per-layer progress. Callers drive it with discrete
//! events (`go_to_layer`, `tick`, `dispatch`); every event runs to
//! completion, achievements included, before the injected observer hears
//! about it. Each callback is isolated: a panicking observer is logged and
//! skipped, and navigator state is already final by then.
//!
//! A layer is marked completed only when navigation advances past it.
//! Moving backward or staying put never completes anything, and completed
//! layers are never removed. Achievements are re-evaluated after every
//! change to the clock or the completed set.
//!
//! The periodic tick lives in [`timer`], which owns the only background
//! task and stops it on unmount. Unmounting also disposes the navigator,
//! after which every event is a no-op.

pub mod achievement;
pub mod action;
pub mod layer;
pub mod observer;
pub mod timer;

use std::collections::BTreeSet;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;

use serde::Serialize;
use tokio::time::Instant;
use tracing::warn;
use uuid::Uuid;

use crate::assessment::LayerProgress;

pub use achievement::{
    Achievement, AchievementSet, DEEP_DIVER_COMPLETED, ENGAGED_AFTER_SECS, EXPLORER_MIN_COMPLETED,
};
pub use action::DashboardAction;
pub use layer::{InvalidLayer, Layer, LayerStatus};
pub use observer::{NavigatorObserver, NoopObserver, TracingObserver};
pub use timer::{Session, SharedNavigator, TickTimer};

// =============================================================================
// SNAPSHOT
// =============================================================================

/// Read-only copy of navigator state, for export or a persistence collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorSnapshot {
    pub session_id: Uuid,
    pub current_layer: Layer,
    pub completed_layers: Vec<Layer>,
    pub elapsed_secs: u64,
    pub achievements: Vec<Achievement>,
    pub progress: LayerProgress,
}

// =============================================================================
// NAVIGATOR
// =============================================================================

pub struct LayerNavigator {
    session_id: Uuid,
    current: Layer,
    completed: BTreeSet<Layer>,
    elapsed_secs: u64,
    layer_started: Instant,
    achievements: AchievementSet,
    progress: LayerProgress,
    observer: Arc<dyn NavigatorObserver>,
    disposed: bool,
}

impl LayerNavigator {
    /// Create a navigator positioned on the snapshot layer.
    #[must_use]
    pub fn new(session_id: Uuid, observer: Arc<dyn NavigatorObserver>) -> Self {
        Self::new_at(session_id, observer, Instant::now())
    }

    /// Internal: construct with an explicit start instant (for testing).
    pub(crate) fn new_at(session_id: Uuid, observer: Arc<dyn NavigatorObserver>, now: Instant) -> Self {
        let mut progress = LayerProgress::default();
        progress.mark_viewed(Layer::Snapshot);
        Self {
            session_id,
            current: Layer::Snapshot,
            completed: BTreeSet::new(),
            elapsed_secs: 0,
            layer_started: now,
            achievements: AchievementSet::default(),
            progress,
            observer,
            disposed: false,
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Move to `target`, completing the current layer when advancing past it.
    pub fn go_to_layer(&mut self, target: Layer) {
        self.go_to_layer_at(target, Instant::now());
    }

    pub(crate) fn go_to_layer_at(&mut self, target: Layer, now: Instant) {
        if self.disposed {
            return;
        }
        if target > self.current {
            self.completed.insert(self.current);
        }
        self.current = target;
        self.layer_started = now;
        self.progress.mark_viewed(target);
        let unlocked = self.evaluate_achievements();

        self.notify("on_layer_change", |o| o.on_layer_change(target));
        self.announce(&unlocked);
    }

    /// Advance the session clock by one second.
    pub fn tick(&mut self) {
        self.tick_at(Instant::now());
    }

    pub(crate) fn tick_at(&mut self, now: Instant) {
        if self.disposed {
            return;
        }
        self.elapsed_secs = self.elapsed_secs.saturating_add(1);
        self.progress.add_second(self.current);
        let unlocked = self.evaluate_achievements();

        let on_layer = now.saturating_duration_since(self.layer_started).as_millis();
        let millis = u64::try_from(on_layer).unwrap_or(u64::MAX);
        self.notify("on_time_spent_update", |o| o.on_time_spent_update(millis));
        self.announce(&unlocked);
    }

    pub fn record_download(&mut self) {
        if self.disposed {
            return;
        }
        self.achievements.insert(Achievement::PdfDownloaded);
        self.progress.downloaded_pdf = true;
    }

    pub fn record_booking(&mut self) {
        if self.disposed {
            return;
        }
        self.achievements.insert(Achievement::ConsultationBooked);
        self.progress.booked_consultation = true;
    }

    /// Apply a typed dashboard action, then report it to the observer.
    pub fn dispatch(&mut self, action: DashboardAction) {
        if self.disposed {
            return;
        }
        match &action {
            DashboardAction::Navigate(layer) => self.go_to_layer(*layer),
            DashboardAction::ExpandInsight(id) => {
                self.progress.toggle_card(id);
            }
            DashboardAction::DownloadPdf => self.record_download(),
            DashboardAction::BookConsultation => self.record_booking(),
            DashboardAction::ImmediateAction(_) => {}
        }
        self.notify("on_action", |o| o.on_action(&action));
    }

    /// Tear the navigator down. Every later event is ignored, so a tick
    /// already in flight when the session unmounts changes nothing.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Record newly met milestones and return them in unlock order.
    fn evaluate_achievements(&mut self) -> Vec<Achievement> {
        let met = [
            (self.elapsed_secs >= ENGAGED_AFTER_SECS, Achievement::Engaged),
            (self.completed.len() >= EXPLORER_MIN_COMPLETED, Achievement::Explorer),
            (self.completed.len() == DEEP_DIVER_COMPLETED, Achievement::DeepDiver),
        ];
        met.into_iter()
            .filter(|(reached, _)| *reached)
            .map(|(_, achievement)| achievement)
            .filter(|achievement| self.achievements.insert(*achievement))
            .collect()
    }

    fn announce(&self, unlocked: &[Achievement]) {
        for &achievement in unlocked {
            self.notify("on_achievement_unlocked", |o| o.on_achievement_unlocked(achievement));
        }
    }

    /// Deliver one event. A panicking observer loses that event only.
    fn notify(&self, callback: &'static str, deliver: impl FnOnce(&dyn NavigatorObserver)) {
        let observer = self.observer.as_ref();
        if catch_unwind(AssertUnwindSafe(|| deliver(observer))).is_err() {
            warn!(session_id = %self.session_id, callback, "navigator observer panicked");
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    #[must_use]
    pub fn current_layer(&self) -> Layer {
        self.current
    }

    #[must_use]
    pub fn completed_layers(&self) -> &BTreeSet<Layer> {
        &self.completed
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    #[must_use]
    pub fn achievements(&self) -> &AchievementSet {
        &self.achievements
    }

    #[must_use]
    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(achievement)
    }

    #[must_use]
    pub fn progress(&self) -> &LayerProgress {
        &self.progress
    }

    /// Completed wins over current, so a revisited layer still shows as done.
    #[must_use]
    pub fn layer_status(&self, layer: Layer) -> LayerStatus {
        if self.completed.contains(&layer) {
            LayerStatus::Completed
        } else if layer == self.current {
            LayerStatus::Current
        } else {
            LayerStatus::Upcoming
        }
    }

    /// Layers explored so far, counting the one currently shown.
    #[must_use]
    pub fn layers_explored(&self) -> usize {
        (self.completed.len() + 1).min(Layer::ALL.len())
    }

    #[must_use]
    pub fn snapshot(&self) -> NavigatorSnapshot {
        NavigatorSnapshot {
            session_id: self.session_id,
            current_layer: self.current,
            completed_layers: self.completed.iter().copied().collect(),
            elapsed_secs: self.elapsed_secs,
            achievements: self.achievements.to_vec(),
            progress: self.progress.clone(),
        }
    }
}

/// Session clock as `m:ss`.
#[must_use]
pub fn format_elapsed(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
