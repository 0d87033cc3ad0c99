//! Observer contract for navigator events.
//!
//! DESIGN
//! ======
//! The navigator performs no side effects itself. Everything the hosting
//! page may care about is pushed through a `NavigatorObserver`, called
//! synchronously once the navigator state is final. The methods return
//! nothing, and a panic inside one is caught and logged by the navigator,
//! so a receiver cannot influence navigator state.
//!
//! Observers run while the session lock is held and must not call back into
//! the session.

use tracing::{debug, info};
use uuid::Uuid;

use super::{Achievement, DashboardAction, Layer};

pub trait NavigatorObserver: Send + Sync {
    fn on_layer_change(&self, _layer: Layer) {}

    /// Milliseconds spent on the current layer since the last layer change.
    fn on_time_spent_update(&self, _millis: u64) {}

    fn on_achievement_unlocked(&self, _achievement: Achievement) {}

    fn on_action(&self, _action: &DashboardAction) {}
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl NavigatorObserver for NoopObserver {}

/// Reports navigator events as structured `tracing` events.
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    session_id: Uuid,
}

impl TracingObserver {
    #[must_use]
    pub fn new(session_id: Uuid) -> Self {
        Self { session_id }
    }
}

impl NavigatorObserver for TracingObserver {
    fn on_layer_change(&self, layer: Layer) {
        info!(session_id = %self.session_id, layer = layer.number(), "layer changed");
    }

    fn on_time_spent_update(&self, millis: u64) {
        debug!(session_id = %self.session_id, millis, "time spent on layer");
    }

    fn on_achievement_unlocked(&self, achievement: Achievement) {
        info!(session_id = %self.session_id, achievement = achievement.key(), "achievement unlocked");
    }

    fn on_action(&self, action: &DashboardAction) {
        match action {
            DashboardAction::ImmediateAction(a) => {
                info!(session_id = %self.session_id, action_id = %a.id, category = %a.category, "action clicked");
            }
            DashboardAction::ExpandInsight(id) => {
                info!(session_id = %self.session_id, insight_id = %id, "insight toggled");
            }
            other => debug!(session_id = %self.session_id, kind = other.kind(), "dashboard action"),
        }
    }
}
