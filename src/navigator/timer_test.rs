use std::sync::Arc;

use uuid::Uuid;

use super::*;
use crate::navigator::{Achievement, Layer, NavigatorObserver, NoopObserver};

fn fresh() -> LayerNavigator {
    LayerNavigator::new(Uuid::new_v4(), Arc::new(NoopObserver))
}

struct FailingClockReceiver;

impl NavigatorObserver for FailingClockReceiver {
    fn on_time_spent_update(&self, _millis: u64) {
        panic!("time receiver failed");
    }
}

#[tokio::test(start_paused = true)]
async fn timer_ticks_once_per_period() {
    let session = Session::mount(fresh(), DEFAULT_TICK_PERIOD);
    tokio::time::sleep(Duration::from_millis(3_500)).await;
    assert_eq!(session.with(|nav| nav.elapsed_secs()), 3);
    assert!(session.is_ticking());
}

#[tokio::test(start_paused = true)]
async fn timer_unlocks_engaged_after_three_minutes() {
    let session = Session::mount(fresh(), DEFAULT_TICK_PERIOD);

    tokio::time::sleep(Duration::from_millis(179_500)).await;
    assert!(!session.with(|nav| nav.has_achievement(Achievement::Engaged)));

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert!(session.with(|nav| nav.has_achievement(Achievement::Engaged)));
}

#[tokio::test(start_paused = true)]
async fn unmount_stops_further_ticks() {
    let session = Session::mount(fresh(), DEFAULT_TICK_PERIOD);
    let shared = session.shared();

    tokio::time::sleep(Duration::from_millis(2_500)).await;
    let last = session.unmount();
    assert_eq!(last.elapsed_secs, 2);

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(lock(&shared).elapsed_secs(), 2);
}

#[tokio::test(start_paused = true)]
async fn dropping_the_session_stops_ticks() {
    let session = Session::mount(fresh(), DEFAULT_TICK_PERIOD);
    let shared = session.shared();

    tokio::time::sleep(Duration::from_millis(1_500)).await;
    drop(session);

    tokio::time::sleep(Duration::from_secs(5)).await;
    assert_eq!(lock(&shared).elapsed_secs(), 1);
}

#[tokio::test(start_paused = true)]
async fn navigation_interleaves_with_ticks() {
    let session = Session::mount(fresh(), DEFAULT_TICK_PERIOD);

    tokio::time::sleep(Duration::from_millis(1_500)).await;
    session.with(|nav| nav.go_to_layer(Layer::Insights));
    tokio::time::sleep(Duration::from_secs(2)).await;

    let snap = session.unmount();
    assert_eq!(snap.elapsed_secs, 3);
    assert_eq!(snap.progress.layer1_time_spent, 1);
    assert_eq!(snap.progress.layer2_time_spent, 2);
    assert_eq!(snap.completed_layers, vec![Layer::Snapshot]);
}

#[test]
fn detached_session_only_moves_on_explicit_ticks() {
    let session = Session::detached(fresh());
    assert!(!session.is_ticking());
    session.with(LayerNavigator::tick);
    assert_eq!(session.snapshot().elapsed_secs, 1);
    assert_eq!(session.unmount().elapsed_secs, 1);
}

#[tokio::test(start_paused = true)]
async fn failing_time_receiver_does_not_stop_the_timer() {
    let nav = LayerNavigator::new(Uuid::new_v4(), Arc::new(FailingClockReceiver));
    let session = Session::mount(nav, DEFAULT_TICK_PERIOD);

    tokio::time::sleep(Duration::from_millis(5_500)).await;
    assert!(session.is_ticking());
    assert_eq!(session.with(|nav| nav.elapsed_secs()), 5);
}

#[test]
fn unmount_disposes_the_shared_navigator() {
    let session = Session::detached(fresh());
    let shared = session.shared();
    let last = session.unmount();

    lock(&shared).tick();
    lock(&shared).go_to_layer(Layer::Insights);
    assert!(lock(&shared).is_disposed());
    assert_eq!(lock(&shared).snapshot(), last);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn tick_waiting_on_the_lock_is_dropped_after_unmount() {
    for _ in 0..20 {
        let session = Session::mount(fresh(), Duration::from_millis(5));
        let shared = session.shared();

        // Hold the lock past a tick deadline so the task wakes and blocks on it.
        {
            let _held = lock(&shared);
            std::thread::sleep(Duration::from_millis(20));
        }
        let last = session.unmount();

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(lock(&shared).snapshot(), last);
    }
}
