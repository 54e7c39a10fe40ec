use std::sync::{Arc, Mutex};
use std::time::Duration;

use snapview_engine::{EngineEvent, EventSink, TimerKey, TimerScheduler};
use tokio::runtime::Handle;

const LOAD_DELAY: Duration = Duration::from_millis(1500);

#[derive(Default)]
struct TestSink {
    events: Mutex<Vec<EngineEvent>>,
}

impl TestSink {
    fn take(&self) -> Vec<EngineEvent> {
        self.events.lock().unwrap().drain(..).collect()
    }
}

impl EventSink for TestSink {
    fn emit(&self, event: EngineEvent) {
        self.events.lock().unwrap().push(event);
    }
}

fn scheduler() -> (TimerScheduler, Arc<TestSink>) {
    let sink = Arc::new(TestSink::default());
    (TimerScheduler::new(Handle::current(), sink.clone()), sink)
}

/// Lets spawned timer tasks run without moving the paused clock.
async fn settle() {
    for _ in 0..8 {
        tokio::task::yield_now().await;
    }
}

#[tokio::test(start_paused = true)]
async fn timer_fires_after_delay_never_before() {
    let (mut scheduler, sink) = scheduler();
    scheduler.schedule(TimerKey::Load(1), LOAD_DELAY);

    tokio::time::sleep(LOAD_DELAY - Duration::from_millis(1)).await;
    settle().await;
    assert!(sink.take().is_empty());
    assert_eq!(scheduler.pending(), 1);

    tokio::time::sleep(Duration::from_millis(2)).await;
    settle().await;
    assert_eq!(
        sink.take(),
        vec![EngineEvent::TimerElapsed(TimerKey::Load(1))]
    );
    assert_eq!(scheduler.pending(), 0);
}

#[tokio::test(start_paused = true)]
async fn cancelled_timer_never_fires() {
    let (mut scheduler, sink) = scheduler();
    scheduler.schedule(TimerKey::Load(1), LOAD_DELAY);
    scheduler.schedule(TimerKey::Load(2), LOAD_DELAY * 2);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(scheduler.cancel(TimerKey::Load(1)));

    tokio::time::sleep(LOAD_DELAY * 3).await;
    settle().await;
    assert_eq!(
        sink.take(),
        vec![EngineEvent::TimerElapsed(TimerKey::Load(2))]
    );

    // Already fired or cancelled.
    assert!(!scheduler.cancel(TimerKey::Load(1)));
    assert!(!scheduler.cancel(TimerKey::Load(2)));
}

#[tokio::test(start_paused = true)]
async fn rescheduling_a_key_replaces_the_old_timer() {
    let (mut scheduler, sink) = scheduler();
    scheduler.schedule(TimerKey::Toast(1), Duration::from_millis(100));
    scheduler.schedule(TimerKey::Toast(1), Duration::from_millis(300));

    tokio::time::sleep(Duration::from_millis(200)).await;
    settle().await;
    assert!(sink.take().is_empty());

    tokio::time::sleep(Duration::from_millis(200)).await;
    settle().await;
    assert_eq!(
        sink.take(),
        vec![EngineEvent::TimerElapsed(TimerKey::Toast(1))]
    );
}

#[tokio::test(start_paused = true)]
async fn load_and_toast_keys_do_not_collide() {
    let (mut scheduler, sink) = scheduler();
    scheduler.schedule(TimerKey::Load(7), Duration::from_millis(100));
    scheduler.schedule(TimerKey::Toast(7), Duration::from_millis(200));
    assert_eq!(scheduler.pending(), 2);

    scheduler.cancel(TimerKey::Toast(7));
    tokio::time::sleep(Duration::from_millis(300)).await;
    settle().await;
    assert_eq!(
        sink.take(),
        vec![EngineEvent::TimerElapsed(TimerKey::Load(7))]
    );
}

#[tokio::test(start_paused = true)]
async fn dropping_scheduler_cancels_pending_timers() {
    let (mut scheduler, sink) = scheduler();
    scheduler.schedule(TimerKey::Load(1), LOAD_DELAY);
    drop(scheduler);

    tokio::time::sleep(LOAD_DELAY * 2).await;
    settle().await;
    assert!(sink.take().is_empty());
}
