use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use snapview_logging::snap_trace;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{EngineEvent, TimerKey};

pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

struct ScheduledTimer {
    token: CancellationToken,
    task: JoinHandle<()>,
}

/// One-shot timers that can be cancelled by key.
///
/// Rescheduling a key replaces its previous timer. Dropping the scheduler
/// cancels everything still pending.
pub struct TimerScheduler {
    runtime: Handle,
    sink: Arc<dyn EventSink>,
    timers: HashMap<TimerKey, ScheduledTimer>,
}

impl TimerScheduler {
    pub fn new(runtime: Handle, sink: Arc<dyn EventSink>) -> Self {
        Self {
            runtime,
            sink,
            timers: HashMap::new(),
        }
    }

    pub fn schedule(&mut self, key: TimerKey, delay: Duration) {
        self.prune();
        if let Some(previous) = self.timers.remove(&key) {
            previous.token.cancel();
        }

        let token = CancellationToken::new();
        let cancelled = token.clone();
        let sink = self.sink.clone();
        let task = self.runtime.spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {
                    snap_trace!("Timer {} cancelled", key);
                }
                _ = tokio::time::sleep(delay) => {
                    snap_trace!("Timer {} elapsed after {:?}", key, delay);
                    sink.emit(EngineEvent::TimerElapsed(key));
                }
            }
        });
        snap_trace!("Scheduled timer {} in {:?}", key, delay);
        self.timers.insert(key, ScheduledTimer { token, task });
    }

    /// Cancels a timer. Returns false if it was unknown or already fired.
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        self.prune();
        match self.timers.remove(&key) {
            Some(timer) => {
                timer.token.cancel();
                true
            }
            None => false,
        }
    }

    pub fn cancel_all(&mut self) {
        for (_, timer) in self.timers.drain() {
            timer.token.cancel();
        }
    }

    /// Number of timers that have neither fired nor been cancelled.
    pub fn pending(&self) -> usize {
        self.timers
            .values()
            .filter(|timer| !timer.task.is_finished())
            .count()
    }

    fn prune(&mut self) {
        self.timers.retain(|_, timer| !timer.task.is_finished());
    }
}

impl Drop for TimerScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
