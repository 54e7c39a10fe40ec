use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local};
use snapview_core::{Effect, LoadTicket, Msg, Toast, ENTRY_PATH};
use snapview_engine::{EngineEvent, EngineHandle, TimerKey};
use snapview_logging::{snap_debug, snap_info, snap_warn};

use super::app::AppEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ActiveToast {
    pub id: u64,
    pub toast: Toast,
    pub shown_at: DateTime<Local>,
}

/// Host-side session history; the last entry is the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LocationHistory {
    entries: Vec<String>,
}

impl Default for LocationHistory {
    fn default() -> Self {
        Self {
            entries: vec![ENTRY_PATH.to_string()],
        }
    }
}

impl LocationHistory {
    pub fn current(&self) -> &str {
        self.entries.last().map(String::as_str).unwrap_or(ENTRY_PATH)
    }

    pub fn push(&mut self, location: String) {
        self.entries.push(location);
    }

    pub fn replace(&mut self, location: String) {
        match self.entries.last_mut() {
            Some(current) => *current = location,
            None => self.entries.push(location),
        }
    }

    /// Steps back one entry and returns the new current location.
    pub fn back(&mut self) -> Option<String> {
        if self.entries.len() < 2 {
            return None;
        }
        self.entries.pop();
        Some(self.current().to_string())
    }
}

/// Executes core effects against the engine and keeps host-side presentation
/// state (location, visible toasts).
pub(crate) struct EffectRunner {
    engine: EngineHandle,
    history: LocationHistory,
    toasts: Vec<ActiveToast>,
    next_toast_id: u64,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle, event_tx: mpsc::Sender<AppEvent>) -> Self {
        let runner = Self {
            engine,
            history: LocationHistory::default(),
            toasts: Vec::new(),
            next_toast_id: 0,
        };
        runner.spawn_event_loop(event_tx);
        runner
    }

    pub fn history(&self) -> &LocationHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut LocationHistory {
        &mut self.history
    }

    pub fn toasts(&self) -> &[ActiveToast] {
        &self.toasts
    }

    /// Runs effects in order. Returns true if host-visible state changed.
    pub fn enqueue(&mut self, effects: Vec<Effect>) -> bool {
        let mut changed = false;
        for effect in effects {
            match effect {
                Effect::PushLocation(location) => {
                    snap_debug!("Push location {}", location);
                    self.history.push(location);
                    changed = true;
                }
                Effect::ReplaceLocation(location) => {
                    snap_info!("Redirect to {}", location);
                    self.history.replace(location);
                    changed = true;
                }
                Effect::ScheduleLoadTimer { ticket, delay } => {
                    self.engine.schedule(TimerKey::Load(ticket.get()), delay);
                }
                Effect::CancelLoadTimer { ticket } => {
                    self.engine.cancel(TimerKey::Load(ticket.get()));
                }
                Effect::OpenExternal { url } => {
                    snap_info!("OpenExternal url_len={} url={}", url.len(), url);
                    self.engine.open_external(url);
                }
                Effect::ShowToast(toast) => {
                    self.show_toast(toast);
                    changed = true;
                }
            }
        }
        changed
    }

    /// Removes an expired toast. Returns false if it was already gone.
    pub fn expire_toast(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|active| active.id != id);
        before != self.toasts.len()
    }

    pub fn shutdown(&self) {
        self.engine.shutdown();
    }

    fn show_toast(&mut self, toast: Toast) {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        snap_info!("Toast {} '{}' for {:?}", id, toast.title, toast.duration);
        self.engine.schedule(TimerKey::Toast(id), toast.duration);
        self.toasts.push(ActiveToast {
            id,
            toast,
            shown_at: Local::now(),
        });
    }

    fn spawn_event_loop(&self, event_tx: mpsc::Sender<AppEvent>) {
        let engine = self.engine.clone();
        thread::spawn(move || loop {
            let event = match engine.recv_timeout(Duration::from_millis(100)) {
                Ok(event) => event,
                Err(RecvTimeoutError::Timeout) => continue,
                Err(RecvTimeoutError::Disconnected) => break,
            };
            let app_event = match event {
                EngineEvent::TimerElapsed(TimerKey::Load(id)) => AppEvent::Core(Msg::LoadTimerFired {
                    ticket: LoadTicket::new(id),
                }),
                EngineEvent::TimerElapsed(TimerKey::Toast(id)) => AppEvent::ToastExpired(id),
                EngineEvent::ExternalOpenFailed { url, reason } => {
                    snap_warn!("Open in browser failed for {}: {}", url, reason);
                    AppEvent::Notice(format!("Could not open {url} in the browser."))
                }
            };
            if event_tx.send(app_event).is_err() {
                break;
            }
        });
    }
}
