use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

use snapview_logging::{snap_debug, snap_error, snap_info, snap_warn};

use crate::scheduler::{ChannelEventSink, TimerScheduler};
use crate::{EngineEvent, Host, TimerKey};

enum EngineCommand {
    Schedule { key: TimerKey, delay: Duration },
    Cancel { key: TimerKey },
    OpenExternal { url: String },
    Shutdown,
}

/// Handle to the background effect engine. Cheap to clone.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(host: Arc<dyn Host>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || run_engine(host, cmd_rx, event_tx));

        Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        }
    }

    pub fn schedule(&self, key: TimerKey, delay: Duration) {
        let _ = self.cmd_tx.send(EngineCommand::Schedule { key, delay });
    }

    pub fn cancel(&self, key: TimerKey) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { key });
    }

    pub fn open_external(&self, url: impl Into<String>) {
        let _ = self
            .cmd_tx
            .send(EngineCommand::OpenExternal { url: url.into() });
    }

    /// Stops the engine thread; pending timers are cancelled.
    pub fn shutdown(&self) {
        let _ = self.cmd_tx.send(EngineCommand::Shutdown);
    }

    /// Waits for the next event. `Disconnected` means the engine has stopped.
    pub fn recv_timeout(&self, timeout: Duration) -> Result<EngineEvent, RecvTimeoutError> {
        match self.event_rx.lock() {
            Ok(rx) => rx.recv_timeout(timeout),
            Err(_) => Err(RecvTimeoutError::Disconnected),
        }
    }
}

fn run_engine(
    host: Arc<dyn Host>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            snap_error!("Failed to start engine runtime: {}", err);
            return;
        }
    };

    let sink = Arc::new(ChannelEventSink::new(event_tx.clone()));
    let mut scheduler = TimerScheduler::new(runtime.handle().clone(), sink);

    while let Ok(command) = cmd_rx.recv() {
        match command {
            EngineCommand::Schedule { key, delay } => scheduler.schedule(key, delay),
            EngineCommand::Cancel { key } => {
                if !scheduler.cancel(key) {
                    snap_debug!("Cancel for {} ignored; timer already done", key);
                }
            }
            EngineCommand::OpenExternal { url } => {
                let host = host.clone();
                let event_tx = event_tx.clone();
                runtime.spawn_blocking(move || match host.open_external(&url) {
                    Ok(()) => snap_info!("Opened {} externally", url),
                    Err(err) => {
                        snap_warn!("Could not open {} externally: {}", url, err);
                        let _ = event_tx.send(EngineEvent::ExternalOpenFailed {
                            url,
                            reason: err.to_string(),
                        });
                    }
                });
            }
            EngineCommand::Shutdown => break,
        }
    }

    scheduler.cancel_all();
    snap_debug!("Engine stopped");
}
