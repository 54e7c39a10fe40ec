//! Snapview engine: timers and host integration behind the core's effects.
mod engine;
mod host;
mod scheduler;
mod types;

pub use engine::EngineHandle;
pub use host::{validate_external_url, Host, HostError, SystemBrowser};
pub use scheduler::{ChannelEventSink, EventSink, TimerScheduler};
pub use types::{EngineEvent, TimerKey};
