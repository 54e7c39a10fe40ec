use std::fmt;

/// Identifies a scheduled timer. Load timers and toast lifetimes share one
/// scheduler but never collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    Load(u64),
    Toast(u64),
}

impl fmt::Display for TimerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimerKey::Load(id) => write!(f, "load#{id}"),
            TimerKey::Toast(id) => write!(f, "toast#{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    TimerElapsed(TimerKey),
    /// The host could not open a URL externally. Informational only.
    ExternalOpenFailed { url: String, reason: String },
}
