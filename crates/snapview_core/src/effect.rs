use std::time::Duration;

use crate::LoadTicket;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Navigate the host to a new location, adding a history entry.
    PushLocation(String),
    /// Navigate the host without adding a history entry (redirects).
    ReplaceLocation(String),
    ScheduleLoadTimer { ticket: LoadTicket, delay: Duration },
    CancelLoadTimer { ticket: LoadTicket },
    /// Open an absolute URL in a new top-level browser context.
    OpenExternal { url: String },
    ShowToast(Toast),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub duration: Duration,
}

impl Toast {
    pub fn captured(duration: Duration) -> Self {
        Self {
            title: "Screenshot Captured!".to_string(),
            description: "Image saved to your Photos library.".to_string(),
            duration,
        }
    }
}
