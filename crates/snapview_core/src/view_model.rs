use crate::{LoadState, LoadTicket, ViewportMode};

pub const OVERLAY_TITLE: &str = "Security Protection";
pub const OVERLAY_MESSAGE: &str = "Some websites (like Google or Facebook) prevent themselves \
from being loaded inside other apps for security.";
pub const OVERLAY_ACTION: &str = "Open in Browser";

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub screen: ScreenView,
    pub viewport_width: u32,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Entry(EntryView),
    Preview(PreviewView),
    NotFound { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryView {
    pub input: String,
    pub can_submit: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PreviewView {
    /// Header title: the host part of the display URL.
    pub title: String,
    pub display_url: String,
    pub mode: ViewportMode,
    pub load_state: LoadState,
    pub refresh_spinning: bool,
    pub body: PreviewBody,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PreviewBody {
    Loading { caption: String },
    StaticMock { asset: String },
    Embedded(EmbeddedFrameView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmbeddedFrameView {
    pub src: String,
    /// Ticket the host must echo back in `Msg::FrameSettled`.
    pub ticket: LoadTicket,
    pub sandbox: String,
    pub interactive: bool,
    pub canvas: Option<DesktopCanvas>,
    pub overlay: SecurityOverlay,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesktopCanvas {
    pub width: u32,
    pub scale: f32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecurityOverlay {
    pub title: &'static str,
    pub message: &'static str,
    pub action_label: &'static str,
    /// URL opened by the escape action.
    pub escape_url: String,
}
