//! Snapview core: pure routing, preview state machine and view-model helpers.
mod config;
mod effect;
mod msg;
mod preview;
mod route;
mod state;
mod strategy;
mod target;
mod update;
mod view_model;

pub use config::{
    PreviewConfig, DEFAULT_DESKTOP_CANVAS_WIDTH, DEFAULT_LOAD_DELAY, DEFAULT_TOAST_DURATION,
    DEFAULT_VIEWPORT_WIDTH,
};
pub use effect::{Effect, Toast};
pub use msg::Msg;
pub use preview::{FrameOutcome, LoadState, LoadTicket, PreviewState, TicketCounter};
pub use route::{Route, ENTRY_PATH, PREVIEW_PATH, URL_PARAM};
pub use state::AppState;
pub use strategy::{
    desktop_scale, sandbox_attribute, select_strategy, RenderStrategy, SandboxGrant,
    ViewportMode, EMBED_SANDBOX,
};
pub use target::{DisplayUrl, TargetUrl};
pub use update::update;
pub use view_model::{
    AppViewModel, DesktopCanvas, EmbeddedFrameView, EntryView, PreviewBody, PreviewView,
    ScreenView, SecurityOverlay, OVERLAY_ACTION, OVERLAY_MESSAGE, OVERLAY_TITLE,
};
