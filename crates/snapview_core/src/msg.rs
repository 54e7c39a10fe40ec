#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box on the entry view.
    InputChanged(String),
    /// User pressed "Load Page".
    Submitted,
    /// User pressed the back arrow on the preview view.
    BackClicked,
    /// Host location changed (initial load, deep link, history navigation).
    LocationChanged(String),
    /// User selected a viewport tab.
    ModeSelected(crate::ViewportMode),
    /// User pressed the refresh control.
    RefreshClicked,
    /// A scheduled load timer elapsed.
    LoadTimerFired { ticket: crate::LoadTicket },
    /// The embedded frame finished loading or failed to.
    FrameSettled {
        ticket: crate::LoadTicket,
        outcome: crate::FrameOutcome,
    },
    /// User pressed "Capture Full Page".
    CaptureClicked,
    /// User pressed "Open in Browser" on the security overlay.
    OpenInBrowserClicked,
    /// Host viewport width changed, in logical pixels.
    ViewportResized(u32),
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
