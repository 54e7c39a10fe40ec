use std::time::Duration;

/// Default simulated page-load duration.
pub const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(1500);
/// Default lifetime of the capture notification.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);
/// Logical width of the desktop canvas before scaling.
pub const DEFAULT_DESKTOP_CANVAS_WIDTH: u32 = 1024;
/// Width of the mobile frame the host renders into.
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 448;

/// Tunables for the preview view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Domain that resolves to the bundled static mock in mobile mode.
    pub demo_domain: String,
    /// Show the demo domain instead of redirecting when `/preview` has no `url`.
    pub demo_fallback: bool,
    pub load_delay: Duration,
    pub toast_duration: Duration,
    pub desktop_canvas_width: u32,
    /// Bundled image rendered for the static mock.
    pub mock_asset: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            demo_domain: "stripe.com".to_string(),
            demo_fallback: false,
            load_delay: DEFAULT_LOAD_DELAY,
            toast_duration: DEFAULT_TOAST_DURATION,
            desktop_canvas_width: DEFAULT_DESKTOP_CANVAS_WIDTH,
            mock_asset: "assets/modern_saas_landing_page_mobile_screenshot.png".to_string(),
        }
    }
}
